//! DTOs for the shorten endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{Mode, ParseModeError};
use crate::error::AppError;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_check::check_target_url;

/// Request body for `POST /`.
///
/// ```json
/// { "url": "https://github.com/meain", "code": "g", "mode": "sub" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Target URL (must be an absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, max = 8192, message = "URL must not be empty"))]
    pub url: String,

    /// Optional custom short code; empty is treated as absent. Checked by
    /// [`validate_custom_code`].
    #[serde(default)]
    pub code: Option<String>,

    /// `exact` (default) or `sub`.
    #[serde(default)]
    pub mode: Option<String>,
}

/// A validated shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenCommand {
    pub url: String,
    pub code: Option<String>,
    pub mode: Mode,
}

impl ShortenRequest {
    /// Validates the request and applies the defaulting rules.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid url, code or mode.
    pub fn into_command(self) -> Result<ShortenCommand, AppError> {
        self.validate()?;
        check_target_url(&self.url)?;
        let mode = parse_mode(self.mode.as_deref())?;

        let code = self.code.filter(|c| !c.is_empty());
        if let Some(code) = &code {
            validate_custom_code(code)?;
        }

        Ok(ShortenCommand {
            url: self.url,
            code,
            mode,
        })
    }
}

/// Parses a request mode; absent or blank means [`Mode::Exact`].
pub fn parse_mode(raw: Option<&str>) -> Result<Mode, ParseModeError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Mode::Exact),
        Some(value) => value.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, code: Option<&str>, mode: Option<&str>) -> ShortenRequest {
        ShortenRequest {
            url: url.to_string(),
            code: code.map(str::to_string),
            mode: mode.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_mode_defaults_to_exact() {
        assert_eq!(parse_mode(None).unwrap(), Mode::Exact);
        assert_eq!(parse_mode(Some("")).unwrap(), Mode::Exact);
        assert_eq!(parse_mode(Some("sub")).unwrap(), Mode::Sub);
        assert!(parse_mode(Some("prefix")).is_err());
    }

    #[test]
    fn test_into_command_minimal() {
        let command = request("https://domain.tld", None, None)
            .into_command()
            .unwrap();

        assert_eq!(
            command,
            ShortenCommand {
                url: "https://domain.tld".to_string(),
                code: None,
                mode: Mode::Exact,
            }
        );
    }

    #[test]
    fn test_into_command_empty_code_is_absent() {
        let command = request("https://domain.tld", Some(""), Some("sub"))
            .into_command()
            .unwrap();

        assert_eq!(command.code, None);
        assert_eq!(command.mode, Mode::Sub);
    }

    #[test]
    fn test_into_command_rejects_bad_input() {
        assert!(request("", None, None).into_command().is_err());
        assert!(request("not a url", None, None).into_command().is_err());
        assert!(request("https://domain.tld", Some("a/b"), None).into_command().is_err());
        assert!(request("https://domain.tld", Some("health"), None).into_command().is_err());
        assert!(request("https://domain.tld", None, Some("both")).into_command().is_err());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let req: ShortenRequest = serde_json::from_str(r#"{"url":"https://domain.tld"}"#).unwrap();
        assert!(req.code.is_none());
        assert!(req.mode.is_none());
    }

    #[test]
    fn test_into_command_code_rules() {
        let long = "a".repeat(65);
        assert!(request("https://domain.tld", Some(&long), None).into_command().is_err());

        let max = "a".repeat(64);
        let command = request("https://domain.tld", Some(&max), None)
            .into_command()
            .unwrap();
        assert_eq!(command.code.as_deref(), Some(max.as_str()));

        assert!(request("https://domain.tld", Some("has space"), None).into_command().is_err());
    }
}
