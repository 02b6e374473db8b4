//! Entry entity: one short code and everything recorded about it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a short code addresses its target.
///
/// The mode is fixed when the entry is created. It only influences which
/// submissions are accepted for an existing URL; redirects resolve the same
/// way for both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The target URL is used verbatim.
    #[default]
    Exact,
    /// Any path after the code is appended to the target URL.
    Sub,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Exact => "exact",
            Mode::Sub => "sub",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}', expected 'exact' or 'sub'")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("exact") {
            Ok(Mode::Exact)
        } else if s.eq_ignore_ascii_case("sub") {
            Ok(Mode::Sub)
        } else {
            Err(ParseModeError(s.to_string()))
        }
    }
}

/// A short code bound to a target URL, with usage counters.
///
/// Field names serialize in camelCase. The capitalised aliases accept data
/// files written by earlier deployments (`Url`, `Code`, `Mode`, `Count`,
/// `Scount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(alias = "Url")]
    pub url: String,
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(alias = "Mode", default)]
    pub mode: Mode,
    /// Number of redirects served for this code.
    #[serde(alias = "Count", default)]
    pub redirect_count: u64,
    /// Number of shorten requests that resolved to this code.
    #[serde(alias = "Scount", default)]
    pub shorten_count: u64,
}

impl Entry {
    /// Creates a freshly minted entry: no redirects yet, shortened once.
    pub fn new(url: impl Into<String>, code: impl Into<String>, mode: Mode) -> Self {
        Self {
            url: url.into(),
            code: code.into(),
            mode,
            redirect_count: 0,
            shorten_count: 1,
        }
    }

    /// Returns true if this entry was created for the given url and mode.
    pub fn binds(&self, url: &str, mode: Mode) -> bool {
        self.url == url && self.mode == mode
    }

    /// Builds the redirect target for an optional path remainder.
    ///
    /// The remainder is joined with a single `/` and is not re-encoded.
    pub fn target(&self, remainder: Option<&str>) -> String {
        match remainder {
            Some(rest) => format!("{}/{}", self.url, rest),
            None => self.url.clone(),
        }
    }
}
