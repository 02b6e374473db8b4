//! Short code generation and validation utilities.
//!
//! Generated codes are drawn from the base57 alphabet, which leaves out the
//! look-alike characters `0`, `O`, `1`, `I` and `l`. All symbols are safe
//! in a URL path.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Symbols used for generated codes.
pub const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the first candidate for a new code.
pub const PRIMARY_CODE_LENGTH: usize = 7;

/// Length of every candidate drawn after a collision.
pub const FALLBACK_CODE_LENGTH: usize = 5;

/// Maximum length of a user-provided code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Codes that would shadow service routes.
pub const RESERVED_CODES: &[&str] = &["api", "health"];

/// Source of candidate short codes.
///
/// Candidates are not checked for uniqueness here; the shortener verifies
/// every candidate against the registry before accepting it.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Draws a candidate code of exactly `len` characters.
    fn generate(&self, len: usize) -> String;
}

/// Thread-local RNG backed [`CodeGenerator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
