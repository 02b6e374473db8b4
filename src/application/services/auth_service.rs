//! Basic-auth credential check.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

type Digest32 = [u8; 32];

struct Credentials {
    user: Digest32,
    password: Digest32,
}

/// Service for checking HTTP basic-auth credentials.
///
/// Credentials are held and compared as SHA-256 digests so the comparison
/// does not depend on the length of either input.
pub struct AuthService {
    credentials: Option<Credentials>,
}

impl AuthService {
    /// Creates an authentication service.
    ///
    /// Authentication is enabled only when `password` is non-empty.
    pub fn new(user: Option<&str>, password: Option<&str>) -> Self {
        let credentials = match password {
            Some(password) if !password.is_empty() => Some(Credentials {
                user: digest(user.unwrap_or_default()),
                password: digest(password),
            }),
            _ => None,
        };

        Self { credentials }
    }

    /// Creates a service that accepts every request.
    pub fn disabled() -> Self {
        Self { credentials: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Checks a user/password pair.
    ///
    /// Both must match. Always succeeds when authentication is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on mismatch.
    pub fn authenticate(&self, user: &str, password: &str) -> Result<(), AppError> {
        let Some(credentials) = &self.credentials else {
            return Ok(());
        };

        let user_ok = digests_equal(&credentials.user, &digest(user));
        let password_ok = digests_equal(&credentials.password, &digest(password));

        if user_ok & password_ok {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid username or password" }),
            ))
        }
    }
}

fn digest(value: &str) -> Digest32 {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(value.as_bytes()));
    out
}

fn digests_equal(a: &Digest32, b: &Digest32) -> bool {
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
