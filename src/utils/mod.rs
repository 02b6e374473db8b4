//! Helpers for code generation and request validation.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`url_check`] - Target URL validation

pub mod code_generator;
pub mod url_check;
