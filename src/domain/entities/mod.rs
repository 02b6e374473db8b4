//! Core domain entities.
//!
//! - [`Entry`] - A short code bound to a target URL, with usage counters
//! - [`Mode`] - Exact or prefix (sub) addressing

pub mod entry;

pub use entry::{Entry, Mode, ParseModeError};
