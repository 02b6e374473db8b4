//! Entry store implementations.
//!
//! - [`JsonFileStore`] - Whole-registry JSON file, rewritten on every save
//! - [`NullStore`] - No persistence

pub mod json_file_store;
pub mod null_store;

pub use json_file_store::JsonFileStore;
pub use null_store::NullStore;
