//! Infrastructure layer for external integrations.
//!
//! Provides the concrete [`crate::domain::repositories::EntryStore`]
//! implementations in [`persistence`].

pub mod persistence;
