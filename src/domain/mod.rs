//! Domain layer: entities, the code registry and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::Entry`] and [`entities::Mode`]
//! - [`registry`] - Bidirectional code/url index with exclusive transactions
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//! - [`errors`] - Error types shared by the registry and the services
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The registry never hands out its maps; callers go through its operations
//! - Business policy (reuse, conflicts, code minting) lives in
//!   [`crate::application::services`]

pub mod entities;
pub mod errors;
pub mod registry;
pub mod repositories;

pub use registry::{Registry, RegistryTxn};
