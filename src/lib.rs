//! This crate implements a subnet registry service: it persists blockchain
//! subnet descriptors (owner, subnet id, VM id) in a relational backend and
//! serves them over HTTP as raw records, as a derived tracking configuration,
//! and as that configuration base64-encoded. A companion populate binary
//! seeds the registry from a static JSON manifest.

pub mod types; // Defines common data structures and error types used throughout the system.
pub mod api; // Handles the external HTTP API.
pub mod registry; // Manages persistence of subnet records.
pub mod manifest; // Loads the static subnet manifest file.
pub mod tracking; // Derives and encodes the tracking configuration.
pub mod config; // Defines and loads system configuration.

// Re-export commonly used types and configurations for easier access.
pub use config::Config;
pub use types::*;
