//! API Module
//!
//! This module handles the HTTP API for querying registered subnets.
//! It provides the endpoints that clients use to read subnet records and the
//! derived tracking configuration.

mod server;


pub use server::Server;
