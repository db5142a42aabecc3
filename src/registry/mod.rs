//! Subnet Registry Module
//!
//! This module provides the database registry for storing subnet records.
//! A single configuration URI selects between an in-memory database, an
//! embedded database file, and a networked PostgreSQL instance.

mod database;

#[cfg(test)]
mod tests;

pub use database::{Backend, Registry};
