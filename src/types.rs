use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subnet record persisted by the registry
///
/// The JSON field names are the wire contract consumed by downstream tooling
/// and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subnet {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "SubnetID")]
    pub subnet_id: String,
    #[serde(rename = "VMID")]
    pub vm_id: String,
}

/// Subnet record before insertion, id not yet assigned
#[derive(Debug, Clone)]
pub struct NewSubnet {
    pub owner: String,
    pub subnet_id: String,
    pub vm_id: String,
}

/// One entry of the subnet manifest file
///
/// Missing fields decode to empty strings, unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SubnetEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "subnetId")]
    pub subnet_id: String,
    #[serde(default, rename = "vmId")]
    pub vm_id: String,
}

impl From<SubnetEntry> for NewSubnet {
    /// The manifest's "name" becomes the record's owner
    fn from(entry: SubnetEntry) -> Self {
        Self {
            owner: entry.name,
            subnet_id: entry.subnet_id,
            vm_id: entry.vm_id,
        }
    }
}

/// Derived node configuration listing the subnets to track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    #[serde(rename = "track-subnets")]
    pub track_subnets: String,
}

/// Subnet record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database connection: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("failed to create database schema: {0}")]
    Schema(#[source] sqlx::Error),
    #[error("failed to read from database: {0}")]
    Read(#[source] sqlx::Error),
    #[error("failed to write to database: {0}")]
    Write(#[source] sqlx::Error),
}

/// Manifest loader errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("error reading manifest file: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Base64 encoder errors
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("error serializing value to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
