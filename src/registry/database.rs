//! Subnet Record Store
//!
//! This module implements persistence of subnet records on top of a sqlx
//! `Any` pool, so one code path serves SQLite (in-memory or file-backed) and
//! PostgreSQL. The schema is created on open and records are only ever
//! inserted and read back in bulk.

use crate::{NewSubnet, StoreError, Subnet};
use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use std::sync::Once;
use tracing::{debug, info};

// The Any driver set may only be installed once per process.
static INSTALL_DRIVERS: Once = Once::new();

/// Storage backend, resolved once at startup from the configured URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Transient in-memory database, lost on process exit
    Memory,
    /// Embedded database file at the given path, created if absent
    File(String),
    /// Networked PostgreSQL instance
    Network(String),
}

impl Backend {
    /// Resolve a backend from a connection URI
    ///
    /// An empty URI selects the in-memory backend, a leading "/" or "./"
    /// selects an embedded database file at that path, and anything else is
    /// treated as a PostgreSQL connection string.
    pub fn from_uri(uri: &str) -> Self {
        if uri.is_empty() {
            Backend::Memory
        } else if uri.starts_with('/') || uri.starts_with("./") {
            Backend::File(uri.to_string())
        } else {
            Backend::Network(uri.to_string())
        }
    }

    /// Connection URL understood by the sqlx `Any` driver
    fn connection_url(&self) -> String {
        match self {
            Backend::Memory => "sqlite::memory:".to_string(),
            // mode=rwc creates the database file when it does not exist yet
            Backend::File(path) => format!("sqlite:{}?mode=rwc", path),
            Backend::Network(uri) => uri.clone(),
        }
    }

    fn is_postgres(&self) -> bool {
        matches!(self, Backend::Network(_))
    }
}

// The `Any` driver passes SQL through verbatim, so DDL and placeholder
// syntax are per-dialect.
const CREATE_TABLE_SQLITE: &str = "\
CREATE TABLE IF NOT EXISTS subnets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner TEXT NOT NULL,
    subnet_id TEXT NOT NULL,
    vm_id TEXT NOT NULL
)";

const CREATE_TABLE_POSTGRES: &str = "\
CREATE TABLE IF NOT EXISTS subnets (
    id BIGSERIAL PRIMARY KEY,
    owner TEXT NOT NULL,
    subnet_id TEXT NOT NULL,
    vm_id TEXT NOT NULL
)";

const INSERT_SQLITE: &str = "INSERT INTO subnets (owner, subnet_id, vm_id) VALUES (?, ?, ?)";
const INSERT_POSTGRES: &str = "INSERT INTO subnets (owner, subnet_id, vm_id) VALUES ($1, $2, $3)";

const SELECT_ALL: &str = "SELECT id, owner, subnet_id, vm_id FROM subnets ORDER BY id";

/// Subnet record registry
///
/// Cheap to clone; clones share the underlying connection pool. The pool is
/// the only synchronization point, handlers issue queries against it
/// concurrently without additional locking.
#[derive(Clone)]
pub struct Registry {
    pool: AnyPool,
    backend: Backend,
}

impl Registry {
    /// Open the registry on the given backend and ensure the schema exists
    ///
    /// # Returns
    /// * `Ok(Registry)` once connected and migrated
    /// * `Err(StoreError::Connection)` if the backend cannot be reached
    /// * `Err(StoreError::Schema)` if the schema cannot be created
    pub async fn open(backend: Backend) -> Result<Self, StoreError> {
        INSTALL_DRIVERS.call_once(install_default_drivers);

        let options = match &backend {
            // An in-memory SQLite database exists per connection, so the pool
            // is pinned to a single connection that is never recycled.
            Backend::Memory => AnyPoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
            _ => AnyPoolOptions::new().max_connections(8),
        };

        let pool = options
            .connect(&backend.connection_url())
            .await
            .map_err(StoreError::Connection)?;
        info!("Connected to {:?} database backend", backend);

        let registry = Self { pool, backend };
        registry.migrate().await?;

        Ok(registry)
    }

    /// Create the subnets table if it is missing; no-op when already present
    async fn migrate(&self) -> Result<(), StoreError> {
        let ddl = if self.backend.is_postgres() {
            CREATE_TABLE_POSTGRES
        } else {
            CREATE_TABLE_SQLITE
        };

        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Schema)?;

        Ok(())
    }

    fn insert_sql(&self) -> &'static str {
        if self.backend.is_postgres() {
            INSERT_POSTGRES
        } else {
            INSERT_SQLITE
        }
    }

    /// Insert one subnet record, assigning a fresh surrogate id
    ///
    /// Duplicates are accepted, no uniqueness is enforced on any column.
    pub async fn create(&self, subnet: &NewSubnet) -> Result<(), StoreError> {
        debug!("Inserting subnet {} for {}", subnet.subnet_id, subnet.owner);

        sqlx::query(self.insert_sql())
            .bind(&subnet.owner)
            .bind(&subnet.subnet_id)
            .bind(&subnet.vm_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        Ok(())
    }

    /// Insert a batch of subnet records inside a single transaction
    ///
    /// Either every record is committed or none are, a failure part way
    /// through leaves the store unchanged.
    pub async fn create_all(&self, subnets: &[NewSubnet]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Write)?;

        for subnet in subnets {
            sqlx::query(self.insert_sql())
                .bind(&subnet.owner)
                .bind(&subnet.subnet_id)
                .bind(&subnet.vm_id)
                .execute(&mut *tx)
                .await
                .map_err(StoreError::Write)?;
        }

        tx.commit().await.map_err(StoreError::Write)?;

        Ok(())
    }

    /// Return every stored record, ordered by surrogate id
    ///
    /// Surrogate ids are monotonically assigned, so this is insertion order.
    pub async fn find_all(&self) -> Result<Vec<Subnet>, StoreError> {
        sqlx::query_as::<_, Subnet>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Read)
    }
}
