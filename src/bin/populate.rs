//! One-shot populate tool
//!
//! Seeds the registry from the static subnet manifest. The whole batch is
//! inserted in a single transaction and any error aborts the run with a
//! non-zero exit, so a failed run leaves the store unchanged.

use subnet_registry::{
    NewSubnet,
    config::Config,
    manifest,
    registry::{Backend, Registry},
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load("config/default.toml")?;

    let backend = Backend::from_uri(&config.database.uri);
    let registry = Registry::open(backend).await?;

    let entries = manifest::load(&config.manifest.path)?;
    info!("Loaded {} subnets from {}", entries.len(), config.manifest.path);

    let subnets: Vec<NewSubnet> = entries.into_iter().map(NewSubnet::from).collect();
    registry.create_all(&subnets).await?;

    info!("Subnets populated successfully");

    Ok(())
}
