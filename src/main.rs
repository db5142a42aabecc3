use subnet_registry::{
    api::Server,
    config::Config,
    registry::{Backend, Registry},
};
use tracing::info;

/// The main entry point for the registry API service.
///
/// Initializes logging, loads the application configuration, opens the
/// subnet registry on the configured backend, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load("config/default.toml")?;
    info!("Registry starting with config: {:?}", config);

    // The backend is resolved once here and passed down explicitly.
    let backend = Backend::from_uri(&config.database.uri);
    let registry = Registry::open(backend).await?;

    let server = Server::new(config, registry);
    server.start().await?;

    Ok(())
}
