use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::{ConfigService, ServerConfig};

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load config and data, then serve until shutdown
pub async fn run() -> std::io::Result<()> {
    let config = ConfigService::load().map_err(|err| {
        eprintln!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    init_tracing(&config);
    info!(
        data_path = %config.data_path.display(),
        bind = %config.bind_addr(),
        workers = ?config.workers,
        "Starting contractor board"
    );

    let state = crate::infrastructure::bootstrap::setup(&config)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    crate::interfaces::http::start_server(state, &config)
        .map_err(|err| {
            error!(error = %err, bind = %config.bind_addr(), "Failed to bind HTTP server");
            err
        })?
        .await?;

    info!("Contractor board stopped");
    Ok(())
}
