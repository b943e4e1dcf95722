use std::sync::Arc;

use tokio::signal;

use roster::errors::{DirectoryError, Report};
use roster::log;

mod config;
mod error;
mod handlers;
mod routes;
mod services;

use services::{ActivityDirectoryInMemory, ActivityService};

/// Shared state handed to every handler.
pub struct AppState {
    pub activities: Arc<dyn ActivityService<Error = DirectoryError> + Send + Sync>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: Arc<dyn ActivityService<Error = DirectoryError> + Send + Sync>) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    roster::log::setup()?;

    let config = config::Config::from_env()?;

    let state = Arc::new(AppState::new(Arc::new(ActivityDirectoryInMemory::seeded())));
    let app = routes::setup_routes(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Serving frontend from {}", config.static_dir.display());
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
