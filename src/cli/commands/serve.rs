use anyhow::Result;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::{initialize_app_state, AppConfig};
use crate::router::create_router;

pub async fn serve(data_dir: PathBuf, bind_address: &str) -> Result<()> {
    info!("Kurs dashboard starting up");
    debug!("Data directory: {}", data_dir.display());
    debug!("Bind address: {}", bind_address);

    // Initialize application state
    let config = AppConfig {
        data_dir,
        bind_address: bind_address.to_string(),
    };
    let state = match initialize_app_state(config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize application state: {e}");
            return Err(e);
        }
    };

    // Create router
    let app = create_router(state);

    // Start server
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {bind_address}: {e}");
            return Err(e.into());
        }
    };

    info!("Dashboard available at http://{bind_address}/");
    info!("Swagger UI available at http://{bind_address}/swagger-ui");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
