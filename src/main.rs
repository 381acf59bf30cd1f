// Famigo backend server

use tokio::net::TcpListener;

use famigo_backend::{app_state::AppState, config::Config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize application state (store opened once, for the process lifetime)
    let state = AppState::new(config.clone()).await?;
    let store = state.store.clone();

    let app = routes::app(state);

    let addr = config.server_address();
    tracing::info!("famigo backend listening on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the store connection on shutdown
    store.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
    }
}
