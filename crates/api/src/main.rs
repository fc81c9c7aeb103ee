use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_events::{ActionBus, AnalyticsSink};
use atelier_remote::RemoteApi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_api=debug,tower_http=debug,analytics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        remote_api_url = %config.remote_api_url,
        "Loaded server configuration"
    );

    // --- Catalog ---
    // Forces parsing and validation now rather than on the first request.
    let catalog = atelier_core::catalog();
    tracing::info!(
        styles = catalog.styles().len(),
        feelings = catalog.feelings().len(),
        "Style catalog loaded"
    );

    // --- Remote API client ---
    let remote = Arc::new(RemoteApi::new(config.remote_api_url.clone()));

    // --- Action bus + analytics ---
    let action_bus = Arc::new(ActionBus::default());
    let analytics_handle = tokio::spawn(AnalyticsSink::run(action_bus.subscribe()));
    tracing::info!("Analytics sink started");

    // --- App state ---
    let state = AppState {
        catalog,
        remote,
        action_bus: Arc::clone(&action_bus),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // The router (and its state clone of the bus) is gone; dropping the
    // last handle closes the channel and lets the sink drain.
    drop(action_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), analytics_handle).await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
