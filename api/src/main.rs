use anyhow::Result;
use dotenv::dotenv;

use api::config::AppConfig;
use api::observability::Observability;
use api::routes;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let obs = Observability::init()?;
    let config = AppConfig::from_env()?;
    let addr = config.socket_addr();
    let environment = config.environment.name().to_string();
    let port = config.port;

    if config.serve_static() {
        tracing::info!("Serving static assets from {}", config.static_dir.display());
    }

    // Create app state and router
    let state = AppState::new(config, obs.registry);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("===========================================");
    tracing::info!("🚀 Serveur Africa Investment démarré");
    tracing::info!("📡 Port: {}", port);
    tracing::info!("🌍 Environnement: {}", environment);
    tracing::info!("🔗 URL: http://localhost:{}", port);
    tracing::info!("📋 API Health Check: http://localhost:{}/api/health", port);
    tracing::info!("===========================================");

    axum::serve(listener, app)
        .with_graceful_shutdown(signal_support::create_shutdown_signal())
        .await?;

    tracing::info!("🛑 Arrêt du serveur Africa Investment...");
    Ok(())
}

/// Signal handling support
mod signal_support {
    use std::future::Future;

    pub fn create_shutdown_signal() -> impl Future<Output = ()> {
        async {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{signal, SignalKind};

                let (mut sigterm, mut sigint) =
                    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                        (Ok(term), Ok(int)) => (term, int),
                        (Err(e), _) | (_, Err(e)) => {
                            tracing::error!("Failed to register signal handlers: {}", e);
                            return std::future::pending::<()>().await;
                        }
                    };

                tokio::select! {
                    _ = sigterm.recv() => {
                        tracing::info!("Received SIGTERM");
                    }
                    _ = sigint.recv() => {
                        tracing::info!("Received SIGINT");
                    }
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for Ctrl+C: {}", e);
                    return std::future::pending::<()>().await;
                }
                tracing::info!("Received Ctrl+C");
            }
        }
    }
}
