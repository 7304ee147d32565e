mod api_doc;
mod calculator;
mod catalog;
mod config;
mod deployment;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use deployment::DeploymentInfo;
use state::AppState;
use store::ItemStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("deploy-probe starting");

    let config = Config::from_env()?;
    config.log_startup();

    let deployment = DeploymentInfo::capture(&config);
    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState::new(
        config,
        deployment,
        ItemStore::seeded(),
        catalog::seed_products(),
    );

    tracing::info!(
        "Deployed {} v{} (build #{}) at {}; seeded {} items and {} products",
        state.deployment.app_name,
        state.deployment.version,
        state.deployment.build_number,
        state.deployment.deployed_at_rfc3339(),
        state.items.len().await,
        state.products.len()
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, routes::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("deploy-probe shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}
