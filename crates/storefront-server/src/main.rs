mod api;
mod middleware;

use std::sync::Arc;

use storefront_catalog::{CatalogClient, SlideClient};
use storefront_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let state = build_state(&config)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        env = %config.env,
        "storefront server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let operator = storefront_core::load_operator_or_default(config.operator_path.as_deref())?;
    if config.operator_path.is_none() {
        tracing::info!("STOREFRONT_OPERATOR_PATH not set; using default storefront settings");
    }

    if config.catalog.base_url.is_none() {
        tracing::warn!("WOOCOMMERCE_URL not set; catalog routes will report a configuration error");
    }

    Ok(AppState {
        catalog: Arc::new(CatalogClient::from_app_config(config)?),
        slides: Arc::new(SlideClient::from_app_config(config)?),
        operator: Arc::new(operator),
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
