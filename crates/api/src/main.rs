use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use picnic_api::app;
use picnic_api::sweeper::{self, SweeperConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    picnic_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let services = Arc::new(app::services::build_services());

    let sweeper_config = SweeperConfig {
        interval: Duration::from_secs(env_i64("SWEEP_INTERVAL_SECS", 600) as u64),
        max_age_minutes: env_i64("CART_MAX_AGE_MINUTES", picnic_infra::DEFAULT_MAX_AGE_MINUTES),
    };
    let _sweeper = sweeper::spawn(services.carts.clone(), sweeper_config);

    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}

fn env_i64(key: &str, default: i64) -> i64 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{key}={raw} is not a number; using {default}");
            default
        }),
        Err(_) => default,
    }
}
