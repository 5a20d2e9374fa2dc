//! Periodic abandoned-cart sweeper.
//!
//! Best effort: a failed sweep is logged and retried on the next tick,
//! never surfaced to any request.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use picnic_infra::{CartService, DEFAULT_MAX_AGE_MINUTES};

/// Sweeper configuration.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run the sweep.
    pub interval: Duration,
    /// Idle threshold handed to the sweep.
    pub max_age_minutes: i64,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(600),
            max_age_minutes: DEFAULT_MAX_AGE_MINUTES,
        }
    }
}

/// Handle to a running sweeper task.
#[derive(Debug)]
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl SweeperHandle {
    /// Request shutdown and wait for the task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.join.await;
    }
}

/// Spawn the sweeper on the current runtime.
pub fn spawn(carts: CartService, config: SweeperConfig) -> SweeperHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let join = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config.interval);
        // The first tick fires immediately; skip it so startup stays quiet.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match carts.clear_abandoned_carts(config.max_age_minutes).await {
                        Ok(report) if report.deleted > 0 => {
                            tracing::info!(deleted = report.deleted, "swept abandoned carts");
                        }
                        Ok(_) => {}
                        Err(e) => tracing::warn!("cart sweep failed: {e}"),
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }
    });

    SweeperHandle {
        shutdown: shutdown_tx,
        join,
    }
}
