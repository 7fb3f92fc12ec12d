//! Background scheduled tasks.
//!
//! Call `spawn_all` once during startup, after the initial reconciliation.

use crate::config::ReconcileConfig;
use crate::services::ReconcileService;
use chrono::Utc;
use std::time::Duration;

/// Spawn all background tasks. Detaches via `tokio::spawn`; does not block.
pub fn spawn_all(reconcile_config: &ReconcileConfig, reconcile_service: ReconcileService) {
    if reconcile_config.interval_secs == 0 {
        log::info!("Periodic reconciliation disabled");
        return;
    }

    // status + alerts catch up even when nobody lists subscriptions
    let period = Duration::from_secs(reconcile_config.interval_secs);
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(period).await;
            if let Err(e) = reconcile_service.run(Utc::now()).await {
                log::error!("Periodic reconciliation failed: {e:?}");
            }
        }
    });
}
