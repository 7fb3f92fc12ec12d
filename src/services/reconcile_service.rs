use crate::error::AppResult;
use crate::services::{AlertService, StatusService};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub to_expiring: u64,
    pub to_expired: u64,
    pub alerts_created: u64,
}

impl ReconcileReport {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// One reconciliation pass: status evaluation, then expiring-alert generation.
///
/// Runs at startup, before every subscription listing and on the background
/// schedule. Passes may overlap; each step converges on its own.
#[derive(Clone)]
pub struct ReconcileService {
    status_service: StatusService,
    alert_service: AlertService,
}

impl ReconcileService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            status_service: StatusService::new(pool.clone()),
            alert_service: AlertService::new(pool),
        }
    }

    pub async fn run(&self, now: DateTime<Utc>) -> AppResult<ReconcileReport> {
        let transitions = self.status_service.evaluate(now).await?;
        let alerts_created = self.alert_service.generate_expiring_alerts(now).await?;

        let report = ReconcileReport {
            to_expiring: transitions.to_expiring,
            to_expired: transitions.to_expired,
            alerts_created,
        };
        if report.is_noop() {
            log::debug!("Reconciliation at {now}: nothing to do");
        } else {
            log::info!(
                "Reconciliation at {now}: {} expiring, {} expired, {} alerts created",
                report.to_expiring,
                report.to_expired,
                report.alerts_created
            );
        }
        Ok(report)
    }
}
