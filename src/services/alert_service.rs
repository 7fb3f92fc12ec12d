use crate::entities::{AlertType, SubscriptionStatus, alert_entity as alerts, subscription_entity as subs};
use crate::error::AppResult;
use crate::models::AlertResponse;
use crate::utils::expiring_alert_message;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use uuid::Uuid;

/// Alerts returned by the listing endpoint.
pub const ALERT_LIST_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct AlertService {
    pool: DatabaseConnection,
}

impl AlertService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Ensures every `expiring` subscription has exactly one `expiring` alert.
    /// Returns how many alerts were created.
    pub async fn generate_expiring_alerts(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let expiring = subs::Entity::find()
            .filter(subs::Column::Status.eq(SubscriptionStatus::Expiring))
            .all(&self.pool)
            .await?;

        let mut created = 0u64;
        for sub in expiring {
            if self.has_alert(&sub.id, AlertType::Expiring).await? {
                continue;
            }
            let alert = alerts::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                subscription_id: Set(sub.id.clone()),
                client_name: Set(sub.client_name.clone()),
                message: Set(expiring_alert_message(&sub.plan, sub.frequency, sub.end_date)),
                alert_type: Set(AlertType::Expiring),
                created_at: Set(now),
            };
            if self.insert_alert(alert).await? {
                created += 1;
            } else {
                log::debug!("Expiring alert for {} already raised concurrently", sub.id);
            }
        }
        Ok(created)
    }

    pub async fn has_alert(&self, subscription_id: &str, alert_type: AlertType) -> AppResult<bool> {
        let existing = alerts::Entity::find()
            .filter(alerts::Column::SubscriptionId.eq(subscription_id))
            .filter(alerts::Column::AlertType.eq(alert_type))
            .one(&self.pool)
            .await?;
        Ok(existing.is_some())
    }

    /// Inserts unless (subscription_id, alert_type) already exists; the unique
    /// index turns a lost race into `Ok(false)`.
    pub async fn insert_alert(&self, alert: alerts::ActiveModel) -> AppResult<bool> {
        let result = alerts::Entity::insert(alert)
            .on_conflict(
                OnConflict::columns([alerts::Column::SubscriptionId, alerts::Column::AlertType])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.pool)
            .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Newest first.
    pub async fn list_alerts(&self) -> AppResult<Vec<AlertResponse>> {
        let rows = alerts::Entity::find()
            .order_by_desc(alerts::Column::CreatedAt)
            .limit(ALERT_LIST_LIMIT)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(AlertResponse::from).collect())
    }
}
