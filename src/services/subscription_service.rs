use crate::entities::{SubscriptionStatus, subscription_entity as subs};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{compute_end_date, normalize_phone};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
    Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct SubscriptionService {
    pool: DatabaseConnection,
}

impl SubscriptionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Full scan, newest first. Callers reconcile beforehand.
    pub async fn list_subscriptions(&self) -> AppResult<Vec<SubscriptionResponse>> {
        let rows = subs::Entity::find()
            .order_by_desc(subs::Column::CreatedAt)
            .order_by_asc(subs::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(SubscriptionResponse::from).collect())
    }

    pub async fn get_subscription(&self, id: &str) -> AppResult<SubscriptionResponse> {
        let row = self.find(id).await?;
        Ok(SubscriptionResponse::from(row))
    }

    pub async fn create_subscription(
        &self,
        req: SubscriptionRequest,
        now: DateTime<Utc>,
    ) -> AppResult<SubscriptionResponse> {
        req.validate()?;
        let end_date = compute_end_date(req.start_date, req.duration_months)?;

        let created = subs::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            client_name: Set(req.client_name.trim().to_string()),
            phone: Set(normalize_phone(&req.phone)),
            technology: Set(req.technology),
            plan: Set(req.plan.trim().to_string()),
            bandwidth: Set(req.bandwidth.trim().to_string()),
            frequency: Set(req.frequency),
            amount: Set(req.amount),
            duration_months: Set(req.duration_months),
            start_date: Set(req.start_date),
            end_date: Set(end_date),
            status: Set(SubscriptionStatus::Active),
            created_at: Set(now),
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Subscription {} created for {} (ends {})",
            created.id,
            created.client_name,
            created.end_date
        );
        Ok(SubscriptionResponse::from(created))
    }

    /// Replaces the editable fields and recomputes `end_date`. `status` is left
    /// to the reconciliation pass.
    pub async fn update_subscription(
        &self,
        id: &str,
        req: SubscriptionRequest,
    ) -> AppResult<SubscriptionResponse> {
        req.validate()?;
        let end_date = compute_end_date(req.start_date, req.duration_months)?;
        let existing = self.find(id).await?;

        let mut am = existing.into_active_model();
        am.client_name = Set(req.client_name.trim().to_string());
        am.phone = Set(normalize_phone(&req.phone));
        am.technology = Set(req.technology);
        am.plan = Set(req.plan.trim().to_string());
        am.bandwidth = Set(req.bandwidth.trim().to_string());
        am.frequency = Set(req.frequency);
        am.amount = Set(req.amount);
        am.duration_months = Set(req.duration_months);
        am.start_date = Set(req.start_date);
        am.end_date = Set(end_date);
        let updated = am.update(&self.pool).await?;

        Ok(SubscriptionResponse::from(updated))
    }

    /// Alerts pointing at the subscription are kept.
    pub async fn delete_subscription(&self, id: &str) -> AppResult<()> {
        let existing = self.find(id).await?;
        existing.delete(&self.pool).await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> AppResult<subs::Model> {
        subs::Entity::find_by_id(id.to_string())
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Subscription not found".into()))
    }
}
