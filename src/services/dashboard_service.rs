use crate::entities::{SubscriptionStatus, Technology, alert_entity as alerts, subscription_entity as subs};
use crate::error::AppResult;
use crate::models::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Iterable, PaginatorTrait, QueryFilter,
    QuerySelect,
};

#[derive(Clone)]
pub struct DashboardService {
    pool: DatabaseConnection,
}

impl DashboardService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Aggregates over the stored state; does not reconcile first.
    pub async fn get_stats(&self) -> AppResult<DashboardStats> {
        let total_subscribers = subs::Entity::find().count(&self.pool).await?;

        let status_breakdown = StatusBreakdown {
            active: self.count_status(SubscriptionStatus::Active).await?,
            expiring: self.count_status(SubscriptionStatus::Expiring).await?,
            expired: self.count_status(SubscriptionStatus::Expired).await?,
        };

        // SUM(bigint) is NUMERIC on postgres
        let monthly_revenue = subs::Entity::find()
            .select_only()
            .column_as(Expr::cust("CAST(COALESCE(SUM(amount), 0) AS BIGINT)"), "total")
            .filter(subs::Column::Status.eq(SubscriptionStatus::Active))
            .into_tuple::<i64>()
            .one(&self.pool)
            .await?
            .unwrap_or(0);

        let mut technology_breakdown = Vec::new();
        for technology in Technology::iter() {
            let count = subs::Entity::find()
                .filter(subs::Column::Technology.eq(technology))
                .count(&self.pool)
                .await?;
            technology_breakdown.push(TechnologyCount { technology, count });
        }

        let urgent_alerts = alerts::Entity::find().count(&self.pool).await?;

        Ok(DashboardStats {
            total_subscribers,
            monthly_revenue,
            active_subscriptions: status_breakdown.active,
            urgent_alerts,
            technology_breakdown,
            status_breakdown,
        })
    }

    async fn count_status(&self, status: SubscriptionStatus) -> AppResult<u64> {
        Ok(subs::Entity::find()
            .filter(subs::Column::Status.eq(status))
            .count(&self.pool)
            .await?)
    }
}
