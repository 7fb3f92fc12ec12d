use crate::entities::{SubscriptionStatus, subscription_entity as subs};
use crate::error::AppResult;
use crate::utils::expiry_threshold;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};

/// Rows moved by one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTransitions {
    pub to_expiring: u64,
    pub to_expired: u64,
}

/// Bulk recomputation of subscription status against an explicit `now`.
#[derive(Clone)]
pub struct StatusService {
    pool: DatabaseConnection,
}

impl StatusService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Applies both transition rules as conditional updates.
    ///
    /// The predicates split on `end_date` relative to `now`, so no row matches
    /// both. Rows already moved no longer match their rule, which makes a
    /// second call at the same instant a no-op.
    pub async fn evaluate(&self, now: DateTime<Utc>) -> AppResult<StatusTransitions> {
        let threshold = expiry_threshold(now);
        let txn = self.pool.begin().await?;

        let to_expiring = subs::Entity::update_many()
            .col_expr(
                subs::Column::Status,
                Expr::value(SubscriptionStatus::Expiring.to_value()),
            )
            .filter(subs::Column::Status.eq(SubscriptionStatus::Active))
            .filter(subs::Column::EndDate.lte(threshold))
            .filter(subs::Column::EndDate.gt(now))
            .exec(&txn)
            .await?
            .rows_affected;

        let to_expired = subs::Entity::update_many()
            .col_expr(
                subs::Column::Status,
                Expr::value(SubscriptionStatus::Expired.to_value()),
            )
            .filter(
                subs::Column::Status
                    .is_in([SubscriptionStatus::Active, SubscriptionStatus::Expiring]),
            )
            .filter(subs::Column::EndDate.lte(now))
            .exec(&txn)
            .await?
            .rows_affected;

        txn.commit().await?;

        Ok(StatusTransitions {
            to_expiring,
            to_expired,
        })
    }
}
