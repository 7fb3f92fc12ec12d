use crate::entities::Technology;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusBreakdown {
    pub active: u64,
    pub expiring: u64,
    pub expired: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechnologyCount {
    pub technology: Technology,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_subscribers: u64,
    /// Sum of `amount` over active subscriptions
    pub monthly_revenue: i64,
    pub active_subscriptions: u64,
    /// Every stored alert counts, orphans included
    pub urgent_alerts: u64,
    pub technology_breakdown: Vec<TechnologyCount>,
    pub status_breakdown: StatusBreakdown,
}
