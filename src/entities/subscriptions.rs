use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Technology {
    #[sea_orm(string_value = "Starlink")]
    Starlink,
    #[sea_orm(string_value = "VSAT")]
    #[serde(rename = "VSAT")]
    Vsat,
}

impl std::fmt::Display for Technology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Technology::Starlink => write!(f, "Starlink"),
            Technology::Vsat => write!(f, "VSAT"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FrequencyBand {
    #[sea_orm(string_value = "C-band")]
    #[serde(rename = "C-band")]
    CBand,
    #[sea_orm(string_value = "Ku-band")]
    #[serde(rename = "Ku-band")]
    KuBand,
    #[sea_orm(string_value = "Ka-band")]
    #[serde(rename = "Ka-band")]
    KaBand,
}

impl std::fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyBand::CBand => write!(f, "C-band"),
            FrequencyBand::KuBand => write!(f, "Ku-band"),
            FrequencyBand::KaBand => write!(f, "Ka-band"),
        }
    }
}

/// Lifecycle of a subscription. Only ever advances `Active -> Expiring -> Expired`
/// under reconciliation.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expiring")]
    Expiring,
    #[sea_orm(string_value = "expired")]
    Expired,
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Expiring => write!(f, "expiring"),
            SubscriptionStatus::Expired => write!(f, "expired"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub client_name: String,
    pub phone: String,
    pub technology: Technology,
    pub plan: String,
    pub bandwidth: String,
    pub frequency: FrequencyBand,
    pub amount: i64,
    pub duration_months: i32,
    pub start_date: DateTime<Utc>,
    /// start_date + duration_months * 30 days, recomputed on every write
    pub end_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
