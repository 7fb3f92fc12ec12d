use crate::entities::{FrequencyBand, SubscriptionStatus, Technology, subscription_entity as subs};
use crate::error::{AppError, AppResult};
use crate::utils::{MAX_DURATION_MONTHS, validate_phone};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of create and update requests. `end_date` and `status` are never
/// client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionRequest {
    #[schema(example = "Hotel Les Palmiers")]
    pub client_name: String,
    #[schema(example = "+225 07 12 34 56 78")]
    pub phone: String,
    pub technology: Technology,
    #[schema(example = "Business 100")]
    pub plan: String,
    #[schema(example = "100 Mbps")]
    pub bandwidth: String,
    pub frequency: FrequencyBand,
    #[schema(example = 450000)]
    pub amount: i64,
    #[schema(example = 12)]
    pub duration_months: i32,
    /// RFC 3339, or a naive ISO timestamp taken as UTC
    #[serde(deserialize_with = "deserialize_utc")]
    pub start_date: DateTime<Utc>,
}

impl SubscriptionRequest {
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("client_name", &self.client_name),
            ("plan", &self.plan),
            ("bandwidth", &self.bandwidth),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!("{field} must not be empty")));
            }
        }
        validate_phone(&self.phone)?;
        if self.duration_months < 1 {
            return Err(AppError::ValidationError(
                "duration_months must be at least 1".to_string(),
            ));
        }
        if self.duration_months > MAX_DURATION_MONTHS {
            return Err(AppError::ValidationError(format!(
                "duration_months must not exceed {MAX_DURATION_MONTHS}"
            )));
        }
        if self.amount < 0 {
            return Err(AppError::ValidationError(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc(&raw).map_err(serde::de::Error::custom)
}

pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid start_date {raw:?}: {e}"))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionResponse {
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
    pub end_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<subs::Model> for SubscriptionResponse {
    fn from(m: subs::Model) -> Self {
        Self {
            id: m.id,
            client_name: m.client_name,
            phone: m.phone,
            technology: m.technology,
            plan: m.plan,
            bandwidth: m.bandwidth,
            frequency: m.frequency,
            amount: m.amount,
            duration_months: m.duration_months,
            start_date: m.start_date,
            end_date: m.end_date,
            status: m.status,
            created_at: m.created_at,
        }
    }
}
