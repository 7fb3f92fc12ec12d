use crate::entities::{AlertType, alert_entity as alerts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertResponse {
    pub id: String,
    pub subscription_id: String,
    pub client_name: String,
    #[schema(example = "Abonnement Business 100 (Ku-band) expire le 05/04/2025")]
    pub message: String,
    pub alert_type: AlertType,
    pub created_at: DateTime<Utc>,
}

impl From<alerts::Model> for AlertResponse {
    fn from(m: alerts::Model) -> Self {
        Self {
            id: m.id,
            subscription_id: m.subscription_id,
            client_name: m.client_name,
            message: m.message,
            alert_type: m.alert_type,
            created_at: m.created_at,
        }
    }
}
