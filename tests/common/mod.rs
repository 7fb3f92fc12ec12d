#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use satlink_backend::config::DatabaseConfig;
use satlink_backend::database::{DbPool, create_pool, run_migrations};
use satlink_backend::entities::{FrequencyBand, Technology};
use satlink_backend::models::SubscriptionRequest;
use satlink_backend::utils::Claims;

pub const JWT_SECRET: &str = "test-secret";

/// Fresh in-memory database with the production schema. A single connection
/// keeps every query on the same memory database.
pub async fn setup_db() -> DbPool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let pool = create_pool(&config).await.expect("connect sqlite");
    run_migrations(&pool).await.expect("migrate");
    pool
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

pub fn request(start_date: DateTime<Utc>, duration_months: i32) -> SubscriptionRequest {
    SubscriptionRequest {
        client_name: "Hotel Les Palmiers".to_string(),
        phone: "+225 07 12 34 56 78".to_string(),
        technology: Technology::Starlink,
        plan: "Business 100".to_string(),
        bandwidth: "100 Mbps".to_string(),
        frequency: FrequencyBand::KuBand,
        amount: 450_000,
        duration_months,
        start_date,
    }
}

pub fn access_token() -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: "admin".to_string(),
        exp: (now + Duration::minutes(30)).timestamp(),
        iat: now.timestamp(),
        token_type: "access".to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("encode token")
}
