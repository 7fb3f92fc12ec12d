mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{Duration, SecondsFormat, Utc};
use common::{JWT_SECRET, access_token, setup_db};
use satlink_backend::handlers;
use satlink_backend::middlewares::AuthMiddleware;
use satlink_backend::services::{
    AlertService, DashboardService, ReconcileService, SubscriptionService,
};
use satlink_backend::swagger::swagger_config;
use satlink_backend::utils::JwtService;
use serde_json::{Value, json};

macro_rules! app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(JwtService::new(JWT_SECRET)))
                .app_data(web::Data::new(SubscriptionService::new($pool.clone())))
                .app_data(web::Data::new(AlertService::new($pool.clone())))
                .app_data(web::Data::new(DashboardService::new($pool.clone())))
                .app_data(web::Data::new(ReconcileService::new($pool.clone())))
                .configure(swagger_config)
                .service(
                    web::scope("/api")
                        .configure(handlers::subscription_config)
                        .configure(handlers::alert_config)
                        .configure(handlers::dashboard_config),
                ),
        )
        .await
    };
}

fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", access_token()))
}

fn body(start_offset_days: i64, duration_months: i32) -> Value {
    let start = Utc::now() + Duration::days(start_offset_days);
    json!({
        "client_name": "Ecole Les Colibris",
        "phone": "+225 05 44 33 22 11",
        "technology": "VSAT",
        "plan": "Edu 20",
        "bandwidth": "20 Mbps",
        "frequency": "Ka-band",
        "amount": 120000,
        "duration_months": duration_months,
        "start_date": start.to_rfc3339_opts(SecondsFormat::Secs, true)
    })
}

#[actix_web::test]
async fn test_requests_without_token_are_rejected() {
    let pool = setup_db().await;
    let app = app!(pool);

    let req = test::TestRequest::get().uri("/api/subscriptions").to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/alerts")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_openapi_document_is_public() {
    let pool = setup_db().await;
    let app = app!(pool);

    let req = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_subscription_crud_and_reconciled_listing() {
    let pool = setup_db().await;
    let app = app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/subscriptions")
        .insert_header(bearer())
        .set_json(body(0, 1))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["status"], "active");
    assert_eq!(created["data"]["technology"], "VSAT");
    assert_eq!(created["data"]["phone"], "+2250544332211");
    let id = created["data"]["id"].as_str().unwrap().to_string();

    // listing reconciles first, so the 30-day subscription shows as expiring
    let req = test::TestRequest::get()
        .uri("/api/subscriptions")
        .insert_header(bearer())
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let rows = listed["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "expiring");

    let req = test::TestRequest::get()
        .uri("/api/alerts")
        .insert_header(bearer())
        .to_request();
    let alerts: Value = test::call_and_read_body_json(&app, req).await;
    let alerts = alerts["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["subscription_id"], id.as_str());
    assert_eq!(alerts[0]["alert_type"], "expiring");
    assert!(
        alerts[0]["message"]
            .as_str()
            .unwrap()
            .starts_with("Abonnement Edu 20 (Ka-band) expire le ")
    );

    let req = test::TestRequest::put()
        .uri(&format!("/api/subscriptions/{id}"))
        .insert_header(bearer())
        .set_json(body(0, 12))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["duration_months"], 12);
    assert_eq!(updated["data"]["status"], "expiring");

    let req = test::TestRequest::get()
        .uri(&format!("/api/subscriptions/{id}"))
        .insert_header(bearer())
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["data"]["end_date"], updated["data"]["end_date"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/subscriptions/{id}"))
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/subscriptions/{id}"))
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let missing: Value = test::read_body_json(resp).await;
    assert_eq!(missing["success"], false);
    assert_eq!(missing["error"]["code"], "NOT_FOUND");

    // the alert outlives the subscription
    let req = test::TestRequest::get()
        .uri("/api/alerts")
        .insert_header(bearer())
        .to_request();
    let alerts: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(alerts["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_invalid_requests_are_rejected() {
    let pool = setup_db().await;
    let app = app!(pool);

    let mut zero_months = body(0, 1);
    zero_months["duration_months"] = json!(0);
    let req = test::TestRequest::post()
        .uri("/api/subscriptions")
        .insert_header(bearer())
        .set_json(zero_months)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"]["code"], "VALIDATION_ERROR");

    // far past any representable end date
    for req in [
        test::TestRequest::post().uri("/api/subscriptions"),
        test::TestRequest::put().uri("/api/subscriptions/does-not-exist"),
    ] {
        let req = req
            .insert_header(bearer())
            .set_json(body(0, 100_000_000))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let err: Value = test::read_body_json(resp).await;
        assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
    }

    let mut bad_band = body(0, 1);
    bad_band["frequency"] = json!("L-band");
    let req = test::TestRequest::post()
        .uri("/api/subscriptions")
        .insert_header(bearer())
        .set_json(bad_band)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/subscriptions/does-not-exist")
        .insert_header(bearer())
        .set_json(body(0, 1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/subscriptions/does-not-exist")
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_dashboard_stats() {
    let pool = setup_db().await;
    let app = app!(pool);

    // one expiring, one expired, two active
    for (offset, months) in [(0, 1), (-400, 12), (0, 12), (-10, 24)] {
        let req = test::TestRequest::post()
            .uri("/api/subscriptions")
            .insert_header(bearer())
            .set_json(body(offset, months))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/subscriptions")
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .insert_header(bearer())
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    let stats = &stats["data"];
    assert_eq!(stats["total_subscribers"], 4);
    assert_eq!(stats["active_subscriptions"], 2);
    assert_eq!(stats["monthly_revenue"], 240000);
    assert_eq!(stats["urgent_alerts"], 1);
    assert_eq!(stats["status_breakdown"]["active"], 2);
    assert_eq!(stats["status_breakdown"]["expiring"], 1);
    assert_eq!(stats["status_breakdown"]["expired"], 1);
    assert_eq!(
        stats["technology_breakdown"],
        json!([
            { "technology": "Starlink", "count": 0 },
            { "technology": "VSAT", "count": 4 }
        ])
    );
}
