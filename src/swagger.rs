use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{AlertType, FrequencyBand, SubscriptionStatus, Technology};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::subscription::list_subscriptions,
        handlers::subscription::get_subscription,
        handlers::subscription::create_subscription,
        handlers::subscription::update_subscription,
        handlers::subscription::delete_subscription,
        handlers::alert::list_alerts,
        handlers::dashboard::get_stats,
    ),
    components(
        schemas(
            SubscriptionRequest,
            SubscriptionResponse,
            AlertResponse,
            DashboardStats,
            StatusBreakdown,
            TechnologyCount,
            Technology,
            FrequencyBand,
            SubscriptionStatus,
            AlertType,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "subscription", description = "Client subscription API"),
        (name = "alert", description = "Expiry alert API"),
        (name = "dashboard", description = "Dashboard aggregates API"),
    ),
    info(
        title = "Satlink Backend API",
        version = "0.1.0",
        description = "Satellite subscription lifecycle and alerting REST API"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
