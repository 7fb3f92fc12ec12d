use crate::middlewares::AuthenticatedUser;
use crate::models::*;
use crate::services::{ReconcileService, SubscriptionService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use chrono::Utc;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/subscriptions",
    tag = "subscription",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Subscriptions with up-to-date status", body = [SubscriptionResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Reconciliation or storage failure")
    )
)]
pub async fn list_subscriptions(
    reconcile_service: web::Data<ReconcileService>,
    subscription_service: web::Data<SubscriptionService>,
) -> Result<HttpResponse> {
    // readers never see a status older than the request
    if let Err(e) = reconcile_service.run(Utc::now()).await {
        return Ok(e.error_response());
    }

    match subscription_service.list_subscriptions().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/subscriptions/{id}",
    tag = "subscription",
    params(("id" = String, Path, description = "Subscription id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Subscription", body = SubscriptionResponse),
        (status = 404, description = "Subscription not found")
    )
)]
pub async fn get_subscription(
    subscription_service: web::Data<SubscriptionService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match subscription_service.get_subscription(&path).await {
        Ok(sub) => Ok(HttpResponse::Ok().json(ApiResponse::success(sub))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/subscriptions",
    tag = "subscription",
    request_body = SubscriptionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Subscription created", body = SubscriptionResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_subscription(
    subscription_service: web::Data<SubscriptionService>,
    request: web::Json<SubscriptionRequest>,
) -> Result<HttpResponse> {
    match subscription_service
        .create_subscription(request.into_inner(), Utc::now())
        .await
    {
        Ok(sub) => Ok(HttpResponse::Ok().json(ApiResponse::success(sub))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/subscriptions/{id}",
    tag = "subscription",
    params(("id" = String, Path, description = "Subscription id")),
    request_body = SubscriptionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Subscription updated", body = SubscriptionResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Subscription not found")
    )
)]
pub async fn update_subscription(
    subscription_service: web::Data<SubscriptionService>,
    path: web::Path<String>,
    request: web::Json<SubscriptionRequest>,
) -> Result<HttpResponse> {
    match subscription_service
        .update_subscription(&path, request.into_inner())
        .await
    {
        Ok(sub) => Ok(HttpResponse::Ok().json(ApiResponse::success(sub))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/subscriptions/{id}",
    tag = "subscription",
    params(("id" = String, Path, description = "Subscription id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Subscription deleted"),
        (status = 404, description = "Subscription not found")
    )
)]
pub async fn delete_subscription(
    subscription_service: web::Data<SubscriptionService>,
    path: web::Path<String>,
    user: Option<web::ReqData<AuthenticatedUser>>,
) -> Result<HttpResponse> {
    match subscription_service.delete_subscription(&path).await {
        Ok(()) => {
            if let Some(user) = user {
                log::info!("Subscription {} deleted by {}", path.as_str(), user.0);
            }
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Subscription deleted successfully"
            })))
        }
        Err(e) => Ok(e.error_response()),
    }
}

pub fn subscription_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subscriptions")
            .route("", web::get().to(list_subscriptions))
            .route("", web::post().to(create_subscription))
            .route("/{id}", web::get().to(get_subscription))
            .route("/{id}", web::put().to(update_subscription))
            .route("/{id}", web::delete().to(delete_subscription)),
    );
}
