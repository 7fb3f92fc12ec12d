use crate::models::*;
use crate::services::AlertService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/alerts",
    tag = "alert",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Latest alerts, newest first", body = [AlertResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_alerts(alert_service: web::Data<AlertService>) -> Result<HttpResponse> {
    match alert_service.list_alerts().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn alert_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/alerts", web::get().to(list_alerts));
}
