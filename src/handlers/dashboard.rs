use crate::models::*;
use crate::services::DashboardService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardStats),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_stats(dashboard_service: web::Data<DashboardService>) -> Result<HttpResponse> {
    match dashboard_service.get_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn dashboard_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/dashboard").route("/stats", web::get().to(get_stats)));
}
