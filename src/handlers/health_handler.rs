use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::HealthResponse};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let configured = state.config.api_key.is_some();

    HttpResponse::Ok().json(HealthResponse {
        status: if configured { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.config.provider.to_string(),
        last_success: state.course_service.status().last_success().await,
    })
}
