// src/api/handlers/notification_handler.rs
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::service::notification_service::NotificationResult;
use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use tracing::info;

pub async fn weekly_report_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<NotificationResult>> {
    info!(user_id = %user.user_id(), "Weekly report requested");

    let result = app_state
        .notification_service
        .send_weekly_report(user.user_id())
        .await?;
    Ok(Json(result))
}

pub async fn health_alerts_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<NotificationResult>> {
    info!(user_id = %user.user_id(), "Health alert check requested");

    let result = app_state
        .notification_service
        .send_health_alerts(user.user_id())
        .await?;
    Ok(Json(result))
}

pub fn notification_router(app_state: AppState) -> Router {
    Router::new()
        .route("/notifications/weekly-report", post(weekly_report_handler))
        .route("/notifications/health-alerts", post(health_alerts_handler))
        .with_state(app_state)
}
