// src/api/handlers/analytics_handler.rs
use crate::api::dto::analytics_dto::{
    InsightsResponse, StatsQuery, StatsResponse, TrendQuery, TrendsResponse,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::{Json, Query, State},
    routing::get,
    Router,
};
use tracing::info;
use validator::Validate;

pub async fn stats_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<StatsResponse>> {
    query.validate()?;
    info!(user_id = %user.user_id(), days = query.days(), "Health statistics requested");

    let response = app_state
        .analytics_service
        .get_stats(user.user_id(), query.days())
        .await?;
    Ok(Json(response))
}

pub async fn insights_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<InsightsResponse>> {
    info!(user_id = %user.user_id(), "Health insights requested");

    let response = app_state
        .analytics_service
        .get_insights(user.user_id())
        .await?;
    Ok(Json(response))
}

/// メトリクスの推移（既定は体重・30日）
pub async fn trends_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<TrendQuery>,
) -> AppResult<Json<TrendsResponse>> {
    query.validate()?;
    info!(
        user_id = %user.user_id(),
        metric = %query.metric_name(),
        days = query.days(),
        "Trend analysis requested"
    );

    let response = app_state
        .analytics_service
        .get_trends(user.user_id(), query.metric_name(), query.days())
        .await?;
    Ok(Json(response))
}

pub fn analytics_router(app_state: AppState) -> Router {
    Router::new()
        .route("/analytics/stats", get(stats_handler))
        .route("/analytics/insights", get(insights_handler))
        .route("/analytics/trends", get(trends_handler))
        .with_state(app_state)
}
