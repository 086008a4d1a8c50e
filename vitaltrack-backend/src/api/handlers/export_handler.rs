// src/api/handlers/export_handler.rs
use crate::api::dto::export_dto::{
    CsvExportQuery, PdfExportQuery, SummaryRequest, SummaryResponse,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::service::export_service::ExportFile;
use axum::{
    extract::{Json, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tracing::info;
use validator::Validate;

/// 添付ファイルとして返す
fn attachment(file: ExportFile) -> Response {
    let mut response = file.bytes.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(file.content_type),
    );
    if let Ok(value) =
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file.file_name))
    {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    response
}

pub async fn export_csv_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<CsvExportQuery>,
) -> AppResult<Response> {
    info!(
        user_id = %user.user_id(),
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        "CSV export requested"
    );

    let file = app_state
        .export_service
        .export_csv(user.user_id(), query)
        .await?;
    Ok(attachment(file))
}

pub async fn export_pdf_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<PdfExportQuery>,
) -> AppResult<Response> {
    query.validate()?;
    info!(user_id = %user.user_id(), days = query.days(), "PDF export requested");

    let file = app_state
        .export_service
        .export_pdf(user.user_id(), query.days())
        .await?;
    Ok(attachment(file))
}

pub async fn summary_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<SummaryRequest>,
) -> AppResult<Json<SummaryResponse>> {
    payload.validate()?;

    let summary = app_state
        .export_service
        .summary(user.user_id(), payload)
        .await?;

    info!(
        user_id = %user.user_id(),
        total_entries = summary.total_entries,
        "Health summary generated"
    );
    Ok(Json(summary))
}

pub fn export_router(app_state: AppState) -> Router {
    Router::new()
        .route("/export/csv", get(export_csv_handler))
        .route("/export/pdf", get(export_pdf_handler))
        .route("/export/summary", post(summary_handler))
        .with_state(app_state)
}
