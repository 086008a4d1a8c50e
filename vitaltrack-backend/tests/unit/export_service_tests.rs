// tests/unit/export_service_tests.rs

use crate::common::mock_gateway::{entry_days_ago, test_profile, InMemoryHealthGateway};
use std::sync::Arc;
use uuid::Uuid;
use vitaltrack_backend::api::dto::export_dto::{CsvExportQuery, SummaryRequest};
use vitaltrack_backend::error::AppError;
use vitaltrack_backend::report::{CsvRenderer, PdfRenderer};
use vitaltrack_backend::service::export_service::ExportService;

fn service(gateway: InMemoryHealthGateway) -> ExportService {
    ExportService::new(
        Arc::new(gateway),
        Arc::new(CsvRenderer::new()),
        Arc::new(PdfRenderer::new()),
    )
}

fn populated_gateway(user_id: Uuid) -> InMemoryHealthGateway {
    let mut first = entry_days_ago(user_id, 2);
    first.heart_rate = Some(72.0);
    first.sleep = Some(6.0);
    first.weight = Some(70.0);
    let mut second = entry_days_ago(user_id, 1);
    second.heart_rate = Some(78.0);
    second.sleep = Some(6.5);
    second.steps = Some(0.0);

    InMemoryHealthGateway::new()
        .with_profile(user_id, test_profile())
        .with_entry(first)
        .with_entry(second)
}

#[tokio::test]
async fn test_csv_without_entries_is_not_found() {
    let user_id = Uuid::new_v4();
    let service = service(InMemoryHealthGateway::new().with_profile(user_id, test_profile()));

    let result = service.export_csv(user_id, CsvExportQuery::default()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_csv_export_file() {
    let user_id = Uuid::new_v4();
    let file = service(populated_gateway(user_id))
        .export_csv(user_id, CsvExportQuery::default())
        .await
        .unwrap();

    assert_eq!(file.content_type, "text/csv");
    assert!(file.file_name.starts_with("health-data-"));
    assert!(file.file_name.ends_with(".csv"));

    let body = String::from_utf8(file.bytes).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    // ヘッダー + 2行
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Heart Rate (bpm)"));
    assert!(body.contains("78"));
}

#[tokio::test]
async fn test_csv_export_with_invalid_dates() {
    let user_id = Uuid::new_v4();
    let query = CsvExportQuery {
        start_date: Some("not-a-date".to_string()),
        end_date: Some("2025-01-31".to_string()),
    };

    let result = service(populated_gateway(user_id)).export_csv(user_id, query).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_pdf_export_file() {
    let user_id = Uuid::new_v4();
    let file = service(populated_gateway(user_id))
        .export_pdf(user_id, 30)
        .await
        .unwrap();

    assert_eq!(file.content_type, "application/pdf");
    assert!(file.file_name.starts_with("VitalTrack-Report-"));
    assert!(file.bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_pdf_export_requires_profile() {
    let user_id = Uuid::new_v4();
    let gateway = InMemoryHealthGateway::new().with_entry(entry_days_ago(user_id, 1));

    let result = service(gateway).export_pdf(user_id, 30).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_summary_with_insights() {
    let user_id = Uuid::new_v4();
    let summary = service(populated_gateway(user_id))
        .summary(user_id, SummaryRequest::default())
        .await
        .unwrap();

    assert_eq!(summary.period, "30 days");
    assert_eq!(summary.total_entries, 2);
    assert_eq!(summary.user.name, "Ama Boateng");

    let heart_rate = summary.metrics.get("heartRate").unwrap();
    assert_eq!(heart_rate.average, 75.0);
    assert_eq!(heart_rate.data_points, 2);
    // 値が 0 しかないメトリクスは出さない
    assert!(!summary.metrics.contains_key("steps"));
    assert!(!summary.metrics.contains_key("water"));

    let insights = summary.insights.unwrap();
    assert!(insights.iter().any(|i| i.category == "Sleep"));
}

#[tokio::test]
async fn test_summary_without_insights() {
    let user_id = Uuid::new_v4();
    let request = SummaryRequest {
        days: Some(7),
        include_insights: Some(false),
    };

    let summary = service(populated_gateway(user_id))
        .summary(user_id, request)
        .await
        .unwrap();

    assert_eq!(summary.period, "7 days");
    assert!(summary.insights.is_none());
    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("insights").is_none());
    assert!(json.get("reportDate").is_some());
}
