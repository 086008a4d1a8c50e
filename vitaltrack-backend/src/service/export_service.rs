// src/service/export_service.rs

use crate::analytics::{generate_insights, period_label, HealthStatistics, MetricStatistics};
use crate::api::dto::export_dto::{
    CsvExportQuery, MetricSummary, SummaryRequest, SummaryResponse, SummaryUser,
};
use crate::domain::health_metric::HealthMetric;
use crate::error::{AppError, AppResult};
use crate::report::{HealthReport, ReportError, ReportRenderer};
use crate::repository::health_query_gateway::{DateWindow, HealthQueryGateway, SortDirection};
use crate::utils::validation::parse_date_param;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// サマリーに含めるメトリクス
const SUMMARY_METRICS: [HealthMetric; 6] = [
    HealthMetric::HeartRate,
    HealthMetric::Weight,
    HealthMetric::Sleep,
    HealthMetric::Steps,
    HealthMetric::Water,
    HealthMetric::Mood,
];

/// ダウンロード用ファイル
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub file_name: String,
}

pub struct ExportService {
    gateway: Arc<dyn HealthQueryGateway>,
    csv_renderer: Arc<dyn ReportRenderer>,
    pdf_renderer: Arc<dyn ReportRenderer>,
}

fn report_error(e: ReportError) -> AppError {
    error!(error = %e, "Report rendering failed");
    AppError::InternalServerError("Failed to generate report".to_string())
}

/// YYYY-MM-DD または RFC3339。終端の日付指定はその日を含む
fn parse_boundary(value: &str, end_of_range: bool) -> AppResult<DateTime<Utc>> {
    if let Some(date) = parse_date_param(value) {
        let start = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {}", value)))?
            .and_utc();
        return Ok(if end_of_range {
            start + Duration::days(1)
        } else {
            start
        });
    }

    let at = DateTime::parse_from_rfc3339(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", value)))?
        .with_timezone(&Utc);
    Ok(if end_of_range {
        at + Duration::microseconds(1)
    } else {
        at
    })
}

/// 両端が揃ったときのみ期間で絞り込む
fn csv_window(query: &CsvExportQuery) -> AppResult<DateWindow> {
    match (query.start_date.as_deref(), query.end_date.as_deref()) {
        (Some(start), Some(end)) => Ok(DateWindow::between(
            parse_boundary(start, false)?,
            parse_boundary(end, true)?,
        )),
        _ => Ok(DateWindow::unbounded()),
    }
}

fn metric_summary(stats: &MetricStatistics) -> MetricSummary {
    MetricSummary {
        average: stats.average,
        min: stats.min,
        max: stats.max,
        data_points: stats.count,
    }
}

impl ExportService {
    pub fn new(
        gateway: Arc<dyn HealthQueryGateway>,
        csv_renderer: Arc<dyn ReportRenderer>,
        pdf_renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            gateway,
            csv_renderer,
            pdf_renderer,
        }
    }

    pub async fn export_csv(&self, user_id: Uuid, query: CsvExportQuery) -> AppResult<ExportFile> {
        let window = csv_window(&query)?;
        let entries = self
            .gateway
            .find_entries(user_id, window, SortDirection::Descending)
            .await?;

        if entries.is_empty() {
            return Err(AppError::NotFound("No health entries found".to_string()));
        }

        let profile = self.gateway.find_profile(user_id).await?.unwrap_or_default();
        let report = HealthReport::new(profile, entries);
        let bytes = self.csv_renderer.render(&report).map_err(report_error)?;

        info!(
            user_id = %user_id,
            rows = report.entries.len(),
            bytes = bytes.len(),
            "CSV export generated"
        );

        Ok(ExportFile {
            bytes,
            content_type: self.csv_renderer.content_type(),
            file_name: self.csv_renderer.file_name(report.generated_at.date_naive()),
        })
    }

    pub async fn export_pdf(&self, user_id: Uuid, days: i64) -> AppResult<ExportFile> {
        let profile = self
            .gateway
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let entries = self
            .gateway
            .find_entries(user_id, DateWindow::last_days(days), SortDirection::Descending)
            .await?;

        let stats = HealthStatistics::from_entries(&entries, period_label(days));
        let report = HealthReport::new(profile, entries)
            .with_period(days)
            .with_stats(stats);
        let bytes = self.pdf_renderer.render(&report).map_err(report_error)?;

        info!(
            user_id = %user_id,
            days = days,
            bytes = bytes.len(),
            "PDF report generated"
        );

        Ok(ExportFile {
            bytes,
            content_type: self.pdf_renderer.content_type(),
            file_name: self.pdf_renderer.file_name(report.generated_at.date_naive()),
        })
    }

    pub async fn summary(&self, user_id: Uuid, request: SummaryRequest) -> AppResult<SummaryResponse> {
        let days = request.days();
        let profile = self
            .gateway
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let entries = self
            .gateway
            .find_entries(user_id, DateWindow::last_days(days), SortDirection::Descending)
            .await?;
        let stats = HealthStatistics::from_entries(&entries, period_label(days));

        let metrics: BTreeMap<String, MetricSummary> = SUMMARY_METRICS
            .iter()
            .filter_map(|metric| {
                stats
                    .get(*metric)
                    .map(|s| (metric.as_str().to_string(), metric_summary(s)))
            })
            .collect();

        let insights = request
            .include_insights()
            .then(|| generate_insights(&stats, &profile));

        Ok(SummaryResponse {
            user: SummaryUser::from(&profile),
            period: stats.period.clone(),
            report_date: Utc::now(),
            total_entries: stats.total_entries,
            metrics,
            insights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_only_end_is_inclusive() {
        let query = CsvExportQuery {
            start_date: Some("2025-01-01".to_string()),
            end_date: Some("2025-01-31".to_string()),
        };
        let window = csv_window(&query).unwrap();

        assert!(window.contains(Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap()));
    }

    #[test]
    fn test_single_bound_is_ignored() {
        let query = CsvExportQuery {
            start_date: Some("2025-01-01".to_string()),
            end_date: None,
        };
        assert_eq!(csv_window(&query).unwrap(), DateWindow::unbounded());
    }

    #[test]
    fn test_invalid_date_is_bad_request() {
        let query = CsvExportQuery {
            start_date: Some("yesterday".to_string()),
            end_date: Some("2025-01-31".to_string()),
        };
        assert!(matches!(csv_window(&query), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_rfc3339_bounds() {
        let query = CsvExportQuery {
            start_date: Some("2025-01-01T12:00:00Z".to_string()),
            end_date: Some("2025-01-02T12:00:00+00:00".to_string()),
        };
        let window = csv_window(&query).unwrap();
        assert!(window.contains(Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 1, 1, 11, 0, 0).unwrap()));
    }
}
