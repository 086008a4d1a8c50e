// src/service/analytics_service.rs

use crate::analytics::{
    evaluate_trend, generate_insights, period_label, HealthSample, HealthStatistics,
};
use crate::api::dto::analytics_dto::{
    InsightsResponse, StatsResponse, TrendPoint, TrendReport, TrendsResponse,
    INSIGHT_SAMPLE_SIZE,
};
use crate::domain::health_metric::HealthMetric;
use crate::error::{AppError, AppResult};
use crate::repository::health_query_gateway::{DateWindow, HealthQueryGateway, SortDirection};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// 統計・インサイト・トレンドの算出
pub struct AnalyticsService {
    gateway: Arc<dyn HealthQueryGateway>,
}

impl AnalyticsService {
    pub fn new(gateway: Arc<dyn HealthQueryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_stats(&self, user_id: Uuid, days: i64) -> AppResult<StatsResponse> {
        let entries = self
            .gateway
            .find_entries(user_id, DateWindow::last_days(days), SortDirection::Descending)
            .await?;

        if entries.is_empty() {
            debug!(user_id = %user_id, days = days, "No entries for stats window");
            return Ok(StatsResponse::no_data());
        }

        let stats = HealthStatistics::from_entries(&entries, period_label(days));
        info!(
            user_id = %user_id,
            days = days,
            data_points = entries.len(),
            "Health statistics calculated"
        );

        Ok(StatsResponse::Available {
            stats,
            data_points: entries.len(),
        })
    }

    /// 直近のエントリからインサイトを生成
    pub async fn get_insights(&self, user_id: Uuid) -> AppResult<InsightsResponse> {
        let entries = self
            .gateway
            .find_recent_entries(user_id, INSIGHT_SAMPLE_SIZE)
            .await?;

        if entries.is_empty() {
            return Ok(InsightsResponse::no_data());
        }

        let profile = self
            .gateway
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let stats = HealthStatistics::from_entries(&entries, format!("last {} entries", entries.len()));
        let insights = generate_insights(&stats, &profile);

        info!(
            user_id = %user_id,
            insights_count = insights.len(),
            data_points = entries.len(),
            "Health insights generated"
        );

        Ok(InsightsResponse::generated(insights, entries.len()))
    }

    pub async fn get_trends(
        &self,
        user_id: Uuid,
        metric_name: &str,
        days: i64,
    ) -> AppResult<TrendsResponse> {
        // 未知のメトリクス名はデータ不足扱い
        let Some(metric) = HealthMetric::from_str(metric_name) else {
            debug!(metric = %metric_name, "Unknown trend metric");
            return Ok(TrendsResponse::insufficient());
        };

        let entries = self
            .gateway
            .find_entries(user_id, DateWindow::last_days(days), SortDirection::Ascending)
            .await?;

        let samples = HealthSample::from_entries(&entries, metric);
        let Some(result) = evaluate_trend(&samples, metric) else {
            return Ok(TrendsResponse::insufficient());
        };

        let data = entries
            .iter()
            .map(|entry| TrendPoint {
                date: entry.date,
                value: metric.value_of(entry),
            })
            .collect();

        info!(
            user_id = %user_id,
            metric = %metric,
            trend = %result.direction,
            "Trend evaluated"
        );

        Ok(TrendsResponse::Trend(TrendReport {
            metric,
            period: period_label(days),
            start_value: result.start_value,
            end_value: result.end_value,
            change: result.change,
            change_percent: result.change_percent,
            trend: result.direction,
            data,
        }))
    }
}
