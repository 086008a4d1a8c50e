// tests/unit/analytics_service_tests.rs

use crate::common::mock_gateway::{entry_days_ago, test_profile, InMemoryHealthGateway};
use std::sync::Arc;
use uuid::Uuid;
use vitaltrack_backend::analytics::{InsightType, Severity, TrendDirection};
use vitaltrack_backend::api::dto::analytics_dto::{StatsResponse, TrendsResponse};
use vitaltrack_backend::domain::health_metric::HealthMetric;
use vitaltrack_backend::error::AppError;
use vitaltrack_backend::service::analytics_service::AnalyticsService;

fn service(gateway: InMemoryHealthGateway) -> AnalyticsService {
    AnalyticsService::new(Arc::new(gateway))
}

fn heart_rate_entry(user_id: Uuid, days_ago: i64, value: f64) -> vitaltrack_backend::domain::health_entry_model::Model {
    let mut entry = entry_days_ago(user_id, days_ago);
    entry.heart_rate = Some(value);
    entry
}

#[tokio::test]
async fn test_stats_empty_window_returns_no_data() {
    let user_id = Uuid::new_v4();
    let service = service(InMemoryHealthGateway::new().with_entry(heart_rate_entry(user_id, 45, 70.0)));

    let response = service.get_stats(user_id, 30).await.unwrap();

    assert!(matches!(response, StatsResponse::NoData { stats: None, .. }));
}

#[tokio::test]
async fn test_stats_uses_window_and_owner() {
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();
    let gateway = InMemoryHealthGateway::new()
        .with_entry(heart_rate_entry(user_id, 1, 70.0))
        .with_entry(heart_rate_entry(user_id, 2, 80.0))
        .with_entry(heart_rate_entry(user_id, 3, 90.0))
        // 期間外
        .with_entry(heart_rate_entry(user_id, 40, 150.0))
        // 他ユーザー
        .with_entry(heart_rate_entry(other_user, 1, 190.0));

    let response = service(gateway).get_stats(user_id, 30).await.unwrap();

    match response {
        StatsResponse::Available { stats, data_points } => {
            assert_eq!(data_points, 3);
            assert_eq!(stats.total_entries, 3);
            assert_eq!(stats.period, "30 days");
            let heart_rate = stats.heart_rate.unwrap();
            assert_eq!(heart_rate.average, 80.0);
            assert_eq!(heart_rate.min, 70.0);
            assert_eq!(heart_rate.max, 90.0);
            assert!(stats.weight.is_none());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_insights_without_entries() {
    let user_id = Uuid::new_v4();
    let service = service(InMemoryHealthGateway::new().with_profile(user_id, test_profile()));

    let response = service.get_insights(user_id).await.unwrap();

    assert!(response.insights.is_empty());
    assert!(response.analysis_date.is_none());
    assert_eq!(response.message, "No data available for insights");
}

#[tokio::test]
async fn test_insights_flag_high_heart_rate() {
    let user_id = Uuid::new_v4();
    let gateway = InMemoryHealthGateway::new()
        .with_profile(user_id, test_profile())
        .with_entry(heart_rate_entry(user_id, 1, 104.0))
        .with_entry(heart_rate_entry(user_id, 2, 106.0));

    let response = service(gateway).get_insights(user_id).await.unwrap();

    assert_eq!(response.data_points, Some(2));
    let heart_rate: Vec<_> = response
        .insights
        .iter()
        .filter(|i| i.category == "Heart Rate")
        .collect();
    assert_eq!(heart_rate.len(), 1);
    assert_eq!(heart_rate[0].insight_type, InsightType::Warning);
    assert_eq!(heart_rate[0].severity, Severity::Medium);

    // プロフィールの身長・体重から BMI も出る
    let bmi = response
        .insights
        .iter()
        .find(|i| i.category == "Weight")
        .unwrap();
    assert_eq!(bmi.message, "Your BMI is 22.9 (Normal weight)");
}

#[tokio::test]
async fn test_insights_use_most_recent_thirty_entries() {
    let user_id = Uuid::new_v4();
    let mut gateway = InMemoryHealthGateway::new().with_profile(user_id, test_profile());
    for days_ago in 0..40 {
        gateway = gateway.with_entry(heart_rate_entry(user_id, days_ago, 75.0));
    }

    let response = service(gateway).get_insights(user_id).await.unwrap();

    assert_eq!(response.data_points, Some(30));
}

#[tokio::test]
async fn test_insights_missing_user() {
    let user_id = Uuid::new_v4();
    let gateway = InMemoryHealthGateway::new().with_entry(heart_rate_entry(user_id, 1, 75.0));

    let result = service(gateway).get_insights(user_id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_trend_for_weight() {
    let user_id = Uuid::new_v4();
    let mut gateway = InMemoryHealthGateway::new();
    for (days_ago, weight) in [(10, Some(70.0)), (5, None), (1, Some(72.0))] {
        let mut entry = entry_days_ago(user_id, days_ago);
        entry.weight = weight;
        gateway = gateway.with_entry(entry);
    }

    let response = service(gateway)
        .get_trends(user_id, "weight", 30)
        .await
        .unwrap();

    match response {
        TrendsResponse::Trend(report) => {
            assert_eq!(report.metric, HealthMetric::Weight);
            assert_eq!(report.period, "30 days");
            assert_eq!(report.start_value, 70.0);
            assert_eq!(report.end_value, 72.0);
            assert_eq!(report.change, 2.0);
            assert_eq!(report.change_percent, 2.86);
            assert_eq!(report.trend, TrendDirection::Increasing);
            // 期間内の全エントリ（昇順、未記録は None）
            assert_eq!(report.data.len(), 3);
            assert_eq!(report.data[1].value, None);
            assert!(report.data[0].date < report.data[2].date);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_trend_unknown_metric_is_insufficient() {
    let user_id = Uuid::new_v4();
    let mut first = entry_days_ago(user_id, 3);
    first.weight = Some(70.0);
    let mut last = entry_days_ago(user_id, 1);
    last.weight = Some(71.0);
    let gateway = InMemoryHealthGateway::new().with_entry(first).with_entry(last);

    let response = service(gateway)
        .get_trends(user_id, "cholesterol", 30)
        .await
        .unwrap();

    assert!(matches!(response, TrendsResponse::Insufficient { trend: None, .. }));
}

#[tokio::test]
async fn test_trend_with_zero_start_is_insufficient() {
    let user_id = Uuid::new_v4();
    let mut first = entry_days_ago(user_id, 3);
    first.steps = Some(0.0);
    let mut last = entry_days_ago(user_id, 1);
    last.steps = Some(8000.0);
    let gateway = InMemoryHealthGateway::new().with_entry(first).with_entry(last);

    let response = service(gateway)
        .get_trends(user_id, "steps", 30)
        .await
        .unwrap();

    assert!(matches!(response, TrendsResponse::Insufficient { .. }));
}

#[tokio::test]
async fn test_trend_single_sample_is_insufficient() {
    let user_id = Uuid::new_v4();
    let mut only = entry_days_ago(user_id, 2);
    only.weight = Some(70.0);

    let response = service(InMemoryHealthGateway::new().with_entry(only))
        .get_trends(user_id, "weight", 30)
        .await
        .unwrap();

    assert!(matches!(response, TrendsResponse::Insufficient { .. }));
}

#[tokio::test]
async fn test_gateway_failure_surfaces_as_db_error() {
    let service = service(InMemoryHealthGateway::failing());

    let result = service.get_stats(Uuid::new_v4(), 30).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
