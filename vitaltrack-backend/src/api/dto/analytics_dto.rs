// src/api/dto/analytics_dto.rs

use crate::analytics::{HealthStatistics, Insight, TrendDirection};
use crate::domain::health_metric::HealthMetric;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_DAYS: i64 = 30;
pub const MAX_DAYS: i64 = 3650;
pub const DEFAULT_TREND_METRIC: &str = "weight";
/// インサイトは直近30件から算出
pub const INSIGHT_SAMPLE_SIZE: u64 = 30;

// --- クエリDTO ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StatsQuery {
    #[validate(range(min = 1, max = 3650, message = "days must be between 1 and 3650"))]
    pub days: Option<i64>,
}

impl StatsQuery {
    pub fn days(&self) -> i64 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TrendQuery {
    #[validate(range(min = 1, max = 3650, message = "days must be between 1 and 3650"))]
    pub days: Option<i64>,
    pub metric: Option<String>,
}

impl TrendQuery {
    pub fn days(&self) -> i64 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }

    pub fn metric_name(&self) -> &str {
        self.metric.as_deref().unwrap_or(DEFAULT_TREND_METRIC)
    }
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatsResponse {
    Available {
        stats: HealthStatistics,
        #[serde(rename = "dataPoints")]
        data_points: usize,
    },
    NoData {
        message: String,
        stats: Option<HealthStatistics>,
    },
}

impl StatsResponse {
    pub fn no_data() -> Self {
        Self::NoData {
            message: "No data available for the selected period".to_string(),
            stats: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub message: String,
    pub insights: Vec<Insight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_points: Option<usize>,
}

impl InsightsResponse {
    pub fn generated(insights: Vec<Insight>, data_points: usize) -> Self {
        Self {
            message: "Health insights generated".to_string(),
            insights,
            analysis_date: Some(Utc::now()),
            data_points: Some(data_points),
        }
    }

    pub fn no_data() -> Self {
        Self {
            message: "No data available for insights".to_string(),
            insights: Vec::new(),
            analysis_date: None,
            data_points: None,
        }
    }
}

/// トレンド期間内の1点（値が未記録なら null）
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub metric: HealthMetric,
    pub period: String,
    pub start_value: f64,
    pub end_value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub trend: TrendDirection,
    pub data: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TrendsResponse {
    Trend(TrendReport),
    Insufficient {
        message: String,
        trend: Option<TrendDirection>,
    },
}

impl TrendsResponse {
    pub fn insufficient() -> Self {
        Self::Insufficient {
            message: "Insufficient data for trend analysis".to_string(),
            trend: None,
        }
    }
}
