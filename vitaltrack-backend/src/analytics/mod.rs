// src/analytics/mod.rs

//! 健康データの集計・トレンド・インサイト
//!
//! すべて同期の純粋関数。I/O はリポジトリ層（HealthQueryGateway）が担当する。

pub mod aggregator;
pub mod bmi;
pub mod insights;
pub mod trend;

pub use aggregator::{
    aggregate, aggregate_blood_pressure, aggregate_metric, present_values, round2,
    BloodPressureStatistics, MetricStatistics,
};
pub use bmi::{calculate_bmi, BmiCategory};
pub use insights::{generate_insights, Insight, InsightType, Severity};
pub use trend::{evaluate_trend, HealthSample, TrendDirection, TrendResult};

use crate::domain::health_entry_model;
use crate::domain::health_metric::HealthMetric;
use crate::domain::user_model;
use serde::{Deserialize, Serialize};

/// 分析・レポートで使うユーザープロフィール
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
}

impl UserProfile {
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight, self.height) {
            (Some(weight), Some(height)) => calculate_bmi(weight, height),
            _ => None,
        }
    }
}

impl From<&user_model::Model> for UserProfile {
    fn from(user: &user_model::Model) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            height: user.height,
            weight: user.weight,
            gender: user.gender.clone(),
        }
    }
}

/// 期間内の全メトリクス統計
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatistics {
    pub period: String,
    pub total_entries: usize,
    pub heart_rate: Option<MetricStatistics>,
    pub blood_pressure: BloodPressureStatistics,
    pub weight: Option<MetricStatistics>,
    pub sleep: Option<MetricStatistics>,
    pub steps: Option<MetricStatistics>,
    pub water: Option<MetricStatistics>,
    pub mood: Option<MetricStatistics>,
}

/// "30 days" 形式の期間表記
pub fn period_label(days: i64) -> String {
    format!("{} days", days)
}

impl HealthStatistics {
    pub fn from_entries(entries: &[health_entry_model::Model], period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            total_entries: entries.len(),
            heart_rate: aggregate_metric(entries, HealthMetric::HeartRate),
            blood_pressure: aggregate_blood_pressure(entries),
            weight: aggregate_metric(entries, HealthMetric::Weight),
            sleep: aggregate_metric(entries, HealthMetric::Sleep),
            steps: aggregate_metric(entries, HealthMetric::Steps),
            water: aggregate_metric(entries, HealthMetric::Water),
            mood: aggregate_metric(entries, HealthMetric::Mood),
        }
    }

    pub fn get(&self, metric: HealthMetric) -> Option<&MetricStatistics> {
        match metric {
            HealthMetric::HeartRate => self.heart_rate.as_ref(),
            HealthMetric::BloodPressureSys => self.blood_pressure.systolic.as_ref(),
            HealthMetric::BloodPressureDia => self.blood_pressure.diastolic.as_ref(),
            HealthMetric::Weight => self.weight.as_ref(),
            HealthMetric::Sleep => self.sleep.as_ref(),
            HealthMetric::Steps => self.steps.as_ref(),
            HealthMetric::Water => self.water.as_ref(),
            HealthMetric::Mood => self.mood.as_ref(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::health_entry_model;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    pub fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap() + chrono::Duration::days(n)
    }

    pub fn entry(n: i64) -> health_entry_model::Model {
        health_entry_model::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: day(n),
            heart_rate: None,
            blood_pressure_sys: None,
            blood_pressure_dia: None,
            weight: None,
            sleep: None,
            steps: None,
            water: None,
            mood: None,
            notes: None,
            created_at: day(n),
            updated_at: day(n),
        }
    }
}
