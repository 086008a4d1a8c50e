// src/analytics/aggregator.rs

use crate::domain::health_entry_model;
use crate::domain::health_metric::HealthMetric;
use serde::{Deserialize, Serialize};

/// 1メトリクス分の集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStatistics {
    #[serde(rename = "avg")]
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub count: usize,
}

/// 収縮期・拡張期はそれぞれ独立に集計する
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BloodPressureStatistics {
    pub systolic: Option<MetricStatistics>,
    pub diastolic: Option<MetricStatistics>,
}

/// 小数第2位で丸める
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 空なら None（データ不足）。順序に依存しない
pub fn aggregate(values: &[f64]) -> Option<MetricStatistics> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let sum: f64 = sorted.iter().sum();

    Some(MetricStatistics {
        average: round2(sum / count as f64),
        min: sorted[0],
        max: sorted[count - 1],
        // 補間なし
        median: sorted[count / 2],
        count,
    })
}

/// None と 0 を欠損として除いた値
pub fn present_values(entries: &[health_entry_model::Model], metric: HealthMetric) -> Vec<f64> {
    entries
        .iter()
        .filter_map(|entry| metric.value_of(entry))
        .filter(|value| *value != 0.0 && value.is_finite())
        .collect()
}

pub fn aggregate_metric(
    entries: &[health_entry_model::Model],
    metric: HealthMetric,
) -> Option<MetricStatistics> {
    aggregate(&present_values(entries, metric))
}

pub fn aggregate_blood_pressure(entries: &[health_entry_model::Model]) -> BloodPressureStatistics {
    BloodPressureStatistics {
        systolic: aggregate_metric(entries, HealthMetric::BloodPressureSys),
        diastolic: aggregate_metric(entries, HealthMetric::BloodPressureDia),
    }
}
