// src/analytics/trend.rs

use super::aggregator::round2;
use crate::domain::health_entry_model;
use crate::domain::health_metric::HealthMetric;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 時刻付きの1サンプル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSample {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "metricName")]
    pub metric: HealthMetric,
    pub value: f64,
}

impl HealthSample {
    /// エントリ列から指定メトリクスのサンプルを取り出す（0 も残す）
    pub fn from_entries(entries: &[health_entry_model::Model], metric: HealthMetric) -> Vec<Self> {
        entries
            .iter()
            .filter_map(|entry| {
                metric.value_of(entry).map(|value| Self {
                    timestamp: entry.date,
                    metric,
                    value,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Increasing
        } else if change < 0.0 {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub metric: HealthMetric,
    pub start_value: f64,
    pub end_value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub direction: TrendDirection,
}

/// 最初と最後のサンプルの差分
///
/// 時刻の昇順に並べ替えてから評価する（同時刻は入力順を維持）。
/// サンプルが2件未満、または最初の値が 0 の場合は None。
pub fn evaluate_trend(series: &[HealthSample], metric: HealthMetric) -> Option<TrendResult> {
    let mut samples: Vec<&HealthSample> = series
        .iter()
        .filter(|sample| sample.metric == metric && sample.value.is_finite())
        .collect();

    if samples.len() < 2 {
        return None;
    }

    samples.sort_by_key(|sample| sample.timestamp);

    let start_value = samples[0].value;
    let end_value = samples[samples.len() - 1].value;

    if start_value == 0.0 {
        return None;
    }

    let change = end_value - start_value;
    let change_percent = change / start_value * 100.0;

    Some(TrendResult {
        metric,
        start_value,
        end_value,
        change: round2(change),
        change_percent: round2(change_percent),
        direction: TrendDirection::from_change(change),
    })
}
