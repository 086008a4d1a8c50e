// src/analytics/insights.rs

use super::bmi::BmiCategory;
use super::{HealthStatistics, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Info,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// ルールが生成するアドバイス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub category: String,
    pub message: String,
    pub severity: Severity,
}

struct InsightRule {
    select: fn(&HealthStatistics, &UserProfile) -> Option<f64>,
    applies: fn(f64) -> bool,
    category: &'static str,
    severity: Severity,
    insight_type: InsightType,
    message: fn(f64) -> String,
}

impl InsightRule {
    fn evaluate(&self, stats: &HealthStatistics, profile: &UserProfile) -> Option<Insight> {
        let value = (self.select)(stats, profile)?;
        if !(self.applies)(value) {
            return None;
        }
        Some(Insight {
            insight_type: self.insight_type,
            category: self.category.to_string(),
            message: (self.message)(value),
            severity: self.severity,
        })
    }
}

// 閾値は MetricStatistics の丸め済み平均（小数2桁）で判定する
fn avg_heart_rate(stats: &HealthStatistics, _: &UserProfile) -> Option<f64> {
    stats.heart_rate.as_ref().map(|s| s.average)
}

fn avg_sleep(stats: &HealthStatistics, _: &UserProfile) -> Option<f64> {
    stats.sleep.as_ref().map(|s| s.average)
}

fn avg_water(stats: &HealthStatistics, _: &UserProfile) -> Option<f64> {
    stats.water.as_ref().map(|s| s.average)
}

fn profile_bmi(_: &HealthStatistics, profile: &UserProfile) -> Option<f64> {
    profile.bmi()
}

fn above_100(avg: f64) -> bool {
    avg > 100.0
}

fn below_60(avg: f64) -> bool {
    avg < 60.0
}

fn below_7(avg: f64) -> bool {
    avg < 7.0
}

fn below_8(avg: f64) -> bool {
    avg < 8.0
}

fn always(_: f64) -> bool {
    true
}

/// 小数 digits 桁で表示。ちょうど半分は0から遠い方へ丸める
fn format_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * scale).round() / scale)
}

fn high_heart_rate_message(avg: f64) -> String {
    format!(
        "Your average heart rate ({} bpm) is elevated. Consider relaxation techniques.",
        format_fixed(avg, 0)
    )
}

fn low_heart_rate_message(avg: f64) -> String {
    format!(
        "Your average heart rate ({} bpm) is excellent. Keep up the good fitness!",
        format_fixed(avg, 0)
    )
}

fn low_sleep_message(avg: f64) -> String {
    format!(
        "Your average sleep ({} hours) is below the recommended 7-9 hours.",
        format_fixed(avg, 1)
    )
}

fn bmi_message(bmi: f64) -> String {
    format!(
        "Your BMI is {} ({})",
        format_fixed(bmi, 1),
        BmiCategory::from_bmi(bmi)
    )
}

fn low_hydration_message(avg: f64) -> String {
    format!(
        "You're averaging {} glasses of water. Aim for 8+ glasses daily.",
        format_fixed(avg, 1)
    )
}

// 評価順 = 出力順
static RULES: [InsightRule; 5] = [
    InsightRule {
        select: avg_heart_rate,
        applies: above_100,
        category: "Heart Rate",
        severity: Severity::Medium,
        insight_type: InsightType::Warning,
        message: high_heart_rate_message,
    },
    InsightRule {
        select: avg_heart_rate,
        applies: below_60,
        category: "Heart Rate",
        severity: Severity::Low,
        insight_type: InsightType::Info,
        message: low_heart_rate_message,
    },
    InsightRule {
        select: avg_sleep,
        applies: below_7,
        category: "Sleep",
        severity: Severity::Medium,
        insight_type: InsightType::Warning,
        message: low_sleep_message,
    },
    InsightRule {
        select: profile_bmi,
        applies: always,
        category: "Weight",
        severity: Severity::Low,
        insight_type: InsightType::Info,
        message: bmi_message,
    },
    InsightRule {
        select: avg_water,
        applies: below_8,
        category: "Hydration",
        severity: Severity::Low,
        insight_type: InsightType::Info,
        message: low_hydration_message,
    },
];

/// 全ルールを順に評価する。統計のないメトリクスのルールはスキップ
pub fn generate_insights(stats: &HealthStatistics, profile: &UserProfile) -> Vec<Insight> {
    RULES
        .iter()
        .filter_map(|rule| rule.evaluate(stats, profile))
        .collect()
}
