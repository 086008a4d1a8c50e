// src/api/dto/export_dto.rs

use super::analytics_dto::DEFAULT_DAYS;
use crate::analytics::{Insight, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExportQuery {
    /// YYYY-MM-DD または RFC3339
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PdfExportQuery {
    #[validate(range(min = 1, max = 3650, message = "days must be between 1 and 3650"))]
    pub days: Option<i64>,
}

impl PdfExportQuery {
    pub fn days(&self) -> i64 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[validate(range(min = 1, max = 3650, message = "days must be between 1 and 3650"))]
    pub days: Option<i64>,
    pub include_insights: Option<bool>,
}

impl SummaryRequest {
    pub fn days(&self) -> i64 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }

    pub fn include_insights(&self) -> bool {
        self.include_insights.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl From<&UserProfile> for SummaryUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            age: profile.age,
            gender: profile.gender.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub data_points: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub user: SummaryUser,
    pub period: String,
    pub report_date: DateTime<Utc>,
    pub total_entries: usize,
    /// 値のあるメトリクスのみ
    pub metrics: BTreeMap<String, MetricSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<Insight>>,
}
