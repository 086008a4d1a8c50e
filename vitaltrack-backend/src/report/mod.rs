// src/report/mod.rs

//! エクスポート用レポートの描画

pub mod csv;
pub mod pdf;

pub use self::csv::CsvRenderer;
pub use self::pdf::PdfRenderer;

use crate::analytics::{HealthStatistics, UserProfile};
use crate::domain::health_entry_model;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report cannot be rendered: {0}")]
    Invalid(String),
}

/// 描画の入力
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub profile: UserProfile,
    pub period_days: Option<i64>,
    pub stats: Option<HealthStatistics>,
    pub entries: Vec<health_entry_model::Model>,
    pub generated_at: DateTime<Utc>,
}

impl HealthReport {
    pub fn new(profile: UserProfile, entries: Vec<health_entry_model::Model>) -> Self {
        Self {
            profile,
            period_days: None,
            stats: None,
            entries,
            generated_at: Utc::now(),
        }
    }

    pub fn with_period(mut self, days: i64) -> Self {
        self.period_days = Some(days);
        self
    }

    pub fn with_stats(mut self, stats: HealthStatistics) -> Self {
        self.stats = Some(stats);
        self
    }

    /// 新しい順に並べたエントリ
    pub fn entries_newest_first(&self) -> Vec<&health_entry_model::Model> {
        let mut entries: Vec<&health_entry_model::Model> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}

pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &HealthReport) -> Result<Vec<u8>, ReportError>;

    fn content_type(&self) -> &'static str;

    fn file_name(&self, date: NaiveDate) -> String;
}

/// 0 と未記録は空欄として扱う
pub(crate) fn recorded(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}
