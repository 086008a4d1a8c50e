// src/report/csv.rs

use super::{recorded, HealthReport, ReportError, ReportRenderer};
use crate::domain::health_entry_model;
use chrono::NaiveDate;
use std::fmt::Write;

pub const CSV_HEADERS: [&str; 8] = [
    "Date",
    "Heart Rate (bpm)",
    "Blood Pressure (Sys/Dia)",
    "Weight (kg)",
    "Sleep (hours)",
    "Steps",
    "Water (glasses)",
    "Mood (1-10)",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn number_cell(value: Option<f64>) -> String {
    recorded(value).map(|v| v.to_string()).unwrap_or_default()
}

fn row_cells(entry: &health_entry_model::Model) -> [String; 8] {
    let blood_pressure = match (
        recorded(entry.blood_pressure_sys),
        recorded(entry.blood_pressure_dia),
    ) {
        (Some(sys), Some(dia)) => format!("{}/{}", sys, dia),
        _ => String::new(),
    };

    [
        entry.date.format("%Y-%m-%d").to_string(),
        number_cell(entry.heart_rate),
        blood_pressure,
        number_cell(entry.weight),
        number_cell(entry.sleep),
        number_cell(entry.steps),
        number_cell(entry.water),
        number_cell(entry.mood),
    ]
}

fn write_row<S: AsRef<str>>(out: &mut String, cells: &[S]) -> Result<(), ReportError> {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write!(out, "{}", quote(cell.as_ref()))?;
    }
    Ok(())
}

impl ReportRenderer for CsvRenderer {
    fn render(&self, report: &HealthReport) -> Result<Vec<u8>, ReportError> {
        let mut out = String::new();
        write_row(&mut out, &CSV_HEADERS)?;

        for entry in report.entries_newest_first() {
            out.push('\n');
            write_row(&mut out, &row_cells(entry))?;
        }

        Ok(out.into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn file_name(&self, date: NaiveDate) -> String {
        format!("health-data-{}.csv", date.format("%Y-%m-%d"))
    }
}
