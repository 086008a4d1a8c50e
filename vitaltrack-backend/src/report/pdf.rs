// src/report/pdf.rs

//! Helvetica のみを使うテキスト PDF
//!
//! ページに収まらない行は次のページへ送る。

use super::{recorded, HealthReport, ReportError, ReportRenderer};
use crate::analytics::calculate_bmi;
use chrono::NaiveDate;
use std::io::Write;

/// Letter サイズ (pt)
const PAGE_WIDTH: f64 = 612.0;
const PAGE_HEIGHT: f64 = 792.0;
const MARGIN: f64 = 72.0;
const LINE_SPACING: f64 = 1.4;
const RECENT_ENTRY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Line {
    Text {
        text: String,
        size: f64,
        font: Font,
        centered: bool,
    },
    Gap,
}

impl Line {
    fn text(text: impl Into<String>, size: f64) -> Self {
        Self::Text {
            text: text.into(),
            size,
            font: Font::Regular,
            centered: false,
        }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            size: 14.0,
            font: Font::Bold,
            centered: false,
        }
    }

    fn height(&self) -> f64 {
        match self {
            Self::Text { size, .. } => size * LINE_SPACING,
            Self::Gap => 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    fn layout(&self, report: &HealthReport) -> Vec<Line> {
        let mut lines = vec![
            Line::Text {
                text: "VitalTrack Health Report".to_string(),
                size: 24.0,
                font: Font::Bold,
                centered: true,
            },
            Line::Gap,
            Line::text(
                format!(
                    "Report Generated: {}",
                    report.generated_at.format("%Y-%m-%d")
                ),
                12.0,
            ),
            Line::text(format!("User: {}", report.profile.name), 12.0),
        ];
        if let Some(days) = report.period_days {
            lines.push(Line::text(format!("Period: Last {} days", days), 12.0));
        }
        lines.push(Line::Gap);

        // プロフィール
        let profile = &report.profile;
        lines.push(Line::heading("User Profile"));
        if let Some(age) = profile.age {
            lines.push(Line::text(format!("Age: {} years", age), 11.0));
        }
        if let Some(height) = profile.height {
            lines.push(Line::text(format!("Height: {} cm", height), 11.0));
        }
        if let Some(weight) = profile.weight {
            lines.push(Line::text(format!("Weight: {} kg", weight), 11.0));
        }
        if let Some(bmi) = profile
            .weight
            .zip(profile.height)
            .and_then(|(w, h)| calculate_bmi(w, h))
        {
            lines.push(Line::text(format!("BMI: {:.1}", bmi), 11.0));
        }
        lines.push(Line::Gap);

        // 統計
        if let Some(stats) = report.stats.as_ref().filter(|_| !report.entries.is_empty()) {
            lines.push(Line::heading("Health Statistics"));
            if let Some(hr) = &stats.heart_rate {
                lines.push(Line::text(
                    format!("Average Heart Rate: {:.0} bpm", hr.average),
                    11.0,
                ));
            }
            if let Some(weight) = &stats.weight {
                lines.push(Line::text(
                    format!("Average Weight: {:.1} kg", weight.average),
                    11.0,
                ));
            }
            if let Some(sleep) = &stats.sleep {
                lines.push(Line::text(
                    format!("Average Sleep: {:.1} hours", sleep.average),
                    11.0,
                ));
            }
            if let Some(steps) = &stats.steps {
                lines.push(Line::text(
                    format!("Average Steps: {:.0}", steps.average),
                    11.0,
                ));
            }
        }
        lines.push(Line::Gap);

        lines.push(Line::heading("Recent Entries"));
        for entry in report
            .entries_newest_first()
            .into_iter()
            .take(RECENT_ENTRY_LIMIT)
        {
            lines.push(Line::text(
                format!(
                    "{} - HR: {} bpm, Weight: {} kg, Sleep: {} h",
                    entry.date.format("%Y-%m-%d"),
                    dash_or(entry.heart_rate),
                    dash_or(entry.weight),
                    dash_or(entry.sleep)
                ),
                10.0,
            ));
        }

        lines
    }
}

fn dash_or(value: Option<f64>) -> String {
    recorded(value)
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// PDF 文字列リテラル用エスケープ。ASCII 以外は '?'
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

/// Helvetica の平均字幅で近似
fn approximate_width(text: &str, size: f64, font: Font) -> f64 {
    let factor = match font {
        Font::Regular => 0.5,
        Font::Bold => 0.55,
    };
    text.chars().count() as f64 * size * factor
}

/// 行をページごとのコンテンツストリームに分割
fn paginate(lines: &[Line]) -> Vec<String> {
    let mut pages = Vec::new();
    let mut content = String::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in lines {
        let height = line.height();
        if y - height < MARGIN {
            pages.push(std::mem::take(&mut content));
            y = PAGE_HEIGHT - MARGIN;
        }
        y -= height;

        if let Line::Text {
            text,
            size,
            font,
            centered,
        } = line
        {
            let x = if *centered {
                ((PAGE_WIDTH - approximate_width(text, *size, *font)) / 2.0).max(MARGIN)
            } else {
                MARGIN
            };
            content.push_str(&format!(
                "BT /{} {} Tf {:.2} {:.2} Td ({}) Tj ET\n",
                font.resource(),
                size,
                x,
                y,
                escape_text(text)
            ));
        }
    }
    pages.push(content);
    pages
}

/// 文書全体を組み立てる（オブジェクト番号: 1 Catalog, 2 Pages, 3-4 Font, 以降ページとストリーム）
fn write_document(pages: &[String]) -> Result<Vec<u8>, ReportError> {
    if pages.is_empty() {
        return Err(ReportError::Invalid("document has no pages".to_string()));
    }

    let mut out: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    out.extend_from_slice(b"%PDF-1.4\n");

    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 5 + i * 2).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");

    offsets.push(out.len());
    write!(out, "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n")?;

    offsets.push(out.len());
    write!(
        out,
        "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
        kids,
        pages.len()
    )?;

    offsets.push(out.len());
    write!(
        out,
        "3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n"
    )?;

    offsets.push(out.len());
    write!(
        out,
        "4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>\nendobj\n"
    )?;

    for (page_id, content) in page_ids.iter().zip(pages) {
        offsets.push(out.len());
        write!(
            out,
            "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>\nendobj\n",
            page_id,
            PAGE_WIDTH,
            PAGE_HEIGHT,
            page_id + 1
        )?;

        offsets.push(out.len());
        write!(
            out,
            "{} 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
            page_id + 1,
            content.len(),
            content
        )?;
    }

    let xref_offset = out.len();
    write!(out, "xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1)?;
    for offset in &offsets {
        write!(out, "{:010} 00000 n \n", offset)?;
    }
    write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        xref_offset
    )?;

    Ok(out)
}

impl ReportRenderer for PdfRenderer {
    fn render(&self, report: &HealthReport) -> Result<Vec<u8>, ReportError> {
        let lines = self.layout(report);
        write_document(&paginate(&lines))
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn file_name(&self, date: NaiveDate) -> String {
        format!("VitalTrack-Report-{}.pdf", date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::entry;
    use crate::analytics::{HealthStatistics, UserProfile};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            age: Some(34),
            height: Some(175.0),
            weight: Some(70.0),
            gender: Some("female".to_string()),
        }
    }

    fn page_count(pdf: &str) -> usize {
        pdf.matches("/Type /Page /Parent").count()
    }

    #[test]
    fn test_renders_pdf_header_and_sections() {
        let mut e = entry(0);
        e.heart_rate = Some(72.0);
        e.weight = Some(70.0);
        let entries = vec![e];
        let stats = HealthStatistics::from_entries(&entries, "30 days");
        let report = HealthReport::new(profile(), entries)
            .with_period(30)
            .with_stats(stats);

        let bytes = PdfRenderer::new().render(&report).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("(VitalTrack Health Report) Tj"));
        assert!(text.contains("(Period: Last 30 days) Tj"));
        assert!(text.contains("(BMI: 22.9) Tj"));
        assert!(text.contains("(Average Heart Rate: 72 bpm) Tj"));
        assert!(text.contains("(2025-01-01 - HR: 72 bpm, Weight: 70 kg, Sleep: - h) Tj"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert_eq!(page_count(&text), 1);
    }

    #[test]
    fn test_paginates_long_content() {
        let lines: Vec<Line> = (0..200)
            .map(|i| Line::text(format!("line {}", i), 11.0))
            .collect();
        let pages = paginate(&lines);
        assert!(pages.len() > 1);

        let bytes = write_document(&pages).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(page_count(&text), pages.len());
        assert!(text.contains(&format!("/Count {}", pages.len())));
    }

    #[test]
    fn test_recent_entries_are_limited() {
        let entries: Vec<_> = (0..15).map(entry).collect();
        let report = HealthReport::new(profile(), entries);
        let lines = PdfRenderer::new().layout(&report);
        let recent = lines
            .iter()
            .filter(|line| matches!(line, Line::Text { text, .. } if text.contains(" - HR: ")))
            .count();
        assert_eq!(recent, RECENT_ENTRY_LIMIT);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a(b)c\\"), "a\\(b\\)c\\\\");
        assert_eq!(escape_text("café"), "caf?");
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(
            PdfRenderer::new().file_name(date),
            "VitalTrack-Report-2025-03-14.pdf"
        );
    }
}
