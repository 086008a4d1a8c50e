// src/utils/validation.rs

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// パスワードの制約
pub mod password {
    pub const MIN_LENGTH: u64 = 6;
}

/// 名前の制約
pub mod name {
    pub const MIN_LENGTH: u64 = 1;
    pub const MAX_LENGTH: u64 = 100;
}

/// 必須フィールドの制約
pub mod required {
    pub const MIN_LENGTH: u64 = 1;
}

/// メールアドレス
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("Invalid email regex")
});

/// YYYY-MM-DD
pub static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(&email.to_lowercase()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_email");
        error.message = Some("Please provide a valid email address".into());
        Err(error)
    }
}

/// 空白のみの名前を拒否
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Value cannot be blank".into());
        return Err(error);
    }
    Ok(())
}

/// 空の要素を含まない、空でないリスト
pub fn validate_symptom_list(symptoms: &[String]) -> Result<(), ValidationError> {
    if symptoms.is_empty() || symptoms.iter().any(|s| s.trim().is_empty()) {
        let mut error = ValidationError::new("invalid_symptoms");
        error.message = Some("At least one symptom is required".into());
        return Err(error);
    }
    Ok(())
}

/// パスパラメータの日付をパース
pub fn parse_date_param(value: &str) -> Option<NaiveDate> {
    if !DATE_REGEX.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
