// src/domain/medication_frequency.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 服薬頻度（値はスペース区切りの文字列で保存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicationFrequency {
    #[serde(rename = "once daily")]
    OnceDaily,
    #[serde(rename = "twice daily")]
    TwiceDaily,
    #[serde(rename = "three times daily")]
    ThreeTimesDaily,
    #[serde(rename = "as needed")]
    AsNeeded,
}

impl MedicationFrequency {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "once daily" => Some(Self::OnceDaily),
            "twice daily" => Some(Self::TwiceDaily),
            "three times daily" => Some(Self::ThreeTimesDaily),
            "as needed" => Some(Self::AsNeeded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnceDaily => "once daily",
            Self::TwiceDaily => "twice daily",
            Self::ThreeTimesDaily => "three times daily",
            Self::AsNeeded => "as needed",
        }
    }

    /// 1日あたりの予定回数（頓服は None）
    pub fn doses_per_day(&self) -> Option<u32> {
        match self {
            Self::OnceDaily => Some(1),
            Self::TwiceDaily => Some(2),
            Self::ThreeTimesDaily => Some(3),
            Self::AsNeeded => None,
        }
    }
}

impl fmt::Display for MedicationFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
