// src/domain/health_metric.rs

use super::health_entry_model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HealthEntry の各バイタル列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthMetric {
    HeartRate,
    BloodPressureSys,
    BloodPressureDia,
    Weight,
    Sleep,
    Steps,
    Water,
    Mood,
}

impl HealthMetric {
    /// camelCase 名から変換（未知の名前は None）
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "heartRate" => Some(Self::HeartRate),
            "bloodPressureSys" => Some(Self::BloodPressureSys),
            "bloodPressureDia" => Some(Self::BloodPressureDia),
            "weight" => Some(Self::Weight),
            "sleep" => Some(Self::Sleep),
            "steps" => Some(Self::Steps),
            "water" => Some(Self::Water),
            "mood" => Some(Self::Mood),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeartRate => "heartRate",
            Self::BloodPressureSys => "bloodPressureSys",
            Self::BloodPressureDia => "bloodPressureDia",
            Self::Weight => "weight",
            Self::Sleep => "sleep",
            Self::Steps => "steps",
            Self::Water => "water",
            Self::Mood => "mood",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::HeartRate,
            Self::BloodPressureSys,
            Self::BloodPressureDia,
            Self::Weight,
            Self::Sleep,
            Self::Steps,
            Self::Water,
            Self::Mood,
        ]
    }

    pub fn value_of(&self, entry: &health_entry_model::Model) -> Option<f64> {
        match self {
            Self::HeartRate => entry.heart_rate,
            Self::BloodPressureSys => entry.blood_pressure_sys,
            Self::BloodPressureDia => entry.blood_pressure_dia,
            Self::Weight => entry.weight,
            Self::Sleep => entry.sleep,
            Self::Steps => entry.steps,
            Self::Water => entry.water,
            Self::Mood => entry.mood,
        }
    }
}

impl fmt::Display for HealthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for metric in HealthMetric::all() {
            assert_eq!(HealthMetric::from_str(metric.as_str()), Some(metric));
        }
        assert_eq!(HealthMetric::from_str("cholesterol"), None);
        assert_eq!(HealthMetric::from_str("Weight"), None);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&HealthMetric::BloodPressureSys).unwrap();
        assert_eq!(json, "\"bloodPressureSys\"");
    }
}
