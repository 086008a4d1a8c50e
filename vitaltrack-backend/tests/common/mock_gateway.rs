// tests/common/mock_gateway.rs
//! サービス単体テスト用のインメモリ HealthQueryGateway

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;
use std::sync::Mutex;
use uuid::Uuid;
use vitaltrack_backend::analytics::UserProfile;
use vitaltrack_backend::domain::health_entry_model;
use vitaltrack_backend::repository::health_query_gateway::{
    DateWindow, HealthQueryGateway, SortDirection,
};

#[derive(Default)]
pub struct InMemoryHealthGateway {
    entries: Mutex<Vec<health_entry_model::Model>>,
    profiles: Mutex<Vec<(Uuid, UserProfile)>>,
    fail: bool,
}

impl InMemoryHealthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全呼び出しが DbErr を返す
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_profile(self, user_id: Uuid, profile: UserProfile) -> Self {
        self.profiles.lock().unwrap().push((user_id, profile));
        self
    }

    pub fn with_entry(self, entry: health_entry_model::Model) -> Self {
        self.entries.lock().unwrap().push(entry);
        self
    }

    fn check(&self) -> Result<(), DbErr> {
        if self.fail {
            return Err(DbErr::Custom("gateway unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthQueryGateway for InMemoryHealthGateway {
    async fn find_entries(
        &self,
        user_id: Uuid,
        window: DateWindow,
        direction: SortDirection,
    ) -> Result<Vec<health_entry_model::Model>, DbErr> {
        self.check()?;
        let mut entries: Vec<_> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && window.contains(e.date))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.date);
        if direction == SortDirection::Descending {
            entries.reverse();
        }
        Ok(entries)
    }

    async fn find_recent_entries(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<health_entry_model::Model>, DbErr> {
        let entries = self
            .find_entries(user_id, DateWindow::unbounded(), SortDirection::Descending)
            .await?;
        Ok(entries.into_iter().take(limit as usize).collect())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, DbErr> {
        self.check()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, profile)| profile.clone()))
    }
}

/// days_ago 日前の空エントリ
pub fn entry_days_ago(user_id: Uuid, days_ago: i64) -> health_entry_model::Model {
    let date: DateTime<Utc> = Utc::now() - Duration::days(days_ago) - Duration::minutes(5);
    health_entry_model::Model {
        id: Uuid::new_v4(),
        user_id,
        date,
        heart_rate: None,
        blood_pressure_sys: None,
        blood_pressure_dia: None,
        weight: None,
        sleep: None,
        steps: None,
        water: None,
        mood: None,
        notes: None,
        created_at: date,
        updated_at: date,
    }
}

pub fn test_profile() -> UserProfile {
    UserProfile {
        name: "Ama Boateng".to_string(),
        email: "ama@example.com".to_string(),
        age: Some(34),
        height: Some(175.0),
        weight: Some(70.0),
        gender: Some("female".to_string()),
    }
}
