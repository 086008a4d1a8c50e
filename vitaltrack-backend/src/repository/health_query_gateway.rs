// src/repository/health_query_gateway.rs

//! 分析・エクスポートが使うデータ取得口
//!
//! 実装はユーザー単位の分離を保証すること。

use crate::analytics::UserProfile;
use crate::domain::health_entry_model;
use crate::repository::health_entry_repository::HealthEntryRepository;
use crate::repository::user_repository::UserRepository;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{DbConn, DbErr};
use uuid::Uuid;

/// 期間指定。since 以上 until 未満、None は無制限
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl DateWindow {
    pub fn between(since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self {
            since: Some(since),
            until: Some(until),
        }
    }

    /// 現在から days 日前以降
    pub fn last_days(days: i64) -> Self {
        Self {
            since: Some(Utc::now() - Duration::days(days)),
            until: None,
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.since.is_none_or(|since| at >= since) && self.until.is_none_or(|until| at < until)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[async_trait]
pub trait HealthQueryGateway: Send + Sync {
    async fn find_entries(
        &self,
        user_id: Uuid,
        window: DateWindow,
        direction: SortDirection,
    ) -> Result<Vec<health_entry_model::Model>, DbErr>;

    /// 新しい順に最大 limit 件
    async fn find_recent_entries(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<health_entry_model::Model>, DbErr>;

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, DbErr>;
}

/// sea-orm 実装
pub struct SeaOrmHealthQueryGateway {
    entries: HealthEntryRepository,
    users: UserRepository,
}

impl SeaOrmHealthQueryGateway {
    pub fn new(db: DbConn) -> Self {
        Self {
            entries: HealthEntryRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }
}

#[async_trait]
impl HealthQueryGateway for SeaOrmHealthQueryGateway {
    async fn find_entries(
        &self,
        user_id: Uuid,
        window: DateWindow,
        direction: SortDirection,
    ) -> Result<Vec<health_entry_model::Model>, DbErr> {
        self.entries.find_in_window(user_id, window, direction).await
    }

    async fn find_recent_entries(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<health_entry_model::Model>, DbErr> {
        self.entries.find_recent(user_id, limit).await
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, DbErr> {
        Ok(self
            .users
            .find_by_id(user_id)
            .await?
            .as_ref()
            .map(UserProfile::from))
    }
}
