// src/service/notification_service.rs

use crate::analytics::{
    generate_insights, period_label, HealthStatistics, InsightType, UserProfile,
};
use crate::api::dto::analytics_dto::INSIGHT_SAMPLE_SIZE;
use crate::error::{AppError, AppResult};
use crate::repository::health_query_gateway::{DateWindow, HealthQueryGateway, SortDirection};
use crate::repository::user_repository::UserRepository;
use crate::utils::email::{mask_email, EmailError, EmailService};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

const WEEKLY_REPORT_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResult {
    pub message: String,
    pub sent: usize,
}

impl NotificationResult {
    fn new(message: impl Into<String>, sent: usize) -> Self {
        Self {
            message: message.into(),
            sent,
        }
    }
}

fn email_error(e: EmailError) -> AppError {
    error!(error = %e, "Failed to send notification email");
    AppError::ExternalServiceError("Failed to send email".to_string())
}

/// 通知設定に従ってメールを送る
pub struct NotificationService {
    user_repo: Arc<UserRepository>,
    gateway: Arc<dyn HealthQueryGateway>,
    email_service: Arc<EmailService>,
}

impl NotificationService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        gateway: Arc<dyn HealthQueryGateway>,
        email_service: Arc<EmailService>,
    ) -> Self {
        Self {
            user_repo,
            gateway,
            email_service,
        }
    }

    pub async fn send_weekly_report(&self, user_id: Uuid) -> AppResult<NotificationResult> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !user.notification_preferences().weekly_reports {
            return Ok(NotificationResult::new("Weekly reports are disabled", 0));
        }

        let entries = self
            .gateway
            .find_entries(
                user_id,
                DateWindow::last_days(WEEKLY_REPORT_DAYS),
                SortDirection::Descending,
            )
            .await?;

        if entries.is_empty() {
            return Ok(NotificationResult::new("No data available for the selected period", 0));
        }

        let stats = HealthStatistics::from_entries(&entries, period_label(WEEKLY_REPORT_DAYS));
        self.email_service
            .send_weekly_report_email(&user.email, &user.name, &stats)
            .await
            .map_err(email_error)?;

        info!(user_id = %user_id, to_email = %mask_email(&user.email), "Weekly report sent");
        Ok(NotificationResult::new("Weekly report sent", 1))
    }

    /// 警告レベルのインサイトをメールで通知
    pub async fn send_health_alerts(&self, user_id: Uuid) -> AppResult<NotificationResult> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let preferences = user.notification_preferences();
        if !(preferences.email_notifications && preferences.alert_thresholds) {
            return Ok(NotificationResult::new("Health alerts are disabled", 0));
        }

        let entries = self
            .gateway
            .find_recent_entries(user_id, INSIGHT_SAMPLE_SIZE)
            .await?;

        let stats = HealthStatistics::from_entries(&entries, format!("last {} entries", entries.len()));
        let alerts: Vec<_> = generate_insights(&stats, &UserProfile::from(&user))
            .into_iter()
            .filter(|insight| insight.insight_type == InsightType::Warning)
            .collect();

        for alert in &alerts {
            self.email_service
                .send_health_alert_email(&user.email, &user.name, alert)
                .await
                .map_err(email_error)?;
        }

        info!(user_id = %user_id, alerts = alerts.len(), "Health alerts processed");

        let message = if alerts.is_empty() {
            "No health alerts"
        } else {
            "Health alerts sent"
        };
        Ok(NotificationResult::new(message, alerts.len()))
    }
}
