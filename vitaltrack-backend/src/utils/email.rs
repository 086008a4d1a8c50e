// src/utils/email.rs

use crate::analytics::{HealthStatistics, Insight};
use crate::utils::validation::EMAIL_REGEX;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::env;
use thiserror::Error;
use tracing::info;

/// メール送信エラー
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("SMTP configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to send email: {0}")]
    SendError(String),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Missing email configuration")]
    MissingConfiguration,
}

/// メール設定
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_email: String,
    pub from_name: String,
    pub use_tls: bool,
    /// 開発モードかどうか（ログ出力のみ）
    pub development_mode: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: "noreply@vitaltrack.com".to_string(),
            from_name: "VitalTrack".to_string(),
            use_tls: true,
            development_mode: true,
        }
    }
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, EmailError> {
        let development_mode = env::var("EMAIL_DEVELOPMENT_MODE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        if development_mode {
            return Ok(Self::default());
        }

        let smtp_host = env::var("SMTP_HOST").map_err(|_| EmailError::MissingConfiguration)?;
        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .map_err(|_| EmailError::ConfigurationError("Invalid SMTP port".to_string()))?;
        let smtp_username =
            env::var("SMTP_USERNAME").map_err(|_| EmailError::MissingConfiguration)?;
        let smtp_password =
            env::var("SMTP_PASSWORD").map_err(|_| EmailError::MissingConfiguration)?;
        let from_email = env::var("FROM_EMAIL").map_err(|_| EmailError::MissingConfiguration)?;
        let from_name = env::var("FROM_NAME").unwrap_or_else(|_| "VitalTrack".to_string());
        let use_tls = env::var("SMTP_USE_TLS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(Self {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            from_email,
            from_name,
            use_tls,
            development_mode: false,
        })
    }

    pub fn validate(&self) -> Result<(), EmailError> {
        if self.development_mode {
            return Ok(());
        }

        if self.smtp_host.is_empty() {
            return Err(EmailError::ConfigurationError(
                "SMTP host is required".to_string(),
            ));
        }

        if !is_valid_email(&self.from_email) {
            return Err(EmailError::InvalidAddress(self.from_email.clone()));
        }

        Ok(())
    }
}

/// メール送信内容
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to_email: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// メール送信サービス
pub struct EmailService {
    config: EmailConfig,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        config.validate()?;

        let transport = if config.development_mode {
            None
        } else {
            let credentials =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            let builder = if config.use_tls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                    .map_err(|e| EmailError::ConfigurationError(e.to_string()))?
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            };
            Some(
                builder
                    .port(config.smtp_port)
                    .credentials(credentials)
                    .build(),
            )
        };

        Ok(Self { config, transport })
    }

    pub fn from_env() -> Result<Self, EmailError> {
        Self::new(EmailConfig::from_env()?)
    }

    /// メールを送信
    pub async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !is_valid_email(&message.to_email) {
            return Err(EmailError::InvalidAddress(message.to_email));
        }

        let Some(transport) = &self.transport else {
            // 開発モードではログ出力のみ
            self.log_email(&message);
            return Ok(());
        };

        let from = mailbox(Some(&self.config.from_name), &self.config.from_email)?;
        let to = mailbox(message.to_name.as_deref(), &message.to_email)?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.text_body.clone(),
                message.html_body.clone(),
            ))
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        info!(
            to_email = %mask_email(&message.to_email),
            subject = %message.subject,
            "Email sent successfully"
        );

        Ok(())
    }

    /// 登録完了メール
    pub async fn send_welcome_email(&self, to_email: &str, to_name: &str) -> Result<(), EmailError> {
        let html_body = format!(
            r#"<h2>Welcome {name}!</h2>
<p>Thank you for joining VitalTrack - Your Personal Health Companion.</p>
<p>Start tracking your vital signs today and get personalized health insights.</p>
<p>Best regards,<br>The VitalTrack Team</p>"#,
            name = to_name
        );
        let text_body = format!(
            "Welcome {name}!\n\nThank you for joining VitalTrack - Your Personal Health Companion.\nStart tracking your vital signs today and get personalized health insights.\n\nBest regards,\nThe VitalTrack Team\n",
            name = to_name
        );

        self.send_email(EmailMessage {
            to_email: to_email.to_string(),
            to_name: Some(to_name.to_string()),
            subject: "Welcome to VitalTrack!".to_string(),
            html_body,
            text_body,
        })
        .await
    }

    /// インサイトに基づく警告メール
    pub async fn send_health_alert_email(
        &self,
        to_email: &str,
        to_name: &str,
        alert: &Insight,
    ) -> Result<(), EmailError> {
        let html_body = format!(
            r#"<h3>Health Alert</h3>
<p>Hi {name},</p>
<p><strong>{category}:</strong> {message}</p>
<p>Please review your health data in the VitalTrack app.</p>
<p>Best regards,<br>The VitalTrack Team</p>"#,
            name = to_name,
            category = alert.category,
            message = alert.message
        );
        let text_body = format!(
            "Hi {name},\n\n{category}: {message}\n\nPlease review your health data in the VitalTrack app.\n",
            name = to_name,
            category = alert.category,
            message = alert.message
        );

        self.send_email(EmailMessage {
            to_email: to_email.to_string(),
            to_name: Some(to_name.to_string()),
            subject: format!("VitalTrack Health Alert: {}", alert.category),
            html_body,
            text_body,
        })
        .await
    }

    /// 週次レポートメール
    pub async fn send_weekly_report_email(
        &self,
        to_email: &str,
        to_name: &str,
        stats: &HealthStatistics,
    ) -> Result<(), EmailError> {
        let lines = weekly_report_lines(stats);

        let html_items: String = lines
            .iter()
            .map(|line| format!("<li>{}</li>", line))
            .collect();
        let html_body = format!(
            r#"<h2>Your Weekly Health Report</h2>
<p>Hi {name},</p>
<p>Here's a summary of your health data from this week:</p>
<ul>{items}</ul>
<p>Keep up the good work on your health journey!</p>
<p>Best regards,<br>The VitalTrack Team</p>"#,
            name = to_name,
            items = html_items
        );
        let text_body = format!(
            "Hi {name},\n\nHere's a summary of your health data from this week:\n{items}\n\nKeep up the good work on your health journey!\n",
            name = to_name,
            items = lines
                .iter()
                .map(|line| format!("- {}", line))
                .collect::<Vec<_>>()
                .join("\n")
        );

        self.send_email(EmailMessage {
            to_email: to_email.to_string(),
            to_name: Some(to_name.to_string()),
            subject: "Your VitalTrack Weekly Report".to_string(),
            html_body,
            text_body,
        })
        .await
    }

    /// 開発モードでのメールログ出力
    fn log_email(&self, message: &EmailMessage) {
        info!(
            to_email = %message.to_email,
            to_name = %message.to_name.as_deref().unwrap_or(""),
            subject = %message.subject,
            "EMAIL (development mode)"
        );
        tracing::debug!(body = %message.text_body, "EMAIL body");
    }
}

fn weekly_report_lines(stats: &HealthStatistics) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(hr) = &stats.heart_rate {
        lines.push(format!("Average Heart Rate: {} bpm", hr.average));
    }
    if let Some(weight) = &stats.weight {
        lines.push(format!("Average Weight: {} kg", weight.average));
    }
    if let Some(sleep) = &stats.sleep {
        lines.push(format!("Average Sleep: {} hours", sleep.average));
    }
    if let Some(steps) = &stats.steps {
        lines.push(format!("Average Steps: {:.0}", steps.average));
    }
    lines
}

fn mailbox(name: Option<&str>, email: &str) -> Result<Mailbox, EmailError> {
    let address = email
        .parse()
        .map_err(|_| EmailError::InvalidAddress(email.to_string()))?;
    Ok(Mailbox::new(name.map(str::to_string), address))
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(&email.to_lowercase())
}

/// メールアドレスをマスク
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let masked_local = if local.chars().count() <= 2 {
                "*".repeat(local.chars().count())
            } else {
                format!("{}****", local.chars().next().unwrap_or('*'))
            };
            format!("{}@{}", masked_local, domain)
        }
        None => "****@****".to_string(),
    }
}
