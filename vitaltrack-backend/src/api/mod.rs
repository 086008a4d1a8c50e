// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{cors_layer, security_headers_middleware};
use crate::report::{CsvRenderer, PdfRenderer, ReportRenderer};
use crate::repository::health_query_gateway::{HealthQueryGateway, SeaOrmHealthQueryGateway};
use crate::repository::user_repository::UserRepository;
use crate::service::{
    achievement_service::AchievementService, analytics_service::AnalyticsService,
    auth_service::AuthService, doctor_note_service::DoctorNoteService,
    export_service::ExportService, goal_service::GoalService,
    health_entry_service::HealthEntryService, meal_service::MealService,
    medication_service::MedicationService, notification_service::NotificationService,
    symptom_service::SymptomService, user_service::UserService,
};
use crate::utils::email::EmailService;
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use axum::{http::StatusCode, middleware, response::IntoResponse, Json, Router};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub mod dto;
pub mod handlers;

const REQUEST_BODY_LIMIT: usize = 10 * 1024 * 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub health_entry_service: Arc<HealthEntryService>,
    pub meal_service: Arc<MealService>,
    pub medication_service: Arc<MedicationService>,
    pub symptom_service: Arc<SymptomService>,
    pub goal_service: Arc<GoalService>,
    pub doctor_note_service: Arc<DoctorNoteService>,
    pub achievement_service: Arc<AchievementService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub export_service: Arc<ExportService>,
    pub notification_service: Arc<NotificationService>,
    pub jwt_manager: Arc<JwtManager>,
    pub cookie_config: CookieConfig,
    pub config: Arc<AppConfig>,
}

/// Cookie設定
#[derive(Clone, Debug)]
pub struct CookieConfig {
    pub access_token_name: String,
    pub secure: bool,
    pub http_only: bool,
    pub path: String,
}

impl CookieConfig {
    pub fn from_app_config(app_config: &AppConfig) -> Self {
        Self {
            access_token_name: "access_token".to_string(),
            secure: app_config.security.cookie_secure,
            http_only: true,
            path: "/".to_string(),
        }
    }
}

impl AppState {
    /// 分析・エクスポートは sea-orm 実装のゲートウェイを使う
    pub fn with_config(
        db: DbPool,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
        email_service: Arc<EmailService>,
        app_config: &AppConfig,
    ) -> Self {
        let gateway: Arc<dyn HealthQueryGateway> =
            Arc::new(SeaOrmHealthQueryGateway::new(db.clone()));
        Self::with_gateway(
            db,
            gateway,
            password_manager,
            jwt_manager,
            email_service,
            app_config,
        )
    }

    pub fn with_gateway(
        db: DbPool,
        gateway: Arc<dyn HealthQueryGateway>,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
        email_service: Arc<EmailService>,
        app_config: &AppConfig,
    ) -> Self {
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let csv_renderer: Arc<dyn ReportRenderer> = Arc::new(CsvRenderer::new());
        let pdf_renderer: Arc<dyn ReportRenderer> = Arc::new(PdfRenderer::new());

        Self {
            auth_service: Arc::new(AuthService::new(
                user_repo.clone(),
                password_manager,
                jwt_manager.clone(),
                email_service.clone(),
            )),
            user_service: Arc::new(UserService::new(user_repo.clone())),
            health_entry_service: Arc::new(HealthEntryService::new(db.clone())),
            meal_service: Arc::new(MealService::new(db.clone())),
            medication_service: Arc::new(MedicationService::new(db.clone())),
            symptom_service: Arc::new(SymptomService::new(db.clone())),
            goal_service: Arc::new(GoalService::new(db.clone())),
            doctor_note_service: Arc::new(DoctorNoteService::new(db.clone())),
            achievement_service: Arc::new(AchievementService::new(db)),
            analytics_service: Arc::new(AnalyticsService::new(gateway.clone())),
            export_service: Arc::new(ExportService::new(
                gateway.clone(),
                csv_renderer,
                pdf_renderer,
            )),
            notification_service: Arc::new(NotificationService::new(
                user_repo,
                gateway,
                email_service,
            )),
            jwt_manager,
            cookie_config: CookieConfig::from_app_config(app_config),
            config: Arc::new(app_config.clone()),
        }
    }
}

/// JWT マネージャーを提供するトレイト
pub trait HasJwtManager {
    fn jwt_manager(&self) -> &Arc<JwtManager>;
    fn cookie_config(&self) -> &CookieConfig;
}

impl HasJwtManager for AppState {
    fn jwt_manager(&self) -> &Arc<JwtManager> {
        &self.jwt_manager
    }

    fn cookie_config(&self) -> &CookieConfig {
        &self.cookie_config
    }
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}

/// アプリ全体のルーター
pub fn build_router(app_state: AppState) -> Router {
    use handlers::*;

    let api_router = Router::new()
        .merge(user_handler::user_router(app_state.clone()))
        .merge(health_handler::health_router(app_state.clone()))
        .merge(meal_handler::meal_router(app_state.clone()))
        .merge(medication_handler::medication_router(app_state.clone()))
        .merge(symptom_handler::symptom_router(app_state.clone()))
        .merge(goal_handler::goal_router(app_state.clone()))
        .merge(doctor_note_handler::doctor_note_router(app_state.clone()))
        .merge(achievement_handler::achievement_router(app_state.clone()))
        .merge(analytics_handler::analytics_router(app_state.clone()))
        .merge(export_handler::export_router(app_state.clone()))
        .merge(notification_handler::notification_router(app_state.clone()));

    Router::new()
        .merge(system_handler::system_router())
        .nest("/api", api_router)
        .fallback(route_not_found)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&app_state.config))
}
