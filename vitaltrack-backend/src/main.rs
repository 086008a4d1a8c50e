// src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use vitaltrack_backend::api::{build_router, AppState};
use vitaltrack_backend::config::AppConfig;
use vitaltrack_backend::db::{create_db_pool, run_migrations};
use vitaltrack_backend::logging::init_tracing;
use vitaltrack_backend::utils::{email::EmailService, jwt::JwtManager, password::PasswordManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting VitalTrack backend server...");

    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        server_addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    run_migrations(&db_pool).await?;
    tracing::info!("Database migrations applied.");

    let password_manager = Arc::new(PasswordManager::from_env()?);
    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone())?);
    let email_service = Arc::new(EmailService::new(app_config.email.clone())?);

    let app_state = AppState::with_config(
        db_pool,
        password_manager,
        jwt_manager,
        email_service,
        &app_config,
    );
    let app_router = build_router(app_state);

    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!("Server listening on {}", app_config.server_addr());
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
