// src/bin/seed_demo_data.rs
//
// デモユーザーと直近30日分のバイタル記録を投入する。
// 既に存在するメールアドレスはスキップする。

use chrono::{Duration, Utc};
use rand::Rng;
use vitaltrack_backend::api::dto::health_dto::HealthEntryRequest;
use vitaltrack_backend::config::AppConfig;
use vitaltrack_backend::db::{create_db_pool, run_migrations};
use vitaltrack_backend::logging::init_tracing;
use vitaltrack_backend::repository::health_entry_repository::HealthEntryRepository;
use vitaltrack_backend::repository::user_repository::{CreateUser, UserRepository};
use vitaltrack_backend::utils::password::PasswordManager;

const DEMO_PASSWORD: &str = "password123";
const DEMO_DAYS: i64 = 30;

const DEMO_USERS: [(&str, &str); 6] = [
    ("Kwame Asante", "kwame@example.com"),
    ("Ama Boateng", "ama@example.com"),
    ("Kofi Mensah", "kofi@example.com"),
    ("Abena Osei", "abena@example.com"),
    ("Yaw Adjei", "yaw@example.com"),
    ("Nana Owusu", "nana@example.com"),
];

const NOTES: [&str; 5] = [
    "Feeling energetic today",
    "Had a good workout",
    "Slept well",
    "Busy day at work",
    "Relaxing evening",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let app_config = AppConfig::from_env()?;
    let db = create_db_pool(&app_config).await?;
    run_migrations(&db).await?;

    let users = UserRepository::new(db.clone());
    let entries = HealthEntryRepository::new(db);
    let password_manager = PasswordManager::from_env()?;
    let password_hash = password_manager.hash_password(DEMO_PASSWORD)?;

    let mut rng = rand::thread_rng();

    for (name, email) in DEMO_USERS {
        if users.email_exists(email).await? {
            tracing::info!(email = %email, "Demo user already exists, skipping");
            continue;
        }

        let base_weight = f64::from(rng.gen_range(50..=100_i32));
        let user = users
            .create(CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.clone(),
                age: Some(rng.gen_range(20..=65)),
                height: Some(f64::from(rng.gen_range(150..=200_i32))),
                weight: Some(base_weight),
                gender: Some(if rng.gen_bool(0.5) { "male" } else { "female" }.to_string()),
                health_goals: Vec::new(),
            })
            .await?;

        for days_ago in (0..DEMO_DAYS).rev() {
            let weight = base_weight + rng.gen_range(-2.5..2.5);
            let request = HealthEntryRequest {
                date: Some(Utc::now() - Duration::days(days_ago)),
                heart_rate: Some(f64::from(rng.gen_range(60..=100_i32))),
                blood_pressure_sys: Some(f64::from(rng.gen_range(90..=140_i32))),
                blood_pressure_dia: Some(f64::from(rng.gen_range(60..=90_i32))),
                weight: Some((weight * 10.0).round() / 10.0),
                sleep: Some(f64::from(rng.gen_range(5..=9_i32))),
                steps: Some(f64::from(rng.gen_range(3000..=15000_i32))),
                water: Some(f64::from(rng.gen_range(1..=10_i32))),
                mood: Some(f64::from(rng.gen_range(5..=10_i32))),
                notes: Some(NOTES[rng.gen_range(0..NOTES.len())].to_string()),
            };
            entries.create_for_user(user.id, request).await?;
        }

        tracing::info!(email = %email, entries = DEMO_DAYS, "Demo user seeded");
    }

    tracing::info!("Demo data seeded successfully");
    Ok(())
}
