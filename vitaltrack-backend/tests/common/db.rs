// tests/common/db.rs
//! インメモリ SQLite の TestDatabase

use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    pub async fn new() -> Self {
        // sqlite::memory: は接続ごとに別DBになるため 1 接続に固定
        let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(opt).await.unwrap();
        Migrator::up(&connection, None).await.unwrap();

        Self { connection }
    }
}
