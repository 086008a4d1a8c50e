// tests/integration/mod.rs
pub mod analytics_tests;
pub mod auth_tests;
pub mod export_tests;
pub mod health_entry_tests;
pub mod notification_tests;
pub mod resource_tests;
pub mod system_tests;
