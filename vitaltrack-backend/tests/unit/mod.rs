// tests/unit/mod.rs
pub mod analytics_service_tests;
pub mod export_service_tests;
