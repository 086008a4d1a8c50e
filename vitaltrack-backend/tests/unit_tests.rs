// tests/unit_tests.rs
mod common;
mod unit;
