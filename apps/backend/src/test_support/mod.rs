//! Helpers for building the application in tests.

pub mod app_builder;

pub use app_builder::{create_test_app_builder, TestAppBuilder};
