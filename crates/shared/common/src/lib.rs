//! Common utilities shared by the user directory crates.
//!
//! This crate provides:
//! - Environment-backed configuration
//! - Tracing subscriber setup

pub mod config;
pub mod telemetry;

pub use config::DirectoryConfig;
pub use telemetry::init_tracing;
