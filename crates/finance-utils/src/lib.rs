//! Shared utilities for the finance news bot
//!
//! This crate provides the process-level plumbing shared by the workspace:
//! logging setup and the environment-driven application configuration.

pub mod config;
pub mod logging;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use logging::init_tracing_with;
