//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, BotConfig, DispatcherConfig, LoggingConfig)
//! - [`limits`]: Line framing limits (LimitsConfig)
//! - [`validation`]: Startup checks over a loaded config

mod limits;
mod types;
pub mod validation;

pub use types::{Config, LogFormat, LoggingConfig};
