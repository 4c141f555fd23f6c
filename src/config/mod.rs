//! Configuration module for peso-inflation
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::InflationPaths;
pub use settings::Settings;
