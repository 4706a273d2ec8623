//! Configuration module for money-manager
//!
//! This module provides configuration management including:
//! - platform-aware path resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::ManagerPaths;
pub use settings::Settings;
