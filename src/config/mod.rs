//! Configuration module for the budget advisor
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AdvisorPaths;
pub use settings::Settings;
