//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User display preferences

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
