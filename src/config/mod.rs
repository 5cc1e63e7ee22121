//! Configuration module - Browser shell settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.browser-shell/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, LayoutConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::DEFAULT_URL;

pub use types::{Config, LayoutConfig};

pub use loader::{default_config_path, load_config, load_config_from};

// Additional exports for tests
#[cfg(test)]
pub use defaults::{
    DEFAULT_EDGE_MARGIN, DEFAULT_MAX_ASPECT_RATIO, DEFAULT_MIN_WINDOW_HEIGHT,
    DEFAULT_MIN_WINDOW_WIDTH, DEFAULT_RESERVE_HEIGHT, DEFAULT_RESERVE_WIDTH,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
