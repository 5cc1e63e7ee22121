//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;

// ============================================
// LAYOUT
// ============================================

/// Window sizing and cascading parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default = "default_origin_inset_x")]
    pub origin_inset_x: f64,
    #[serde(default = "default_origin_inset_y")]
    pub origin_inset_y: f64,
    #[serde(default = "default_step_x")]
    pub step_x: f64,
    #[serde(default = "default_step_y")]
    pub step_y: f64,
    #[serde(default = "default_reserve_width")]
    pub reserve_width: f64,
    #[serde(default = "default_reserve_height")]
    pub reserve_height: f64,
    #[serde(default = "default_max_aspect_ratio")]
    pub max_aspect_ratio: f64,
    #[serde(default = "default_edge_margin")]
    pub edge_margin: f64,
    #[serde(default = "default_min_window_width")]
    pub min_window_width: f64,
    #[serde(default = "default_min_window_height")]
    pub min_window_height: f64,
}

fn default_origin_inset_x() -> f64 {
    DEFAULT_ORIGIN_INSET_X
}
fn default_origin_inset_y() -> f64 {
    DEFAULT_ORIGIN_INSET_Y
}
fn default_step_x() -> f64 {
    DEFAULT_STEP_X
}
fn default_step_y() -> f64 {
    DEFAULT_STEP_Y
}
fn default_reserve_width() -> f64 {
    DEFAULT_RESERVE_WIDTH
}
fn default_reserve_height() -> f64 {
    DEFAULT_RESERVE_HEIGHT
}
fn default_max_aspect_ratio() -> f64 {
    DEFAULT_MAX_ASPECT_RATIO
}
fn default_edge_margin() -> f64 {
    DEFAULT_EDGE_MARGIN
}
fn default_min_window_width() -> f64 {
    DEFAULT_MIN_WINDOW_WIDTH
}
fn default_min_window_height() -> f64 {
    DEFAULT_MIN_WINDOW_HEIGHT
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            origin_inset_x: DEFAULT_ORIGIN_INSET_X,
            origin_inset_y: DEFAULT_ORIGIN_INSET_Y,
            step_x: DEFAULT_STEP_X,
            step_y: DEFAULT_STEP_Y,
            reserve_width: DEFAULT_RESERVE_WIDTH,
            reserve_height: DEFAULT_RESERVE_HEIGHT,
            max_aspect_ratio: DEFAULT_MAX_ASPECT_RATIO,
            edge_margin: DEFAULT_EDGE_MARGIN,
            min_window_width: DEFAULT_MIN_WINDOW_WIDTH,
            min_window_height: DEFAULT_MIN_WINDOW_HEIGHT,
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Address opened by the first window (default: core2web privacy policy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,
    /// Window sizing and cascading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_url: None, // Will use DEFAULT_URL via getter
            layout: None,      // Will use LayoutConfig::default() via getter
        }
    }
}

impl Config {
    /// Address for the startup window, ignoring blank overrides.
    pub fn get_default_url(&self) -> String {
        self.default_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_URL)
            .to_string()
    }

    pub fn get_layout(&self) -> LayoutConfig {
        self.layout.clone().unwrap_or_default()
    }
}
