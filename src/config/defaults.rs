//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Address loaded by the first window at startup
pub const DEFAULT_URL: &str = "https://www.core2web.in/privacypolicy.html";

/// Inset of the first window from the top-left of the usable screen area
pub const DEFAULT_ORIGIN_INSET_X: f64 = 30.0;
pub const DEFAULT_ORIGIN_INSET_Y: f64 = 20.0;

/// Offset between consecutive cascaded windows
pub const DEFAULT_STEP_X: f64 = 30.0;
pub const DEFAULT_STEP_Y: f64 = 20.0;

/// Screen space left free so several windows can be stacked
pub const DEFAULT_RESERVE_WIDTH: f64 = 130.0;
pub const DEFAULT_RESERVE_HEIGHT: f64 = 160.0;

/// Width is at most this many times the height
pub const DEFAULT_MAX_ASPECT_RATIO: f64 = 1.6;

/// Gap kept between a window and the right/bottom screen edge
pub const DEFAULT_EDGE_MARGIN: f64 = 10.0;

/// Floor for window size on tiny or bogus screens
pub const DEFAULT_MIN_WINDOW_WIDTH: f64 = 320.0;
pub const DEFAULT_MIN_WINDOW_HEIGHT: f64 = 200.0;
