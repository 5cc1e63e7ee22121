//! Browser Shell - a minimal multi-window web browser shell on GPUI
//!
//! The library holds everything except process startup: the framework-free
//! window manager and placement geometry, plus the gpui collaborator that
//! turns the manager's decisions into native windows.

pub mod browser_window;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod platform;
pub mod window_manager;
