//! Screen geometry query.
//!
//! Returns the usable area of the primary display (the part not covered by the
//! menu bar, dock or taskbar) in top-left canonical coordinates.
//!
//! # macOS
//!
//! AppKit reports `visibleFrame` with a bottom-left origin, so the rectangle is
//! flipped against the primary screen's full height.
//!
//! # Other Platforms
//!
//! Uses gpui's primary display. If no display is reported, a 1920x1080 screen
//! is assumed.

use gpui::App;

use crate::geometry::ScreenBounds;
use crate::logging;

#[cfg(target_os = "macos")]
use cocoa::base::{id, nil};
#[cfg(target_os = "macos")]
use cocoa::foundation::NSRect;
#[cfg(target_os = "macos")]
use objc::{class, msg_send, sel, sel_impl};

/// Used when the platform reports no display at all.
pub const FALLBACK_SCREEN: ScreenBounds = ScreenBounds {
    min_x: 0.0,
    min_y: 0.0,
    width: 1920.0,
    height: 1080.0,
};

/// Assert that the current thread is the main thread.
///
/// AppKit APIs (NSScreen etc.) MUST be called from the main thread.
#[cfg(target_os = "macos")]
fn debug_assert_main_thread() {
    unsafe {
        let is_main: bool = msg_send![class!(NSThread), isMainThread];
        debug_assert!(is_main, "AppKit calls must run on the main thread");
    }
}

/// Convert a bottom-left-origin rectangle to top-left canonical space.
pub fn flip_to_top_left(
    x: f64,
    bottom_y: f64,
    width: f64,
    height: f64,
    primary_height: f64,
) -> ScreenBounds {
    ScreenBounds::new(x, primary_height - (bottom_y + height), width, height)
}

/// Usable area of the primary display.
#[cfg(target_os = "macos")]
pub fn primary_usable_bounds(cx: &App) -> ScreenBounds {
    debug_assert_main_thread();
    unsafe {
        let main_screen: id = msg_send![class!(NSScreen), mainScreen];
        if main_screen == nil {
            logging::log(
                "PLATFORM",
                "WARNING: mainScreen returned nil, falling back to gpui display",
            );
            return gpui_usable_bounds(cx);
        }
        let frame: NSRect = msg_send![main_screen, frame];
        let visible: NSRect = msg_send![main_screen, visibleFrame];
        flip_to_top_left(
            visible.origin.x,
            visible.origin.y,
            visible.size.width,
            visible.size.height,
            frame.size.height,
        )
    }
}

/// Usable area of the primary display.
#[cfg(not(target_os = "macos"))]
pub fn primary_usable_bounds(cx: &App) -> ScreenBounds {
    gpui_usable_bounds(cx)
}

fn gpui_usable_bounds(cx: &App) -> ScreenBounds {
    match cx.primary_display() {
        Some(display) => {
            let b = display.visible_bounds();
            ScreenBounds::new(
                f64::from(b.origin.x),
                f64::from(b.origin.y),
                f64::from(b.size.width),
                f64::from(b.size.height),
            )
        }
        None => {
            logging::log(
                "PLATFORM",
                "WARNING: no primary display reported, assuming 1920x1080",
            );
            FALLBACK_SCREEN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_menu_bar_screen() {
        // 1440x900 screen, 25pt menu bar on top, 70pt dock at the bottom
        let bounds = flip_to_top_left(0.0, 70.0, 1440.0, 805.0, 900.0);
        assert_eq!(bounds, ScreenBounds::new(0.0, 25.0, 1440.0, 805.0));
        assert_eq!(bounds.max_y(), 830.0);
    }

    #[test]
    fn test_flip_secondary_display_above_primary() {
        let bounds = flip_to_top_left(200.0, 900.0, 1920.0, 1080.0, 900.0);
        assert_eq!(bounds.min_y, -1080.0);
        assert_eq!(bounds.min_x, 200.0);
    }

    #[test]
    fn test_fallback_screen_is_usable() {
        assert!(!FALLBACK_SCREEN.is_degenerate());
        assert_eq!(FALLBACK_SCREEN.max_x(), 1920.0);
    }
}
