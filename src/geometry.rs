//! Window Placement Geometry
//!
//! Pure arithmetic for sizing and cascading browser windows on the usable area
//! of the primary screen. Nothing here touches gpui or the platform, so every
//! rule is unit-testable.
//!
//! # Coordinate space
//!
//! Global top-left origin, y increases downward (same as gpui `Bounds`).
//!
//! # Cascade
//!
//! Each new window is placed at the cursor, then the cursor moves by one step
//! diagonally. If the *next* window would cross the right edge (plus a margin),
//! only the x coordinate is reset; the bottom edge resets only y. The two axes
//! wrap independently.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

// ============================================================================
// Types
// ============================================================================

/// Usable rectangle of a display, in top-left canonical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenBounds {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// True when either dimension is zero, negative or not a number.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }

    /// Replace non-finite components with zero.
    fn sanitized(self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            min_x: finite(self.min_x),
            min_y: finite(self.min_y),
            width: finite(self.width),
            height: finite(self.height),
        }
    }
}

/// Top-left corner of a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Screen-derived geometry
// ============================================================================

/// Geometry fixed at startup: the screen, the shared window size and where the
/// first window goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub screen: ScreenBounds,
    pub window_size: WindowSize,
    pub origin: Location,
}

impl WindowGeometry {
    /// Compute window size and the initial cursor from the usable screen area.
    ///
    /// Height is the screen height minus `reserve_height`, width the screen width
    /// minus `reserve_width`, then width is capped at `max_aspect_ratio * height`.
    /// Sizes below the configured minimum are raised to it, but the aspect cap
    /// always wins: a minimum width wider than `max_aspect_ratio * height` is
    /// cut back to the cap.
    ///
    /// The origin is the screen corner moved in by the configured inset. An
    /// inset that does not fit inside the screen is dropped for that axis, so
    /// the first window always starts within the screen.
    pub fn from_screen(screen: ScreenBounds, layout: &LayoutConfig) -> Self {
        let degenerate = screen.is_degenerate();
        let screen = screen.sanitized();

        let height = screen.height - layout.reserve_height;
        let mut width = screen.width - layout.reserve_width;
        if width > height * layout.max_aspect_ratio {
            width = height * layout.max_aspect_ratio;
        }

        let clamped_height = height.max(layout.min_window_height);
        let clamped_width = width
            .max(layout.min_window_width)
            .min(clamped_height * layout.max_aspect_ratio);
        let window_size = WindowSize::new(clamped_width, clamped_height);

        if degenerate || window_size.width != width || window_size.height != height {
            tracing::warn!(
                screen_width = screen.width,
                screen_height = screen.height,
                computed_width = width,
                computed_height = height,
                width = window_size.width,
                height = window_size.height,
                "Screen too small for cascading windows, clamped to minimum window size"
            );
        }

        Self {
            screen,
            window_size,
            origin: Location::new(
                screen.min_x + inset_within(layout.origin_inset_x, screen.width),
                screen.min_y + inset_within(layout.origin_inset_y, screen.height),
            ),
        }
    }
}

fn inset_within(inset: f64, extent: f64) -> f64 {
    if inset < extent {
        inset
    } else {
        0.0
    }
}

// ============================================================================
// Cascade cursor
// ============================================================================

/// Where the next window opens. Advanced after every placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeCursor {
    next: Location,
}

impl CascadeCursor {
    pub fn new(origin: Location) -> Self {
        Self { next: origin }
    }

    pub fn next_location(&self) -> Location {
        self.next
    }

    /// Step diagonally, then wrap each axis that would push the following
    /// window past the screen edge back to the first window's position.
    pub fn advance(&mut self, geometry: &WindowGeometry, layout: &LayoutConfig) {
        self.next.x += layout.step_x;
        self.next.y += layout.step_y;

        let screen = &geometry.screen;
        let size = &geometry.window_size;

        if self.next.x + size.width + layout.edge_margin > screen.max_x() {
            self.next.x = geometry.origin.x;
        }
        if self.next.y + size.height + layout.edge_margin > screen.max_y() {
            self.next.y = geometry.origin.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd_ish() -> ScreenBounds {
        ScreenBounds::new(0.0, 0.0, 1600.0, 900.0)
    }

    #[test]
    fn test_window_size_capped_by_aspect_ratio() {
        let layout = LayoutConfig::default();
        let geometry = WindowGeometry::from_screen(full_hd_ish(), &layout);

        assert_eq!(geometry.window_size.height, 740.0);
        // raw width 1470 exceeds 740 * 1.6
        assert!((geometry.window_size.width - 1184.0).abs() < 1e-9);
        assert_eq!(geometry.origin, Location::new(30.0, 20.0));
    }

    #[test]
    fn test_narrow_screen_keeps_raw_width() {
        let layout = LayoutConfig::default();
        let geometry =
            WindowGeometry::from_screen(ScreenBounds::new(0.0, 0.0, 1000.0, 1200.0), &layout);

        assert_eq!(geometry.window_size.width, 870.0);
        assert_eq!(geometry.window_size.height, 1040.0);
        assert!(geometry.window_size.width <= geometry.window_size.height * 1.6);
    }

    #[test]
    fn test_origin_follows_screen_offset() {
        let layout = LayoutConfig::default();
        let geometry =
            WindowGeometry::from_screen(ScreenBounds::new(1920.0, 25.0, 1600.0, 900.0), &layout);
        assert_eq!(geometry.origin, Location::new(1950.0, 45.0));
    }

    #[test]
    fn test_degenerate_screen_clamps_to_minimum() {
        let layout = LayoutConfig::default();
        let geometry =
            WindowGeometry::from_screen(ScreenBounds::new(0.0, 0.0, 0.0, -50.0), &layout);

        assert_eq!(geometry.window_size.width, layout.min_window_width);
        assert_eq!(geometry.window_size.height, layout.min_window_height);
    }

    #[test]
    fn test_nan_screen_is_treated_as_empty() {
        let layout = LayoutConfig::default();
        let screen = ScreenBounds::new(f64::NAN, 0.0, f64::INFINITY, 900.0);
        assert!(screen.is_degenerate());

        let geometry = WindowGeometry::from_screen(screen, &layout);
        assert!(geometry.window_size.width.is_finite());
        assert!(geometry.origin.x.is_finite());
        assert_eq!(geometry.screen.min_x, 0.0);
    }

    #[test]
    fn test_cascade_steps_diagonally() {
        let layout = LayoutConfig::default();
        let geometry = WindowGeometry::from_screen(full_hd_ish(), &layout);
        let mut cursor = CascadeCursor::new(geometry.origin);

        cursor.advance(&geometry, &layout);
        assert_eq!(cursor.next_location(), Location::new(60.0, 40.0));
        cursor.advance(&geometry, &layout);
        assert_eq!(cursor.next_location(), Location::new(90.0, 60.0));
    }

    #[test]
    fn test_cascade_y_wraps_before_x() {
        // y threshold: 900 - 740 - 10 = 150, x threshold: 1600 - 1184 - 10 = 406
        let layout = LayoutConfig::default();
        let geometry = WindowGeometry::from_screen(full_hd_ish(), &layout);
        let mut cursor = CascadeCursor::new(geometry.origin);

        let mut seen = vec![cursor.next_location()];
        for _ in 0..8 {
            cursor.advance(&geometry, &layout);
            seen.push(cursor.next_location());
        }

        // y: 20,40,...,140 then 160 > 150 wraps to 20; x keeps stepping
        assert_eq!(seen[6], Location::new(210.0, 140.0));
        assert_eq!(seen[7], Location::new(240.0, 20.0));
        assert_eq!(seen[8], Location::new(270.0, 40.0));
    }

    #[test]
    fn test_cascade_x_wraps_independently() {
        let layout = LayoutConfig::default();
        let geometry = WindowGeometry::from_screen(full_hd_ish(), &layout);
        let mut cursor = CascadeCursor::new(geometry.origin);

        let mut xs = Vec::new();
        for _ in 0..16 {
            cursor.advance(&geometry, &layout);
            xs.push(cursor.next_location().x);
            assert!(cursor.next_location().x <= 406.0);
            assert!(cursor.next_location().y <= 150.0);
        }

        // 30 + 13*30 = 420 > 406 so the 13th advance resets x
        assert_eq!(xs[11], 390.0);
        assert_eq!(xs[12], 30.0);
        assert_eq!(xs[13], 60.0);
    }

    #[test]
    fn test_cascade_on_tiny_screen_stays_at_origin() {
        let layout = LayoutConfig::default();
        let geometry =
            WindowGeometry::from_screen(ScreenBounds::new(0.0, 0.0, 100.0, 100.0), &layout);
        let mut cursor = CascadeCursor::new(geometry.origin);

        cursor.advance(&geometry, &layout);
        assert_eq!(cursor.next_location(), geometry.origin);
    }

    #[test]
    fn test_minimum_size_never_breaks_aspect_cap() {
        let layout = LayoutConfig {
            max_aspect_ratio: 1.2,
            ..LayoutConfig::default()
        };
        let geometry =
            WindowGeometry::from_screen(ScreenBounds::new(0.0, 0.0, 400.0, 300.0), &layout);

        // height 140 is raised to 200; width 320 minimum is cut back to 1.2 * 200
        assert_eq!(geometry.window_size.height, 200.0);
        assert_eq!(geometry.window_size.width, 240.0);
        assert!(geometry.window_size.width <= geometry.window_size.height * layout.max_aspect_ratio);
    }

    #[test]
    fn test_wide_minimum_width_is_capped() {
        let layout = LayoutConfig {
            min_window_width: 800.0,
            ..LayoutConfig::default()
        };
        let geometry =
            WindowGeometry::from_screen(ScreenBounds::new(0.0, 0.0, 700.0, 400.0), &layout);

        assert_eq!(geometry.window_size.height, 240.0);
        assert!((geometry.window_size.width - 384.0).abs() < 1e-9);
    }

    #[test]
    fn test_origin_stays_inside_screen_smaller_than_inset() {
        let layout = LayoutConfig::default();
        let screen = ScreenBounds::new(100.0, 50.0, 25.0, 10.0);
        let geometry = WindowGeometry::from_screen(screen, &layout);

        assert_eq!(geometry.origin, Location::new(100.0, 50.0));
        assert!(geometry.origin.x >= screen.min_x && geometry.origin.x <= screen.max_x());
        assert!(geometry.origin.y >= screen.min_y && geometry.origin.y <= screen.max_y());

        let mut cursor = CascadeCursor::new(geometry.origin);
        for _ in 0..5 {
            cursor.advance(&geometry, &layout);
            assert_eq!(cursor.next_location(), geometry.origin);
        }
    }

    #[test]
    fn test_inset_dropped_per_axis() {
        let layout = LayoutConfig::default();
        // wide enough for the 30 x inset, too short for the 20 y inset
        let geometry =
            WindowGeometry::from_screen(ScreenBounds::new(0.0, 0.0, 200.0, 15.0), &layout);
        assert_eq!(geometry.origin, Location::new(30.0, 0.0));
    }
}
