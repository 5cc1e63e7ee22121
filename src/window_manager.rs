//! Window Manager Module
//!
//! Owns the lifecycle of every browser window: creation, cascading placement,
//! the registry of open windows, "Untitled N" labels and the decision to end
//! the program once the last window is gone.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Window Manager Architecture                      │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ┌──────────────┐     ┌───────────────────────────────────────┐     │
//! │  │ WindowHost   │     │       WindowManager<Handle>           │     │
//! │  │ (gpui shell, │     │                                       │     │
//! │  │  test fake)  │     │  windows: Vec<OpenWindow<Handle>>     │     │
//! │  │              │◀────│  geometry: WindowGeometry             │     │
//! │  │ create/show  │     │  cursor: CascadeCursor                │     │
//! │  │ set_bounds   │     │  untitled_count: u32                  │     │
//! │  │              │     │                                       │     │
//! │  │ closed(id) ──┼────▶│  window_closed(id) -> CloseOutcome    │     │
//! │  └──────────────┘     └───────────────────────────────────────┘     │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Threading
//!
//! Everything runs on the UI thread. The manager is an owned value (the gpui
//! shell keeps it in a `Global`), never a static, and needs no locking.
//!
//! # Close notifications
//!
//! Each window gets a [`WindowId`] that is never reused. The host reports a
//! closed window by calling [`WindowManager::window_closed`] with that id.
//! Only the first report for an id removes it; repeats are answered with
//! [`CloseOutcome::Unknown`] so a duplicate notification can neither shrink
//! the registry twice nor end the program twice.

use std::fmt;

use crate::config::LayoutConfig;
use crate::geometry::{CascadeCursor, Location, ScreenBounds, WindowGeometry, WindowSize};
use crate::logging;

// ============================================================================
// Types
// ============================================================================

/// Identifies one browser window for its whole life. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Platform side of window management.
///
/// The manager decides *what* happens; the host performs it on real windows.
/// Methods are called in the order the manager documents for `open_window`.
pub trait WindowHost {
    /// Per-window handle stored in the registry.
    type Handle;

    /// Usable area of the primary display. Queried once, by `initialize`.
    fn usable_screen_bounds(&mut self) -> ScreenBounds;

    /// Build (but do not show) a window that will load `address` if given.
    fn create_window(&mut self, id: WindowId, address: Option<&str>) -> Self::Handle;

    fn set_title(&mut self, handle: &mut Self::Handle, title: &str);

    fn set_bounds(&mut self, handle: &mut Self::Handle, location: Location, size: WindowSize);

    fn show(&mut self, handle: &mut Self::Handle);
}

/// A registry entry: one live window.
#[derive(Debug)]
pub struct OpenWindow<T> {
    pub id: WindowId,
    pub title: String,
    pub address: Option<String>,
    pub location: Location,
    pub handle: T,
}

/// Result of reporting a closed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Removed; this many windows are still open.
    Remaining(usize),
    /// Removed the last window. The application should terminate.
    LastWindowClosed,
    /// Not in the registry (already closed, or never opened here).
    Unknown,
}

impl CloseOutcome {
    pub fn should_terminate(&self) -> bool {
        matches!(self, CloseOutcome::LastWindowClosed)
    }
}

/// One row of a "Window" menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMenuEntry {
    pub id: WindowId,
    pub title: String,
    pub is_current: bool,
}

// ============================================================================
// WindowManager
// ============================================================================

/// Generic over the host's window handle so the manager itself carries no
/// borrowed platform context and can live in a gpui `Global`.
pub struct WindowManager<T> {
    windows: Vec<OpenWindow<T>>,
    geometry: WindowGeometry,
    layout: LayoutConfig,
    cursor: CascadeCursor,
    untitled_count: u32,
    next_id: u64,
}

impl<T> WindowManager<T> {
    /// Start the shell: query the screen, derive window geometry and open the
    /// first window at `default_url`.
    pub fn initialize<H: WindowHost<Handle = T>>(
        host: &mut H,
        layout: LayoutConfig,
        default_url: &str,
    ) -> Self {
        let mut manager = Self::without_windows(host.usable_screen_bounds(), layout);
        logging::log(
            "WINDOW_MGR",
            &format!(
                "Screen {:?}, window size {:.0}x{:.0}, first window at ({:.0}, {:.0})",
                manager.geometry.screen,
                manager.geometry.window_size.width,
                manager.geometry.window_size.height,
                manager.geometry.origin.x,
                manager.geometry.origin.y
            ),
        );
        manager.open_window(host, Some(default_url.to_string()));
        manager
    }

    /// Manager with geometry computed but no windows open yet.
    pub fn without_windows(screen: ScreenBounds, layout: LayoutConfig) -> Self {
        let geometry = WindowGeometry::from_screen(screen, &layout);
        Self {
            windows: Vec::new(),
            cursor: CascadeCursor::new(geometry.origin),
            geometry,
            layout,
            untitled_count: 0,
            next_id: 1,
        }
    }

    /// Open a new window. `None` (or a blank address) opens an untitled window.
    ///
    /// The window is registered, titled if untitled, placed at the cascade
    /// cursor with the shared window size, shown, and then the cursor advances.
    pub fn open_window<H: WindowHost<Handle = T>>(
        &mut self,
        host: &mut H,
        address: Option<String>,
    ) -> WindowId {
        let address = address.filter(|a| !a.trim().is_empty());
        let id = WindowId(self.next_id);
        self.next_id += 1;

        let handle = host.create_window(id, address.as_deref());
        let location = self.cursor.next_location();
        let title = match &address {
            Some(address) => address.clone(),
            None => format!("Untitled {}", self.next_untitled_count()),
        };

        self.windows.push(OpenWindow {
            id,
            title,
            address,
            location,
            handle,
        });

        let size = self.geometry.window_size;
        if let Some(window) = self.windows.last_mut() {
            if window.address.is_none() {
                host.set_title(&mut window.handle, &window.title);
            }
            host.set_bounds(&mut window.handle, location, size);
            host.show(&mut window.handle);
        }

        self.cursor.advance(&self.geometry, &self.layout);

        tracing::info!(
            category = "WINDOW_MGR",
            window_id = id.as_u64(),
            x = location.x,
            y = location.y,
            open_windows = self.windows.len(),
            "Window opened"
        );
        id
    }

    /// Hand out the next "Untitled N" number, starting at 1.
    pub fn next_untitled_count(&mut self) -> u32 {
        self.untitled_count += 1;
        self.untitled_count
    }

    pub fn untitled_count(&self) -> u32 {
        self.untitled_count
    }

    /// Live registry, in creation order.
    pub fn open_windows(&self) -> &[OpenWindow<T>] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&OpenWindow<T>> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Entries for a "Window" menu, marking `current`.
    pub fn menu_entries(&self, current: Option<WindowId>) -> Vec<WindowMenuEntry> {
        self.windows
            .iter()
            .map(|w| WindowMenuEntry {
                id: w.id,
                title: w.title.clone(),
                is_current: Some(w.id) == current,
            })
            .collect()
    }

    /// Close notification from the host.
    pub fn window_closed(&mut self, id: WindowId) -> CloseOutcome {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            logging::log_debug(
                "WINDOW_MGR",
                &format!("Ignoring close for {} (not open)", id),
            );
            return CloseOutcome::Unknown;
        };

        self.windows.remove(index);
        logging::log(
            "WINDOW_MGR",
            &format!("Number of open windows is {}", self.windows.len()),
        );

        if self.windows.is_empty() {
            logging::log(
                "WINDOW_MGR",
                "Program will end because all windows have been closed",
            );
            CloseOutcome::LastWindowClosed
        } else {
            CloseOutcome::Remaining(self.windows.len())
        }
    }

    pub fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    pub fn window_size(&self) -> WindowSize {
        self.geometry.window_size
    }

    /// Where the next window will be placed.
    pub fn next_location(&self) -> Location {
        self.cursor.next_location()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
