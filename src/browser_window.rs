//! Browser Window
//!
//! The gpui side of the shell: one `BrowserWindow` view per native window, the
//! `GpuiHost` that performs the manager's decisions on real windows, and the
//! `BrowserShell` global that owns the manager.
//!
//! Page rendering and navigation belong to the web engine and are not part of
//! this view; it shows the title, the address and the window controls.
//!
//! # Close notifications
//!
//! When a window's view is released (native close button, "Close Window", or
//! app shutdown) a `ShellEvent::WindowClosed` is sent on an async channel. The
//! task started in `main.rs` drains that channel on the foreground executor and
//! feeds each event to `BrowserShell::handle_event`, so closes are processed in
//! order on the UI thread.

use async_channel::Sender;
use gpui::{
    div, point, prelude::*, px, size, AnyWindowHandle, App, Bounds, Context, Global,
    IntoElement, ParentElement, Render, SharedString, Styled, Window, WindowBounds, WindowHandle,
    WindowOptions,
};
use gpui_component::{
    button::{Button, ButtonVariants},
    theme::ActiveTheme,
    Root, Sizable,
};
use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::error::{self, ResultExt, ShellError};
use crate::geometry::{Location, ScreenBounds, WindowSize};
use crate::logging;
use crate::platform;
use crate::window_manager::{CloseOutcome, WindowHost, WindowId, WindowManager, WindowMenuEntry};

// ============================================================================
// Events
// ============================================================================

/// Messages delivered to the shell on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    WindowClosed(WindowId),
}

// ============================================================================
// Host
// ============================================================================

/// Per-window handle kept in the manager's registry.
///
/// Title and bounds are collected until `show`, which opens the native window.
pub struct BrowserWindowHandle {
    id: WindowId,
    address: Option<String>,
    title: SharedString,
    bounds: Option<Bounds<gpui::Pixels>>,
    window: Option<WindowHandle<Root>>,
}

impl BrowserWindowHandle {
    pub fn window(&self) -> Option<WindowHandle<Root>> {
        self.window
    }
}

/// `WindowHost` backed by a live gpui `App`.
pub struct GpuiHost<'a> {
    cx: &'a mut App,
    events: Sender<ShellEvent>,
}

impl<'a> GpuiHost<'a> {
    pub fn new(cx: &'a mut App, events: Sender<ShellEvent>) -> Self {
        Self { cx, events }
    }
}

impl WindowHost for GpuiHost<'_> {
    type Handle = BrowserWindowHandle;

    fn usable_screen_bounds(&mut self) -> ScreenBounds {
        platform::primary_usable_bounds(self.cx)
    }

    fn create_window(&mut self, id: WindowId, address: Option<&str>) -> BrowserWindowHandle {
        BrowserWindowHandle {
            id,
            address: address.map(str::to_string),
            // Addressed windows are titled by their content until the page says otherwise
            title: address.unwrap_or_default().to_string().into(),
            bounds: None,
            window: None,
        }
    }

    fn set_title(&mut self, handle: &mut BrowserWindowHandle, title: &str) {
        handle.title = title.to_string().into();
        if let Some(window) = handle.window {
            let title = handle.title.clone();
            window
                .update(self.cx, |_, window, _| window.set_window_title(&title))
                .warn_on_err();
        }
    }

    fn set_bounds(
        &mut self,
        handle: &mut BrowserWindowHandle,
        location: Location,
        size: WindowSize,
    ) {
        handle.bounds = Some(Bounds {
            origin: point(px(location.x as f32), px(location.y as f32)),
            size: gpui::size(px(size.width as f32), px(size.height as f32)),
        });
    }

    fn show(&mut self, handle: &mut BrowserWindowHandle) {
        let id = handle.id;
        match open_native_window(self.cx, handle, self.events.clone()) {
            Ok(window) => handle.window = Some(window),
            Err(e) => {
                logging::log_error("WINDOW", &e.user_message(), Some(&id.to_string()));
                // Never shown, so never closed by the user: report it now so the
                // registry doesn't keep a window nobody can see.
                self.events
                    .try_send(ShellEvent::WindowClosed(id))
                    .log_err();
            }
        }
    }
}

fn open_native_window(
    cx: &mut App,
    handle: &BrowserWindowHandle,
    events: Sender<ShellEvent>,
) -> error::Result<WindowHandle<Root>> {
    let bounds = handle
        .bounds
        .unwrap_or_else(|| Bounds::centered(None, size(px(1024.), px(720.)), cx));

    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(gpui::TitlebarOptions {
            title: Some(handle.title.clone()),
            appears_transparent: false,
            traffic_light_position: None,
        }),
        focus: true,
        show: true,
        kind: gpui::WindowKind::Normal,
        ..Default::default()
    };

    let id = handle.id;
    let address = handle.address.clone();
    let title = handle.title.clone();

    let window = cx
        .open_window(window_options, move |window, cx| {
            let view = cx.new(|_| BrowserWindow::new(id, address, title));
            // Single-shot close listener: fires once when the view is dropped
            cx.observe_release(&view, move |_, _| {
                if events.try_send(ShellEvent::WindowClosed(id)).is_err() {
                    debug!(window_id = id.as_u64(), "Shell event channel closed");
                }
            })
            .detach();
            cx.new(|cx| Root::new(view, window, cx))
        })
        .map_err(|e| ShellError::Window(format!("failed to open {}: {}", id, e)))?;

    Ok(window)
}

// ============================================================================
// Shell (global)
// ============================================================================

/// Owns the window manager for the lifetime of the app.
pub struct BrowserShell {
    manager: WindowManager<BrowserWindowHandle>,
    events: Sender<ShellEvent>,
}

impl Global for BrowserShell {}

impl BrowserShell {
    /// Query the screen and open the first window at `default_url`.
    pub fn start(
        cx: &mut App,
        layout: LayoutConfig,
        default_url: &str,
        events: Sender<ShellEvent>,
    ) -> Self {
        let mut host = GpuiHost::new(cx, events.clone());
        let manager = WindowManager::initialize(&mut host, layout, default_url);
        Self { manager, events }
    }

    pub fn open_window(&mut self, address: Option<String>, cx: &mut App) -> WindowId {
        let mut host = GpuiHost::new(cx, self.events.clone());
        self.manager.open_window(&mut host, address)
    }

    pub fn manager(&self) -> &WindowManager<BrowserWindowHandle> {
        &self.manager
    }

    /// Native windows currently shown, in registry order.
    pub fn live_windows(&self) -> Vec<WindowHandle<Root>> {
        self.manager
            .open_windows()
            .iter()
            .filter_map(|w| w.handle.window())
            .collect()
    }

    /// Redraw every open window so its Window menu matches the registry.
    ///
    /// `skip` is the window currently being updated, which can't be re-entered
    /// and is notified by its own view instead.
    pub fn refresh_windows(skip: Option<AnyWindowHandle>, cx: &mut App) {
        let windows = cx
            .try_global::<BrowserShell>()
            .map(BrowserShell::live_windows)
            .unwrap_or_default();
        for window in windows {
            if Some(AnyWindowHandle::from(window)) == skip {
                continue;
            }
            window
                .update(cx, |_, window, _| window.refresh())
                .warn_on_err();
        }
    }

    /// Apply one event. Returns true when the application should quit.
    pub fn handle_event(&mut self, event: ShellEvent) -> bool {
        match event {
            ShellEvent::WindowClosed(id) => {
                let outcome = self.manager.window_closed(id);
                if outcome == CloseOutcome::Unknown {
                    debug!(window_id = id.as_u64(), "Duplicate close notification");
                }
                outcome.should_terminate()
            }
        }
    }

    /// Bring the window with `id` to the front, if it is still open.
    pub fn activate(id: WindowId, cx: &mut App) {
        let window = cx
            .try_global::<BrowserShell>()
            .and_then(|shell| shell.manager.window(id))
            .and_then(|w| w.handle.window());
        if let Some(window) = window {
            window
                .update(cx, |_, window, _| window.activate_window())
                .warn_on_err();
        }
    }
}

// ============================================================================
// View
// ============================================================================

pub struct BrowserWindow {
    id: WindowId,
    address: Option<String>,
    title: SharedString,
    window_menu_open: bool,
}

impl BrowserWindow {
    pub fn new(id: WindowId, address: Option<String>, title: SharedString) -> Self {
        Self {
            id,
            address,
            title,
            window_menu_open: false,
        }
    }

    fn new_window(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        info!(from_window = self.id.as_u64(), "New window requested");
        self.window_menu_open = false;
        cx.update_global::<BrowserShell, _>(|shell, cx| {
            shell.open_window(None, cx);
        });
        BrowserShell::refresh_windows(Some(window.window_handle()), cx);
        cx.notify();
    }

    fn close_window(&mut self, window: &mut Window) {
        info!(window_id = self.id.as_u64(), "Close window requested");
        window.remove_window();
    }

    fn select_window(&mut self, target: WindowId, cx: &mut Context<Self>) {
        self.window_menu_open = false;
        cx.notify();
        if target == self.id {
            return;
        }
        BrowserShell::activate(target, cx);
    }

    fn menu_entries(&self, cx: &App) -> Vec<WindowMenuEntry> {
        cx.try_global::<BrowserShell>()
            .map(|shell| shell.manager().menu_entries(Some(self.id)))
            .unwrap_or_default()
    }
}

impl Render for BrowserWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let muted = theme.muted_foreground;
        let border = theme.border;
        let background = theme.background;
        let foreground = theme.foreground;

        let address: SharedString = self
            .address
            .clone()
            .unwrap_or_else(|| "about:blank".to_string())
            .into();

        let toolbar = div()
            .id("browser-toolbar")
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .h(px(40.))
            .border_b_1()
            .border_color(border)
            .child(
                Button::new("new-window")
                    .ghost()
                    .xsmall()
                    .label("New Window")
                    .on_click(cx.listener(|this, _, window, cx| this.new_window(window, cx))),
            )
            .child(
                Button::new("close-window")
                    .ghost()
                    .xsmall()
                    .label("Close Window")
                    .on_click(cx.listener(|this, _, window, _| this.close_window(window))),
            )
            .child(
                Button::new("window-menu")
                    .ghost()
                    .xsmall()
                    .label("Window")
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.window_menu_open = !this.window_menu_open;
                        cx.notify();
                    })),
            )
            .child(
                div()
                    .flex_1()
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(border)
                    .text_sm()
                    .text_color(muted)
                    .overflow_hidden()
                    .text_ellipsis()
                    .child(address),
            );

        let window_menu = self.window_menu_open.then(|| {
            div()
                .id("window-menu")
                .flex()
                .flex_col()
                .px_3()
                .py_1()
                .border_b_1()
                .border_color(border)
                .children(self.menu_entries(cx).into_iter().map(|entry| {
                    let target = entry.id;
                    let label = if entry.is_current {
                        format!("✓ {}", entry.title)
                    } else {
                        entry.title
                    };
                    Button::new(SharedString::from(format!("window-{}", target.as_u64())))
                        .ghost()
                        .xsmall()
                        .label(label)
                        .on_click(cx.listener(move |this, _, _, cx| {
                            this.select_window(target, cx)
                        }))
                }))
        });

        div()
            .id("browser-window")
            .flex()
            .flex_col()
            .size_full()
            .bg(background)
            .text_color(foreground)
            .child(toolbar)
            .children(window_menu)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_lg()
                    .child(self.title.clone()),
            )
    }
}
