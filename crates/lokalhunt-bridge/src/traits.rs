// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native shell.
//
// The inset reporter only ever talks to these seams. Android implements them
// over JNI; the desktop stub implements them in memory so the whole delivery
// path can run without a device.

use std::sync::Arc;

use lokalhunt_core::error::Result;
use lokalhunt_core::types::{ApiLevel, Density, EdgeInsets};

/// Unit of work that must run on the UI thread.
pub type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// Unified bridge that groups every native capability the shell needs.
pub trait PlatformBridge: DisplayMetrics + UiDispatcher + BridgeHandle + WindowHost {
    /// Human-readable platform name (e.g. "Android", "Desktop (stub)").
    fn platform_name(&self) -> &str;

    /// Platform API level, read once when the activity is created.
    fn api_level(&self) -> ApiLevel;
}

/// One-way channel into the hosted web content.
pub trait ScriptSink: Send + Sync {
    /// Execute `js` in the page. Fire-and-forget: no result is read back.
    fn evaluate_script(&self, js: &str) -> Result<()>;
}

/// Access to the host bridge runtime that owns the web view.
///
/// The runtime is created and torn down by the host, so the sink may be
/// missing at any time. Callers check and skip.
pub trait BridgeHandle: Send + Sync {
    fn script_sink(&self) -> Option<Arc<dyn ScriptSink>>;
}

/// Marshals work onto the UI thread.
pub trait UiDispatcher: Send + Sync {
    /// Run `job` on the UI thread, inline if already there.
    fn run_on_ui_thread(&self, job: UiJob);
}

/// Display subsystem queries.
pub trait DisplayMetrics: Send + Sync {
    /// Current display density. Never cached by callers.
    fn density(&self) -> Result<Density>;
}

/// A single inset-change notification from the window system.
///
/// All values are device pixels.
pub trait WindowInsetsSource {
    /// Status bar + navigation bar insets (modern API only).
    fn system_bars(&self) -> Result<EdgeInsets>;

    /// Display cutout insets (modern API only).
    fn display_cutout(&self) -> Result<EdgeInsets>;

    /// Combined system-window insets (legacy API).
    fn system_window(&self) -> Result<EdgeInsets>;
}

/// Which view carries the inset listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    /// `android.R.id.content`, used with edge-to-edge layout.
    ContentRoot,
    /// The window's decor view.
    DecorView,
}

/// Window-level operations used while setting up the activity.
pub trait WindowHost {
    /// `Window.setDecorFitsSystemWindows`. Passing `false` lays the content
    /// out edge-to-edge under the system bars.
    fn set_decor_fits_system_windows(&self, fits: bool) -> Result<()>;

    /// Register the shell's inset listener on `target`.
    fn attach_insets_listener(&self, target: ListenerTarget) -> Result<()>;

    /// Ask the platform to dispatch insets to the listener again.
    fn request_apply_insets(&self) -> Result<()>;
}
