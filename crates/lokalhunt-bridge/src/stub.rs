// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where the Android window system is not
// available.
//
// Everything is in memory: density and API level are set by the caller, UI
// jobs run inline, and window calls are recorded so lifecycle behaviour can
// be inspected. The desktop preview app and the unit tests both drive the
// real reporter through this bridge.

use std::sync::{Arc, Mutex, RwLock};

use lokalhunt_core::error::Result;
use lokalhunt_core::types::{ApiLevel, Density, EdgeInsets, NormalizedInsets};

use crate::traits::*;

/// Window operation recorded by [`StubBridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCall {
    DecorFitsSystemWindows(bool),
    AttachListener(ListenerTarget),
    RequestApplyInsets,
}

/// In-memory bridge returned on non-Android platforms.
pub struct StubBridge {
    api_level: ApiLevel,
    density: Mutex<f32>,
    sink: RwLock<Option<Arc<dyn ScriptSink>>>,
    window_calls: Mutex<Vec<WindowCall>>,
}

impl StubBridge {
    pub fn new(api_level: ApiLevel, density: f32) -> Self {
        Self {
            api_level,
            density: Mutex::new(density),
            sink: RwLock::new(None),
            window_calls: Mutex::new(Vec::new()),
        }
    }

    /// Simulate the host bridge finishing web-view initialisation.
    pub fn attach_sink(&self, sink: Arc<dyn ScriptSink>) {
        *self.sink.write().expect("sink lock poisoned") = Some(sink);
    }

    /// Simulate the web view being torn down.
    pub fn detach_sink(&self) {
        *self.sink.write().expect("sink lock poisoned") = None;
    }

    /// Simulate a display or configuration change.
    pub fn set_density(&self, density: f32) {
        *self.density.lock().expect("density lock poisoned") = density;
    }

    pub fn window_calls(&self) -> Vec<WindowCall> {
        self.window_calls
            .lock()
            .expect("window call lock poisoned")
            .clone()
    }

    fn record(&self, call: WindowCall) {
        tracing::debug!(?call, "stub window call");
        self.window_calls
            .lock()
            .expect("window call lock poisoned")
            .push(call);
    }
}

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn api_level(&self) -> ApiLevel {
        self.api_level
    }
}

impl DisplayMetrics for StubBridge {
    fn density(&self) -> Result<Density> {
        Density::new(*self.density.lock().expect("density lock poisoned"))
    }
}

impl UiDispatcher for StubBridge {
    fn run_on_ui_thread(&self, job: UiJob) {
        job();
    }
}

impl BridgeHandle for StubBridge {
    fn script_sink(&self) -> Option<Arc<dyn ScriptSink>> {
        self.sink.read().expect("sink lock poisoned").clone()
    }
}

impl WindowHost for StubBridge {
    fn set_decor_fits_system_windows(&self, fits: bool) -> Result<()> {
        self.record(WindowCall::DecorFitsSystemWindows(fits));
        Ok(())
    }

    fn attach_insets_listener(&self, target: ListenerTarget) -> Result<()> {
        self.record(WindowCall::AttachListener(target));
        Ok(())
    }

    fn request_apply_insets(&self) -> Result<()> {
        self.record(WindowCall::RequestApplyInsets);
        Ok(())
    }
}

/// Script sink that keeps every script it was asked to run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    scripts: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().expect("script lock poisoned").clone()
    }

    /// Parse the payload of the most recent delivery back out of its script.
    pub fn last_insets(&self) -> Option<NormalizedInsets> {
        let scripts = self.scripts.lock().expect("script lock poisoned");
        let js = scripts.last()?;
        let start = js.find(" = ")? + 3;
        let end = start + js[start..].find(';')?;
        serde_json::from_str(&js[start..end]).ok()
    }
}

impl ScriptSink for RecordingSink {
    fn evaluate_script(&self, js: &str) -> Result<()> {
        self.scripts
            .lock()
            .expect("script lock poisoned")
            .push(js.to_owned());
        Ok(())
    }
}

/// A window-inset notification built from known pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedInsets {
    pub system_bars: EdgeInsets,
    pub display_cutout: EdgeInsets,
}

impl SimulatedInsets {
    pub fn new(system_bars: EdgeInsets, display_cutout: EdgeInsets) -> Self {
        Self {
            system_bars,
            display_cutout,
        }
    }
}

impl WindowInsetsSource for SimulatedInsets {
    fn system_bars(&self) -> Result<EdgeInsets> {
        Ok(self.system_bars)
    }

    fn display_cutout(&self) -> Result<EdgeInsets> {
        Ok(self.display_cutout)
    }

    /// Pre-R platforms report only the bars; the cutout is invisible to them.
    fn system_window(&self) -> Result<EdgeInsets> {
        Ok(self.system_bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_attach_and_detach() {
        let bridge = StubBridge::new(ApiLevel(34), 2.0);
        assert!(bridge.script_sink().is_none());

        bridge.attach_sink(Arc::new(RecordingSink::default()));
        assert!(bridge.script_sink().is_some());

        bridge.detach_sink();
        assert!(bridge.script_sink().is_none());
    }

    #[test]
    fn recording_sink_parses_last_payload() {
        let sink = RecordingSink::default();
        sink.evaluate_script(
            r#"window.androidSafeAreaInsets = {"top":24,"bottom":48,"left":0,"right":0,"hasInsets":true}; if (x) { }"#,
        )
        .unwrap();
        assert_eq!(sink.last_insets(), Some(NormalizedInsets::from_dp(24, 48, 0, 0)));
    }

    #[test]
    fn bad_density_surfaces_as_error() {
        let bridge = StubBridge::new(ApiLevel(34), -1.0);
        assert!(bridge.density().is_err());
    }
}
