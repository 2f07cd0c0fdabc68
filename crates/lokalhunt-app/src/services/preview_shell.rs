// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drives a `ShellActivity` over the stub bridge as if it were running on the
// selected device profile.

use std::sync::Arc;

use lokalhunt_bridge::ShellActivity;
use lokalhunt_bridge::stub::StubBridge;
use lokalhunt_bridge::traits::ScriptSink;
use lokalhunt_core::ShellConfig;
use lokalhunt_core::error::Result;
use lokalhunt_core::types::InsetStrategy;
use tracing::info;

use super::devices::DeviceProfile;

/// One simulated activity instance.
pub struct PreviewShell {
    activity: ShellActivity<StubBridge>,
    strategy: InsetStrategy,
    profile: DeviceProfile,
}

impl PreviewShell {
    /// Create, start and resume an activity for `profile`, then dispatch the
    /// profile's insets the way the window system does after the first
    /// layout pass. `sink` is `None` to simulate a web view that has not
    /// been created yet.
    pub fn launch(
        profile: &DeviceProfile,
        config: ShellConfig,
        sink: Option<Arc<dyn ScriptSink>>,
    ) -> Result<Self> {
        let bridge = Arc::new(StubBridge::new(profile.api_level, profile.density));
        if let Some(sink) = sink {
            bridge.attach_sink(sink);
        }

        let mut activity = ShellActivity::new(bridge, config);
        let strategy = activity.on_create()?;
        activity.on_start();
        activity.on_resume();

        info!(device = profile.name, %strategy, "preview activity launched");
        let shell = Self {
            activity,
            strategy,
            profile: *profile,
        };
        shell.dispatch_insets();
        Ok(shell)
    }

    pub fn strategy(&self) -> InsetStrategy {
        self.strategy
    }

    /// Re-send the current profile's insets to the listener.
    pub fn dispatch_insets(&self) {
        self.activity.on_apply_window_insets(&self.profile.insets());
    }

    /// Change display density without recreating the activity.
    pub fn set_density(&self, density: f32) {
        self.activity.bridge().set_density(density);
        self.dispatch_insets();
    }

    pub fn shutdown(&mut self) {
        self.activity.on_pause();
        self.activity.on_stop();
        self.activity.on_destroy();
    }
}
