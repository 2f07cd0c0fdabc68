// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Activity lifecycle driver.
//
// The host activity forwards its lifecycle callbacks here. `on_create` picks
// the inset measurement strategy for the running platform, prepares the
// window, and installs the listener; the remaining callbacks are logged, and
// `on_resume` optionally nudges the platform to re-dispatch insets.

use std::sync::Arc;

use lokalhunt_core::ShellConfig;
use lokalhunt_core::error::Result;
use lokalhunt_core::types::{InsetStrategy, LifecycleEvent};
use tracing::{info, warn};

use crate::reporter::InsetReporter;
use crate::script::SafeAreaScript;
use crate::traits::{ListenerTarget, PlatformBridge, WindowInsetsSource};

/// Native half of the shell's main activity.
pub struct ShellActivity<B: PlatformBridge + Send + Sync + 'static> {
    bridge: Arc<B>,
    config: ShellConfig,
    reporter: Option<InsetReporter>,
    last_event: Option<LifecycleEvent>,
}

impl<B: PlatformBridge + Send + Sync + 'static> ShellActivity<B> {
    pub fn new(bridge: Arc<B>, config: ShellConfig) -> Self {
        Self {
            bridge,
            config,
            reporter: None,
            last_event: None,
        }
    }

    pub fn bridge(&self) -> &Arc<B> {
        &self.bridge
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn reporter(&self) -> Option<&InsetReporter> {
        self.reporter.as_ref()
    }

    pub fn last_event(&self) -> Option<LifecycleEvent> {
        self.last_event
    }

    /// Set up inset detection.
    ///
    /// Modern platforms go edge-to-edge and listen on the content root;
    /// legacy platforms listen on the decor view. The chosen strategy is
    /// fixed for the lifetime of the reporter.
    pub fn on_create(&mut self) -> Result<InsetStrategy> {
        self.transition(LifecycleEvent::Create);

        let api_level = self.bridge.api_level();
        let strategy = InsetStrategy::select(api_level, self.config.modern_min_api_level());
        let script = SafeAreaScript::from_config(&self.config)?;

        let target = match strategy {
            InsetStrategy::Modern => {
                self.bridge.set_decor_fits_system_windows(false)?;
                ListenerTarget::ContentRoot
            }
            InsetStrategy::Legacy => ListenerTarget::DecorView,
        };

        self.reporter = Some(InsetReporter::new(
            strategy,
            script,
            self.bridge.clone(),
            self.bridge.clone(),
            self.bridge.clone(),
        ));
        self.bridge.attach_insets_listener(target)?;

        info!(
            tag = %self.config.log_tag,
            platform = self.bridge.platform_name(),
            %api_level,
            %strategy,
            ?target,
            "inset detection ready"
        );
        Ok(strategy)
    }

    pub fn on_start(&mut self) {
        self.transition(LifecycleEvent::Start);
    }

    pub fn on_resume(&mut self) {
        self.transition(LifecycleEvent::Resume);
        if self.config.reapply_on_resume && self.reporter.is_some() {
            if let Err(e) = self.bridge.request_apply_insets() {
                warn!(error = %e, "requestApplyInsets on resume failed");
            }
        }
    }

    pub fn on_pause(&mut self) {
        self.transition(LifecycleEvent::Pause);
    }

    pub fn on_stop(&mut self) {
        self.transition(LifecycleEvent::Stop);
    }

    /// Drop the reporter; late inset events after this are ignored.
    pub fn on_destroy(&mut self) {
        self.transition(LifecycleEvent::Destroy);
        self.reporter = None;
    }

    /// Forward an inset notification to the reporter, if one is installed.
    /// The notification is always returned unchanged.
    pub fn on_apply_window_insets<'a, I>(&self, insets: &'a I) -> &'a I
    where
        I: WindowInsetsSource,
    {
        match &self.reporter {
            Some(reporter) => reporter.on_apply_window_insets(insets),
            None => insets,
        }
    }

    fn transition(&mut self, event: LifecycleEvent) {
        info!(tag = %self.config.log_tag, %event, "activity lifecycle");
        self.last_event = Some(event);
    }
}
