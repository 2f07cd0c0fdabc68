// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Inset reporter — turns window-inset notifications into safe-area payloads
// for the hosted web app.
//
// Each notification is handled independently:
//   measure (strategy) -> merge per edge -> px to dp -> render script
//   -> hop onto the UI thread -> evaluate in the web view, if one exists.
//
// A missing web view is not an error. The next notification carries the
// current insets anyway, so the event is simply dropped.

use std::sync::Arc;

use lokalhunt_core::error::Result;
use lokalhunt_core::types::{Density, EdgeInsets, InsetStrategy, NormalizedInsets};
use tracing::{debug, warn};

use crate::script::SafeAreaScript;
use crate::traits::{BridgeHandle, DisplayMetrics, UiDispatcher, WindowInsetsSource};

/// Extracts `(system_bars, display_cutout)` from a notification.
type MeasureFn = fn(&dyn WindowInsetsSource) -> Result<(EdgeInsets, EdgeInsets)>;

fn measure_modern(insets: &dyn WindowInsetsSource) -> Result<(EdgeInsets, EdgeInsets)> {
    Ok((insets.system_bars()?, insets.display_cutout()?))
}

fn measure_legacy(insets: &dyn WindowInsetsSource) -> Result<(EdgeInsets, EdgeInsets)> {
    Ok((insets.system_window()?, EdgeInsets::ZERO))
}

/// Merge system-bar and cutout insets and convert them to dp.
pub fn compute(system_bars: EdgeInsets, cutout: EdgeInsets, density: Density) -> NormalizedInsets {
    NormalizedInsets::from_pixels(system_bars, cutout, density)
}

/// Legacy-path computation: the combined inset is used as-is.
pub fn legacy_compute(system_window: EdgeInsets, density: Density) -> NormalizedInsets {
    compute(system_window, EdgeInsets::ZERO, density)
}

/// Listener half of the safe-area protocol.
///
/// The measurement strategy is resolved once in [`InsetReporter::new`];
/// events never re-check the platform version.
pub struct InsetReporter {
    strategy: InsetStrategy,
    measure: MeasureFn,
    script: SafeAreaScript,
    display: Arc<dyn DisplayMetrics>,
    dispatcher: Arc<dyn UiDispatcher>,
    handle: Arc<dyn BridgeHandle>,
}

impl InsetReporter {
    pub fn new(
        strategy: InsetStrategy,
        script: SafeAreaScript,
        display: Arc<dyn DisplayMetrics>,
        dispatcher: Arc<dyn UiDispatcher>,
        handle: Arc<dyn BridgeHandle>,
    ) -> Self {
        let measure: MeasureFn = match strategy {
            InsetStrategy::Modern => measure_modern,
            InsetStrategy::Legacy => measure_legacy,
        };
        Self {
            strategy,
            measure,
            script,
            display,
            dispatcher,
            handle,
        }
    }

    pub fn strategy(&self) -> InsetStrategy {
        self.strategy
    }

    /// Inset-change listener body.
    ///
    /// Always hands back the notification it was given: the reporter observes
    /// insets, it never consumes them. Measurement failures are logged and
    /// the event is dropped.
    pub fn on_apply_window_insets<'a, I>(&self, insets: &'a I) -> &'a I
    where
        I: WindowInsetsSource,
    {
        if let Err(e) = self.report(insets) {
            warn!(error = %e, strategy = %self.strategy, "inset event dropped");
        }
        insets
    }

    fn report(&self, insets: &dyn WindowInsetsSource) -> Result<()> {
        let (system_bars, cutout) = (self.measure)(insets)?;
        let density = self.display.density()?;
        self.compute_and_deliver(system_bars, cutout, density)?;
        Ok(())
    }

    /// Compute the normalized insets and schedule delivery on the UI thread.
    ///
    /// Returns the computed value. Delivery itself is fire-and-forget and is
    /// skipped if the web view is not available when the UI job runs.
    pub fn compute_and_deliver(
        &self,
        system_bars: EdgeInsets,
        cutout: EdgeInsets,
        density: Density,
    ) -> Result<NormalizedInsets> {
        let normalized = compute(system_bars, cutout, density);
        let js = self.script.render(&normalized)?;

        debug!(
            top = normalized.top,
            bottom = normalized.bottom,
            left = normalized.left,
            right = normalized.right,
            has_insets = normalized.has_insets,
            density = density.get(),
            "safe-area insets computed"
        );

        let handle = Arc::clone(&self.handle);
        self.dispatcher.run_on_ui_thread(Box::new(move || {
            let Some(sink) = handle.script_sink() else {
                return;
            };
            if let Err(e) = sink.evaluate_script(&js) {
                warn!(error = %e, "evaluate_script failed");
            }
        }));

        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use lokalhunt_core::ShellConfig;
    use lokalhunt_core::error::ShellError;
    use lokalhunt_core::types::ApiLevel;

    use super::*;
    use crate::stub::{RecordingSink, SimulatedInsets, StubBridge};
    use crate::traits::{ScriptSink, UiJob};

    fn reporter(strategy: InsetStrategy, bridge: &Arc<StubBridge>) -> InsetReporter {
        InsetReporter::new(
            strategy,
            SafeAreaScript::from_config(&ShellConfig::default()).unwrap(),
            bridge.clone(),
            bridge.clone(),
            bridge.clone(),
        )
    }

    fn bridge_with_sink(density: f32) -> (Arc<StubBridge>, Arc<RecordingSink>) {
        let bridge = Arc::new(StubBridge::new(ApiLevel(34), density));
        let sink = Arc::new(RecordingSink::default());
        bridge.attach_sink(sink.clone());
        (bridge, sink)
    }

    fn d(v: f32) -> Density {
        Density::new(v).unwrap()
    }

    /// Holds UI jobs until the test drains them.
    #[derive(Default)]
    struct QueuedDispatcher {
        jobs: Mutex<VecDeque<UiJob>>,
    }

    impl QueuedDispatcher {
        fn drain(&self) -> usize {
            let mut n = 0;
            loop {
                let next = self.jobs.lock().unwrap().pop_front();
                let Some(job) = next else { break };
                job();
                n += 1;
            }
            n
        }
    }

    impl UiDispatcher for QueuedDispatcher {
        fn run_on_ui_thread(&self, job: UiJob) {
            self.jobs.lock().unwrap().push_back(job);
        }
    }

    struct FailingSink;

    impl ScriptSink for FailingSink {
        fn evaluate_script(&self, _js: &str) -> Result<()> {
            Err(ShellError::Bridge("web view destroyed".into()))
        }
    }

    #[test]
    fn status_bar_payload_delivered() {
        let (bridge, sink) = bridge_with_sink(2.0);
        let r = reporter(InsetStrategy::Modern, &bridge);

        let n = r
            .compute_and_deliver(EdgeInsets::new(63, 0, 0, 0), EdgeInsets::ZERO, d(2.0))
            .unwrap();

        assert_eq!(n, NormalizedInsets::from_dp(32, 0, 0, 0));
        let scripts = sink.scripts();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains(r#"{"top":32,"bottom":0,"left":0,"right":0,"hasInsets":true}"#));
    }

    #[test]
    fn zero_insets_report_has_insets_false() {
        let (bridge, sink) = bridge_with_sink(3.0);
        let r = reporter(InsetStrategy::Modern, &bridge);

        let n = r
            .compute_and_deliver(EdgeInsets::ZERO, EdgeInsets::ZERO, d(3.0))
            .unwrap();

        assert!(!n.has_insets);
        assert!(sink.scripts()[0].contains(r#""hasInsets":false"#));
    }

    #[test]
    fn cutout_wins_on_modern_path() {
        let (bridge, sink) = bridge_with_sink(1.0);
        let r = reporter(InsetStrategy::Modern, &bridge);

        let event = SimulatedInsets::new(EdgeInsets::new(24, 0, 0, 0), EdgeInsets::new(48, 0, 0, 0));
        r.on_apply_window_insets(&event);

        assert_eq!(
            sink.last_insets().map(|n| n.top),
            Some(48),
            "cutout deeper than status bar must win"
        );
    }

    #[test]
    fn legacy_path_ignores_cutout() {
        let (bridge, sink) = bridge_with_sink(1.0);
        let r = reporter(InsetStrategy::Legacy, &bridge);

        let event = SimulatedInsets::new(EdgeInsets::new(24, 0, 0, 0), EdgeInsets::new(48, 0, 0, 0));
        r.on_apply_window_insets(&event);

        assert!(sink.scripts()[0].contains(r#""top":24"#));
    }

    #[test]
    fn legacy_compute_matches_zero_cutout() {
        let raw = EdgeInsets::new(75, 126, 3, 0);
        for density in [0.75, 1.0, 1.5, 2.0, 2.625, 3.0, 3.5, 4.0] {
            assert_eq!(
                compute(raw, EdgeInsets::ZERO, d(density)),
                legacy_compute(raw, d(density))
            );
        }
    }

    #[test]
    fn missing_web_view_drops_silently() {
        let bridge = Arc::new(StubBridge::new(ApiLevel(34), 2.0));
        let r = reporter(InsetStrategy::Modern, &bridge);

        let event = SimulatedInsets::new(EdgeInsets::new(63, 0, 0, 0), EdgeInsets::ZERO);
        let returned = r.on_apply_window_insets(&event);

        assert!(std::ptr::eq(returned, &event));

        // Nothing was queued for later either.
        let sink = Arc::new(RecordingSink::default());
        bridge.attach_sink(sink.clone());
        assert!(sink.scripts().is_empty());
    }

    #[test]
    fn sink_checked_when_job_runs_not_when_scheduled() {
        let bridge = Arc::new(StubBridge::new(ApiLevel(34), 2.0));
        let queue = Arc::new(QueuedDispatcher::default());
        let r = InsetReporter::new(
            InsetStrategy::Modern,
            SafeAreaScript::from_config(&ShellConfig::default()).unwrap(),
            bridge.clone(),
            queue.clone(),
            bridge.clone(),
        );

        r.compute_and_deliver(EdgeInsets::new(40, 0, 0, 0), EdgeInsets::ZERO, d(2.0))
            .unwrap();

        // Web view shows up between scheduling and the UI thread running.
        let sink = Arc::new(RecordingSink::default());
        bridge.attach_sink(sink.clone());
        assert!(sink.scripts().is_empty());

        assert_eq!(queue.drain(), 1);
        assert_eq!(sink.scripts().len(), 1);
    }

    #[test]
    fn density_is_read_per_event() {
        let (bridge, sink) = bridge_with_sink(2.0);
        let r = reporter(InsetStrategy::Modern, &bridge);
        let event = SimulatedInsets::new(EdgeInsets::new(96, 0, 0, 0), EdgeInsets::ZERO);

        r.on_apply_window_insets(&event);
        bridge.set_density(3.0);
        r.on_apply_window_insets(&event);

        let scripts = sink.scripts();
        assert!(scripts[0].contains(r#""top":48"#));
        assert!(scripts[1].contains(r#""top":32"#));
    }

    #[test]
    fn invalid_density_drops_event() {
        let (bridge, sink) = bridge_with_sink(2.0);
        bridge.set_density(0.0);
        let r = reporter(InsetStrategy::Modern, &bridge);

        let event = SimulatedInsets::new(EdgeInsets::new(96, 0, 0, 0), EdgeInsets::ZERO);
        r.on_apply_window_insets(&event);

        assert!(sink.scripts().is_empty());
    }

    #[test]
    fn failing_sink_does_not_escape() {
        let bridge = Arc::new(StubBridge::new(ApiLevel(34), 2.0));
        bridge.attach_sink(Arc::new(FailingSink));
        let r = reporter(InsetStrategy::Modern, &bridge);

        let n = r
            .compute_and_deliver(EdgeInsets::new(10, 0, 0, 0), EdgeInsets::ZERO, d(2.0))
            .unwrap();
        assert_eq!(n.top, 5);
    }

    #[test]
    fn repeated_delivery_is_byte_identical() {
        let (bridge, sink) = bridge_with_sink(2.75);
        let r = reporter(InsetStrategy::Modern, &bridge);

        for _ in 0..2 {
            r.compute_and_deliver(EdgeInsets::new(110, 66, 0, 0), EdgeInsets::new(121, 0, 0, 0), d(2.75))
                .unwrap();
        }

        let scripts = sink.scripts();
        assert_eq!(scripts.len(), 2);
        assert_eq!(scripts[0], scripts[1]);
    }
}
