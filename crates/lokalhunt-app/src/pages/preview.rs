// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview page — a phone frame whose content is padded by the safe-area
// insets that the real reporter delivers through `document::eval`.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use lokalhunt_bridge::traits::ScriptSink;
use lokalhunt_core::ShellConfig;
use lokalhunt_core::error::Result;

use crate::services::devices::PROFILES;
use crate::services::preview_shell::PreviewShell;

/// Stand-in for the web app's safe-area manager: applies delivered insets
/// as CSS variables and mirrors the payload into the readout.
const SAFE_AREA_MANAGER_JS: &str = r#"
window.SafeAreaManager = {
    updateFromNative: function (insets) {
        var root = document.documentElement;
        ['top', 'bottom', 'left', 'right'].forEach(function (edge) {
            root.style.setProperty('--safe-area-inset-' + edge, insets[edge] + 'px');
        });
        var readout = document.getElementById('inset-readout');
        if (readout) {
            readout.textContent = JSON.stringify(insets, null, 2);
        }
    }
};
"#;

/// Run `js` in the Dioxus webview without waiting for a result.
///
/// Delivery is one-way, like `evaluateJavascript` with a null callback on
/// Android: the page never answers, so the returned eval handle is dropped
/// unread.
fn run_script(js: &str) {
    drop(document::eval(js));
}

/// Delivers scripts into the Dioxus webview.
struct EvalSink;

impl ScriptSink for EvalSink {
    fn evaluate_script(&self, js: &str) -> Result<()> {
        run_script(js);
        Ok(())
    }
}

#[component]
pub fn Preview() -> Element {
    let config = use_context::<ShellConfig>();
    let mut selected = use_signal(|| 1usize);
    let mut web_view_attached = use_signal(|| true);
    let mut status = use_signal(|| Option::<String>::None);
    let shell = use_hook(|| Rc::new(RefCell::new(Option::<PreviewShell>::None)));
    let redispatch_shell = shell.clone();
    let density_shell = shell.clone();

    // Relaunch the simulated activity whenever the device or web-view
    // availability changes.
    let effect_shell = shell.clone();
    use_effect(move || {
        let profile = &PROFILES[selected()];
        let sink: Option<Arc<dyn ScriptSink>> = if web_view_attached() {
            run_script(SAFE_AREA_MANAGER_JS);
            Some(Arc::new(EvalSink))
        } else {
            None
        };

        let mut slot = effect_shell.borrow_mut();
        if let Some(old) = slot.as_mut() {
            old.shutdown();
        }
        *slot = match PreviewShell::launch(profile, config.clone(), sink) {
            Ok(s) => {
                let note = if web_view_attached() {
                    ""
                } else {
                    " (no web view: delivery skipped)"
                };
                status.set(Some(format!("{} path{note}", s.strategy())));
                Some(s)
            }
            Err(e) => {
                tracing::error!(error = %e, "preview launch failed");
                status.set(Some(format!("launch failed: {e}")));
                None
            }
        };
    });

    rsx! {
        div {
            style: "display: flex; gap: 24px; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            // Controls
            div { style: "width: 280px;",
                h2 { "Device" }
                for (i, profile) in PROFILES.iter().enumerate() {
                    button {
                        key: "{i}",
                        style: if selected() == i {
                            "display: block; width: 100%; margin: 4px 0; padding: 8px; text-align: left; border: 2px solid #1976d2; border-radius: 6px; background: #e3f2fd;"
                        } else {
                            "display: block; width: 100%; margin: 4px 0; padding: 8px; text-align: left; border: 1px solid #ccc; border-radius: 6px; background: #fff;"
                        },
                        onclick: move |_| selected.set(i),
                        "{profile.name}"
                    }
                }
                label { style: "display: block; margin-top: 16px;",
                    input {
                        r#type: "checkbox",
                        checked: web_view_attached(),
                        onchange: move |evt| web_view_attached.set(evt.checked()),
                    }
                    " Web view attached"
                }
                button {
                    style: "margin-top: 12px; padding: 6px 12px;",
                    onclick: move |_| {
                        if let Some(s) = redispatch_shell.borrow().as_ref() {
                            s.dispatch_insets();
                        }
                    },
                    "Re-dispatch insets"
                }
                label { style: "display: block; margin-top: 12px;",
                    "Density override "
                    input {
                        r#type: "number",
                        step: "0.125",
                        min: "0.5",
                        style: "width: 80px;",
                        onchange: move |evt| {
                            match evt.value().parse::<f32>() {
                                Ok(d) => {
                                    if let Some(s) = density_shell.borrow().as_ref() {
                                        s.set_density(d);
                                    }
                                }
                                Err(e) => tracing::warn!(error = %e, "ignoring density input"),
                            }
                        },
                    }
                }
                if let Some(msg) = status() {
                    p { style: "color: #555; font-size: 13px;", "{msg}" }
                }
            }

            // Phone frame
            div {
                style: "width: 360px; height: 640px; border: 8px solid #222; border-radius: 28px; overflow: hidden; background: #222;",
                div {
                    style: "box-sizing: border-box; height: 100%; padding: var(--safe-area-inset-top, 0px) var(--safe-area-inset-right, 0px) var(--safe-area-inset-bottom, 0px) var(--safe-area-inset-left, 0px);",
                    div { style: "height: 100%; background: #fafafa; padding: 12px; box-sizing: border-box;",
                        h3 { style: "margin-top: 0;", "LokalHunt" }
                        pre { id: "inset-readout", style: "font-size: 12px;", "waiting for insets" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_defines_default_update_hook() {
        let hook = ShellConfig::default().update_hook;
        let (object, method) = hook.split_once('.').unwrap();
        assert!(SAFE_AREA_MANAGER_JS.contains(&format!("window.{object} = {{")));
        assert!(SAFE_AREA_MANAGER_JS.contains(&format!("{method}: function")));
    }
}
