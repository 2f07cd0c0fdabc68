// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JavaScript generation for delivering safe-area insets to the hosted page.

use lokalhunt_core::ShellConfig;
use lokalhunt_core::error::Result;
use lokalhunt_core::types::NormalizedInsets;

/// Renders the one-way script that publishes insets to the web app.
///
/// The generated script:
/// 1. assigns the payload to `window.<global_binding>`,
/// 2. calls `window.<update_hook>(payload)` if every segment of the hook path
///    exists,
/// 3. optionally echoes the payload to the page console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeAreaScript {
    global_binding: String,
    update_hook: String,
    console_label: Option<String>,
}

impl SafeAreaScript {
    /// Build from a validated config.
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            global_binding: config.global_binding.clone(),
            update_hook: config.update_hook.clone(),
            console_label: config
                .console_trace
                .then(|| config.console_label.clone()),
        })
    }

    /// Render the script for one delivery.
    pub fn render(&self, insets: &NormalizedInsets) -> Result<String> {
        let payload = insets.to_json()?;
        let mut js = format!(
            "window.{binding} = {payload}; if ({guard}) {{ window.{hook}({payload}); }}",
            binding = self.global_binding,
            guard = hook_guard(&self.update_hook),
            hook = self.update_hook,
        );
        if let Some(label) = &self.console_label {
            let label = serde_json::to_string(label)?;
            js.push_str(&format!(" console.log({label}, {payload});"));
        }
        Ok(js)
    }
}

/// `a.b.c` -> `window.a && window.a.b && window.a.b.c`
fn hook_guard(path: &str) -> String {
    let mut prefix = String::from("window");
    path.split('.')
        .map(|segment| {
            prefix.push('.');
            prefix.push_str(segment);
            prefix.clone()
        })
        .collect::<Vec<_>>()
        .join(" && ")
}
