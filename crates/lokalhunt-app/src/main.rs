// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// LokalHunt shell — desktop preview.
//
// Entry point. Initialises logging, loads the shell config, and launches a
// Dioxus window that plays the part of the hosted web app while the real
// inset reporter runs over the stub bridge.

mod pages;
mod services;

use dioxus::prelude::*;
use lokalhunt_core::ShellConfig;

use pages::preview::Preview;
use services::data_dir;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("LokalHunt preview starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let config = use_hook(|| {
        let dir = data_dir::data_dir();
        let config = ShellConfig::load_or_default(&dir);
        tracing::info!(path = %dir.display(), tag = %config.log_tag, "shell config loaded");
        config
    });
    use_context_provider(|| config.clone());

    rsx! {
        Preview {}
    }
}
