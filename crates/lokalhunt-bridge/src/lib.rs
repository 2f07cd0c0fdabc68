// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// LokalHunt shell — native bridge and safe-area inset reporting.
//
// `traits` defines the seams to the host platform, `reporter` implements the
// inset protocol on top of them, and `lifecycle` wires the reporter into the
// activity lifecycle. Android supplies the JNI implementation; everywhere
// else the in-memory stub is used.

pub mod exception;
pub mod lifecycle;
pub mod reporter;
pub mod script;
pub mod stub;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

pub use lifecycle::ShellActivity;
pub use reporter::{InsetReporter, compute, legacy_compute};
pub use script::SafeAreaScript;
pub use stub::StubBridge;
