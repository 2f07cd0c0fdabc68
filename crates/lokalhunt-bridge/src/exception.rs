// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pending Java exception handling.
//
// A failed JNI call leaves its Java exception pending on the thread. If it is
// still pending when a native method returns, the VM rethrows it in the
// caller, so every error path clears it before turning into a `ShellError`.

use std::fmt::Display;

use lokalhunt_core::error::ShellError;
use tracing::warn;

/// The pending-exception slot of an attached JNI thread.
pub trait PendingException {
    fn exception_pending(&self) -> bool;

    /// Print the pending exception to logcat and clear it.
    fn describe_and_clear(&self);
}

/// Map a failed JNI call to [`ShellError::Bridge`], clearing any exception
/// it left pending.
pub fn bridge_error<P>(jvm: &P, context: &str, e: impl Display) -> ShellError
where
    P: PendingException + ?Sized,
{
    if jvm.exception_pending() {
        jvm.describe_and_clear();
    }
    ShellError::Bridge(format!("{context}: {e}"))
}

/// Clear whatever is still pending before control returns to Java.
/// Returns `true` if an exception had to be cleared.
pub fn settle<P>(jvm: &P, entry: &str) -> bool
where
    P: PendingException + ?Sized,
{
    if !jvm.exception_pending() {
        return false;
    }
    warn!(entry, "clearing pending Java exception");
    jvm.describe_and_clear();
    true
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// A thread with an optional exception in flight.
    #[derive(Default)]
    struct FakeThread {
        pending: Cell<bool>,
        cleared: Cell<u32>,
    }

    impl FakeThread {
        fn throwing() -> Self {
            let t = Self::default();
            t.pending.set(true);
            t
        }
    }

    impl PendingException for FakeThread {
        fn exception_pending(&self) -> bool {
            self.pending.get()
        }

        fn describe_and_clear(&self) {
            self.pending.set(false);
            self.cleared.set(self.cleared.get() + 1);
        }
    }

    #[test]
    fn failed_call_clears_thrown_exception() {
        let thread = FakeThread::throwing();
        let err = bridge_error(&thread, "setDecorFitsSystemWindows", "JavaException");

        assert!(!thread.exception_pending());
        assert_eq!(thread.cleared.get(), 1);
        assert!(matches!(err, ShellError::Bridge(msg) if msg.starts_with("setDecorFitsSystemWindows")));
    }

    #[test]
    fn failure_without_exception_leaves_thread_alone() {
        let thread = FakeThread::default();
        let _ = bridge_error(&thread, "getInsets", "null object");
        assert_eq!(thread.cleared.get(), 0);
    }

    #[test]
    fn settle_before_return() {
        let thread = FakeThread::throwing();
        assert!(settle(&thread, "onApplyWindowInsets"));
        assert!(!thread.exception_pending());
        assert!(!settle(&thread, "onApplyWindowInsets"));
        assert_eq!(thread.cleared.get(), 1);
    }
}
