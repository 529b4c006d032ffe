//! Cooperative shutdown token checked by workers between iterations

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag handed to every worker at construction.
///
/// Set by the signal handler; observed once per worker loop iteration,
/// never mid-fetch — an in-flight request always runs to completion or
/// errors out before the flag is checked again.
#[derive(Clone, Debug, Default)]
pub struct ShutdownToken {
    flag: Arc<AtomicBool>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown, returning whether it was already requested
    /// (lets a signal handler force-exit on the second signal).
    pub fn request(&self) -> bool {
        self.flag.swap(true, Ordering::Relaxed)
    }

    /// True once shutdown was requested
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
