//! Progress display for TTY and non-TTY environments.
//!
//! TTY mode: a single sweep-wide counter line via indicatif.
//! Non-TTY mode: hidden bars; log lines are the only progress output.

use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

pub type SharedProgress = Arc<ProgressContext>;

/// Central progress context managing the multi-progress display
pub struct ProgressContext {
    multi: MultiProgress,
    is_tty: bool,
}

impl ProgressContext {
    /// Create new context, detecting TTY automatically
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            is_tty: std::io::stderr().is_terminal(),
        }
    }

    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    pub fn multi(&self) -> &MultiProgress {
        &self.multi
    }

    /// Sweep-wide counter line, ticked once per processed ID.
    ///
    /// Hidden off-TTY so redirected runs stay clean.
    pub fn sweep_bar(&self) -> ProgressBar {
        if !self.is_tty {
            return ProgressBar::hidden();
        }
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {human_pos} pages checked ({per_sec}) {wide_msg:.dim}")
                .expect("invalid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl Default for ProgressContext {
    fn default() -> Self {
        Self::new()
    }
}
