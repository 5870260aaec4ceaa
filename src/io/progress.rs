//! Progress display for the parallel pipeline phases

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{prefix:>16}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per pipeline phase
///
/// When disabled every phase gets a hidden bar, so callers never branch on
/// whether progress is shown.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    phases: Mutex<Vec<ProgressBar>>,
}

impl ProgressManager {
    /// Create a manager drawing to stderr, or drawing nothing when `enabled` is false
    pub fn new(enabled: bool) -> Self {
        let target = if enabled {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            phases: Mutex::new(Vec::new()),
        }
    }

    /// Start a bar for a phase with `len` work units
    pub fn phase(&self, label: &'static str, len: usize) -> PhaseProgress {
        let bar = ProgressBar::new(len as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(label);
        let bar = self.multi_progress.add(bar);
        self.phases.lock().push(bar.clone());
        PhaseProgress { bar }
    }

    /// Phases started but not yet finished
    pub fn active_phases(&self) -> usize {
        self.phases
            .lock()
            .iter()
            .filter(|bar| !bar.is_finished())
            .count()
    }

    /// Abandon unfinished phases and clear every bar from the terminal
    pub fn finish(&self) {
        for bar in self.phases.lock().iter().filter(|bar| !bar.is_finished()) {
            bar.abandon();
        }
        let _ = self.multi_progress.clear();
    }
}

/// Progress of one phase, shareable across worker threads
#[derive(Clone, Debug)]
pub struct PhaseProgress {
    bar: ProgressBar,
}

impl PhaseProgress {
    /// A bar that tracks counts but never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one finished work unit
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Work units finished so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the phase as done with a closing message
    pub fn finish(&self, message: impl Into<String>) {
        self.bar.finish_with_message(message.into());
    }
}
