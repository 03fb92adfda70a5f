//! Trial progress display for long-running experiments

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{prefix:>14}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the trials of one algorithm run
///
/// Position updates are batched to [`PROGRESS_REFRESH_INTERVAL`] trials so the
/// bar does not dominate the cost of a cheap shuffle.
pub struct TrialProgress {
    bar: ProgressBar,
    trials: u64,
}

impl TrialProgress {
    /// Create a visible progress bar for `trials` shuffles labelled `label`
    pub fn new(label: &str, trials: u64) -> Self {
        let bar = ProgressBar::new(trials);
        bar.set_style(TRIAL_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar, trials }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(trials: u64) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            trials,
        }
    }

    /// Report that `completed` trials have finished
    pub fn update(&self, completed: u64) {
        if completed.is_multiple_of(PROGRESS_REFRESH_INTERVAL) || completed == self.trials {
            self.bar.set_position(completed);
        }
    }

    /// Current displayed position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
