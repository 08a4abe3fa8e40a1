//! Progress display for simulated edit sessions

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EDIT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Edits: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tallies shown next to the edit progress bar
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionTally {
    /// Cells added
    pub added: usize,
    /// Cells destroyed
    pub destroyed: usize,
    /// Edits that were refused by the grid
    pub rejected: usize,
    /// Successful reports received
    pub solved: usize,
    /// Failed reports received
    pub failed: usize,
}

impl SessionTally {
    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "+{} -{} rejected {} | solved {} failed {}",
            self.added, self.destroyed, self.rejected, self.solved, self.failed
        )
    }
}

/// Progress bar over the edits of one session
///
/// A hidden bar is used when output is suppressed so callers never branch.
pub struct EditProgress {
    bar: ProgressBar,
}

impl EditProgress {
    /// Create a visible bar for `edits` steps
    pub fn new(edits: usize) -> Self {
        let bar = ProgressBar::new(edits as u64);
        bar.set_style(EDIT_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden(edits: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(edits as u64);
        Self { bar }
    }

    /// Advance by one edit and refresh the tally
    pub fn advance(&self, tally: &SessionTally) {
        self.bar.inc(1);
        self.bar.set_message(tally.summary());
    }

    /// Total edits the bar counts towards
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Edits completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
