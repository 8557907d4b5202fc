//! Status spinner for scanning, loading and deleting.

use indicatif::{ProgressBar, ProgressStyle};

use rom_cull_lib::CullProgress;

/// Single-line spinner driven by [`CullProgress`] updates.
pub(crate) struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create a spinner. When `quiet` is true it is hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                    .expect("static pattern")
                    .tick_chars("/-\\|"),
            );
            pb
        };
        Self { pb }
    }

    /// Apply one progress update.
    pub(crate) fn update(&self, progress: CullProgress) {
        match progress {
            CullProgress::Done => self.pb.finish_and_clear(),
            CullProgress::Scanning { found } if found % 64 != 0 => {}
            other => {
                self.pb.set_message(other.message());
                self.pb.tick();
            }
        }
    }

    /// Clear the spinner line before printing a report.
    pub(crate) fn clear(&self) {
        self.pb.finish_and_clear();
    }
}
