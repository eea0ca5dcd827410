//! Terminal feedback for `init` and `sync`
//!
//! One indicator is live at a time, drawn on stderr. In quiet mode every
//! indicator is a hidden bar, so callers never branch on verbosity.

use crate::vendor::SyncAction;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Status line for the current phase of a command
pub struct Progress {
    enabled: bool,
    current: ProgressBar,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            current: ProgressBar::hidden(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Spinner while walking the project for imports
    pub fn scanning(&mut self, root: &Path) {
        let spinner = self.phase(None, "{spinner:.green} {prefix:.bold} {wide_msg:.dim}");
        spinner.set_prefix("Scanning");
        spinner.set_message(root.display().to_string());
    }

    /// Spinner while looking up origins for `candidates` packages
    pub fn resolving(&mut self, candidates: usize) {
        let spinner = self.phase(None, "{spinner:.green} {prefix:.bold} {wide_msg:.dim}");
        spinner.set_prefix("Resolving");
        spinner.set_message(format!("{} external packages", candidates));
    }

    /// Bar over the entries about to be synced
    pub fn syncing(&mut self, entries: usize) {
        let bar = self.phase(
            Some(entries as u64),
            "{prefix:>8.bold.cyan} [{bar:25}] {pos}/{len} {wide_msg}",
        );
        bar.set_prefix("Syncing");
    }

    /// Show which package is being cloned or pulled
    pub fn sync_started(&self, action: SyncAction, path: &str) {
        let verb = match action {
            SyncAction::Clone => "clone",
            SyncAction::Pull => "pull",
        };
        self.current.set_message(format!("{} {}", verb, path));
    }

    pub fn sync_finished(&self) {
        self.current.inc(1);
    }

    /// Remove the current indicator from the terminal
    pub fn clear(&mut self) {
        self.current.finish_and_clear();
        self.current = ProgressBar::hidden();
    }

    fn phase(&mut self, len: Option<u64>, template: &str) -> &ProgressBar {
        self.current.finish_and_clear();
        self.current = if !self.enabled {
            ProgressBar::hidden()
        } else {
            let bar = match len {
                Some(len) => ProgressBar::new(len),
                None => ProgressBar::new_spinner(),
            };
            if let Ok(style) = ProgressStyle::with_template(template) {
                bar.set_style(style.progress_chars("=> "));
            }
            bar.enable_steady_tick(TICK);
            bar
        };
        &self.current
    }
}
