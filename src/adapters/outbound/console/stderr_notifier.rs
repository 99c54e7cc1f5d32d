use crate::ports::outbound::Notifier;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// Spinner redraw interval
const SPINNER_TICK_MS: u64 = 100;

/// StderrNotifier adapter for reporting outcomes to stderr
///
/// Implements the Notifier port. Messages go to stderr so they never mix
/// with rendered output on stdout. Loading is shown as an indicatif spinner.
pub struct StderrNotifier {
    spinner: RefCell<Option<ProgressBar>>,
    color: bool,
    quiet: bool,
}

impl StderrNotifier {
    pub fn new(color: bool) -> Self {
        Self {
            spinner: RefCell::new(None),
            color,
            quiet: false,
        }
    }

    /// Suppresses info and success messages; errors are still shown
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }

    fn line(&self, marker: &str, message: &str) -> String {
        format!("{} {}", marker, message)
    }
}

impl Default for StderrNotifier {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Notifier for StderrNotifier {
    fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_spinner();
        let marker = if self.color {
            "ℹ".cyan().to_string()
        } else {
            "ℹ".to_string()
        };
        eprintln!("{}", self.line(&marker, message));
    }

    fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_spinner();
        let marker = if self.color {
            "✅".green().to_string()
        } else {
            "✅".to_string()
        };
        eprintln!("{}", self.line(&marker, message));
    }

    fn error(&self, message: &str) {
        self.clear_spinner();
        let marker = if self.color {
            "❌".red().bold().to_string()
        } else {
            "❌".to_string()
        };
        eprintln!("{}", self.line(&marker, message));
    }

    fn loading_started(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn loading_finished(&self) {
        self.clear_spinner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_messages_do_not_panic() {
        let notifier = StderrNotifier::new(false);
        notifier.info("Loading");
        notifier.success("Done");
        notifier.error("Failed");
    }

    #[test]
    fn test_loading_lifecycle() {
        let notifier = StderrNotifier::new(true);
        notifier.loading_started("Loading components...");
        assert!(notifier.spinner.borrow().is_some());
        notifier.loading_finished();
        assert!(notifier.spinner.borrow().is_none());
    }

    #[test]
    fn test_message_replaces_spinner() {
        let notifier = StderrNotifier::default();
        notifier.loading_started("Adding component...");
        notifier.error("Failed to add component");
        assert!(notifier.spinner.borrow().is_none());
    }

    #[test]
    fn test_quiet_skips_spinner() {
        let notifier = StderrNotifier::default().quiet(true);
        notifier.loading_started("Loading components...");
        assert!(notifier.spinner.borrow().is_none());
        notifier.success("hidden");
    }
}
