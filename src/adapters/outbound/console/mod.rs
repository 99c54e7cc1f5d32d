/// Console adapters for user feedback on stderr
mod stderr_notifier;

pub use stderr_notifier::StderrNotifier;
