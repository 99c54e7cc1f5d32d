/// Notifier port for non-blocking user feedback
///
/// Results of user actions are reported here instead of interrupting the
/// caller. Implementations must never fail; a broken notifier must not break
/// the inventory view.
pub trait Notifier {
    /// Reports a neutral status message
    fn info(&self, message: &str);

    /// Reports a successfully completed operation
    fn success(&self, message: &str);

    /// Reports a failed operation
    fn error(&self, message: &str);

    /// Shows a loading indicator until [`Notifier::loading_finished`] is called
    fn loading_started(&self, message: &str);

    /// Hides the loading indicator, if any
    fn loading_finished(&self);
}
