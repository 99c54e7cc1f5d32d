use parts_inventory::prelude::*;

/// Mock Notifier for testing that captures messages
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Error: ").map(str::to_string))
            .collect()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl Notifier for MockNotifier {
    fn info(&self, message: &str) {
        self.push(format!("Info: {}", message));
    }

    fn success(&self, message: &str) {
        self.push(format!("Success: {}", message));
    }

    fn error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn loading_started(&self, message: &str) {
        self.push(format!("Loading: {}", message));
    }

    fn loading_finished(&self) {}
}
