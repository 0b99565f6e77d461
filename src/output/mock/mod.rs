use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, QuizOutput};

#[derive(Clone)]
pub struct MockQuizOutput {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        MockQuizOutput {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.messages.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&self, message: &Message) {
        self.messages.write().push(message.clone());
    }
}
