use parking_lot::RwLock;
use std::sync::Arc;

use crate::clock::Clock;
use crate::output::{Level, Message, QuizOutput};

const MAX_LOG_ENTRIES: usize = 1000;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogEntry {
    pub timestamp_ms: u64,
    pub level: Level,
    pub message: Message,
}

// Keeps the most recent session events around for diagnostics screens, on
// top of forwarding them to the log facade.
#[derive(Clone)]
pub struct BufferedOutput {
    clock: Arc<dyn Clock>,
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl BufferedOutput {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        BufferedOutput {
            clock,
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.entries.read().clone()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl QuizOutput for BufferedOutput {
    fn say(&self, message: &Message) {
        let level = message.level();
        match level {
            Level::Info => log::info!("{}", message),
            Level::Warn => log::warn!("{}", message),
            Level::Error => log::error!("{}", message),
        }

        let mut entries = self.entries.write();
        entries.push(LogEntry {
            timestamp_ms: self.clock.now_ms(),
            level,
            message: message.clone(),
        });
        let excess = entries.len().saturating_sub(MAX_LOG_ENTRIES);
        if excess > 0 {
            entries.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::mock::MockClock;
    use crate::store::WeekKey;

    #[test]
    fn records_entries_with_levels() {
        let output = BufferedOutput::new(Arc::new(MockClock::new()));
        output.say(&Message::QuestionsLoaded(WeekKey::Week(1), 5));
        output.say(&Message::SubmitIgnored);

        let entries = output.get_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::Info);
        assert_eq!(entries[0].message, Message::QuestionsLoaded(WeekKey::Week(1), 5));
        assert_eq!(entries[1].level, Level::Warn);
    }

    #[test]
    fn keeps_only_the_most_recent_entries() {
        let output = BufferedOutput::new(Arc::new(MockClock::new()));
        for index in 0..(MAX_LOG_ENTRIES + 10) {
            output.say(&Message::Navigated(index));
        }

        let entries = output.get_entries();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(entries[0].message, Message::Navigated(10));
    }

    #[test]
    fn clear_empties_the_buffer() {
        let output = BufferedOutput::new(Arc::new(MockClock::new()));
        output.say(&Message::SubmitIgnored);
        output.clear();
        assert!(output.get_entries().is_empty());
    }
}
