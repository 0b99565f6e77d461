use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;
use crate::store::WeekKey;

pub mod store;

pub use self::store::{FileStore, MemoryStore, ProgressStore};

fn progress_key(week: WeekKey) -> String {
    format!("quiz_progress_{}", week)
}

#[derive(Debug, Deserialize, Serialize)]
struct CachedProgress {
    answers: HashMap<usize, String>,
    timestamp: u64,
}

#[derive(Debug, Eq, PartialEq)]
pub enum LoadResult {
    Valid(HashMap<usize, String>),
    Expired,
    Malformed,
    Absent,
}

pub struct ProgressCache {
    store: Arc<dyn ProgressStore>,
    clock: Arc<dyn Clock>,
    expiry: Duration,
}

impl ProgressCache {
    pub fn new(store: Arc<dyn ProgressStore>, clock: Arc<dyn Clock>, expiry: Duration) -> Self {
        ProgressCache {
            store,
            clock,
            expiry,
        }
    }

    pub fn load(&self, week: WeekKey) -> LoadResult {
        let key = progress_key(week);
        let raw = match self.store.get(&key) {
            Some(raw) => raw,
            None => return LoadResult::Absent,
        };
        let entry: CachedProgress = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(_) => {
                self.store.remove(&key);
                return LoadResult::Malformed;
            }
        };
        let age = self.clock.now_ms().saturating_sub(entry.timestamp);
        if age >= self.expiry.as_millis() as u64 {
            self.store.remove(&key);
            return LoadResult::Expired;
        }
        LoadResult::Valid(entry.answers)
    }

    pub fn save(&self, week: WeekKey, answers: &HashMap<usize, String>) {
        if answers.is_empty() {
            return;
        }
        let entry = CachedProgress {
            answers: answers.clone(),
            timestamp: self.clock.now_ms(),
        };
        match serde_json::to_string(&entry) {
            Ok(serialized) => self.store.set(&progress_key(week), &serialized),
            Err(e) => log::warn!("Could not serialize progress for {}: {}", week, e),
        }
    }

    pub fn clear(&self, week: WeekKey) {
        self.store.remove(&progress_key(week));
    }
}
