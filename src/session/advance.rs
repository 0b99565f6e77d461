use std::time::Duration;

pub struct AutoAdvanceController {
    delay: Duration,
    remaining: Option<Duration>,
}

impl AutoAdvanceController {
    pub fn new(delay: Duration) -> Self {
        AutoAdvanceController {
            delay,
            remaining: None,
        }
    }

    pub fn schedule(&mut self) {
        self.remaining = Some(self.delay);
    }

    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    // Whole seconds left, rounded up for display.
    pub fn countdown(&self) -> Option<u64> {
        self.remaining
            .map(|remaining| ((remaining.as_millis() + 999) / 1000) as u64)
    }

    // Returns true exactly once, when the countdown expires.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(remaining) if remaining <= dt => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - dt);
                false
            }
            None => false,
        }
    }
}
