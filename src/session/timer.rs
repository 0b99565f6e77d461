use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TimerState {
    Running,
    Paused,
    Stopped,
}

pub struct TimerController {
    clock: Arc<dyn Clock>,
    state: TimerState,
    elapsed: Duration,
    paused_at: Option<u64>,
}

impl TimerController {
    pub fn new(clock: Arc<dyn Clock>, visible: bool) -> Self {
        let (state, paused_at) = if visible {
            (TimerState::Running, None)
        } else {
            let now = clock.now_ms();
            (TimerState::Paused, Some(now))
        };
        TimerController {
            clock,
            state,
            elapsed: Duration::default(),
            paused_at,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.state == TimerState::Running {
            self.elapsed += dt;
        }
    }

    // Returns whether a pause/resume transition actually happened.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        match (self.state, visible) {
            (TimerState::Running, false) => {
                self.state = TimerState::Paused;
                self.paused_at = Some(self.clock.now_ms());
                true
            }
            (TimerState::Paused, true) => {
                // Catch up on the hidden interval in one step
                if let Some(paused_at) = self.paused_at.take() {
                    let hidden_seconds = self.clock.now_ms().saturating_sub(paused_at) / 1000;
                    self.elapsed += Duration::from_secs(hidden_seconds);
                }
                self.state = TimerState::Running;
                true
            }
            _ => false,
        }
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
        self.paused_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::mock::MockClock;

    struct Context {
        timer: TimerController,
        clock: Arc<MockClock>,
    }

    fn context(visible: bool) -> Context {
        let clock = Arc::new(MockClock::new());
        let timer = TimerController::new(clock.clone(), visible);
        Context { timer, clock }
    }

    #[test]
    fn accrues_one_second_per_tick() {
        let mut ctx = context(true);
        for _ in 0..5 {
            ctx.timer.tick(Duration::from_secs(1));
        }
        assert_eq!(ctx.timer.elapsed_seconds(), 5);
    }

    #[test]
    fn accumulates_subsecond_ticks() {
        let mut ctx = context(true);
        for _ in 0..4 {
            ctx.timer.tick(Duration::from_millis(500));
        }
        assert_eq!(ctx.timer.elapsed_seconds(), 2);
    }

    #[test]
    fn ignores_ticks_while_hidden() {
        let mut ctx = context(true);
        ctx.timer.tick(Duration::from_secs(2));
        assert!(ctx.timer.set_visible(false));
        ctx.timer.tick(Duration::from_secs(30));
        assert_eq!(ctx.timer.elapsed_seconds(), 2);
    }

    #[test]
    fn resume_catches_up_on_hidden_time() {
        let mut ctx = context(true);
        ctx.timer.tick(Duration::from_secs(2));
        ctx.timer.set_visible(false);
        ctx.clock.advance(Duration::from_secs(10));
        assert!(ctx.timer.set_visible(true));
        assert_eq!(ctx.timer.elapsed_seconds(), 12);
        ctx.timer.tick(Duration::from_secs(1));
        assert_eq!(ctx.timer.elapsed_seconds(), 13);
    }

    #[test]
    fn repeated_visibility_signals_are_ignored() {
        let mut ctx = context(true);
        assert!(!ctx.timer.set_visible(true));
        assert!(ctx.timer.set_visible(false));
        assert!(!ctx.timer.set_visible(false));
        ctx.clock.advance(Duration::from_secs(10));
        assert!(ctx.timer.set_visible(true));
        assert_eq!(ctx.timer.elapsed_seconds(), 10);
    }

    #[test]
    fn starts_paused_when_hidden() {
        let mut ctx = context(false);
        ctx.timer.tick(Duration::from_secs(5));
        assert_eq!(ctx.timer.elapsed_seconds(), 0);
        ctx.clock.advance(Duration::from_secs(3));
        ctx.timer.set_visible(true);
        assert_eq!(ctx.timer.elapsed_seconds(), 3);
        assert!(ctx.timer.is_running());
    }

    #[test]
    fn stop_is_terminal() {
        let mut ctx = context(true);
        ctx.timer.tick(Duration::from_secs(4));
        ctx.timer.stop();
        ctx.timer.tick(Duration::from_secs(4));
        assert!(!ctx.timer.set_visible(false));
        assert!(!ctx.timer.set_visible(true));
        assert_eq!(ctx.timer.elapsed_seconds(), 4);
        assert!(!ctx.timer.is_running());
    }
}
