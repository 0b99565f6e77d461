use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub auto_advance_delay: Duration,
    pub progress_expiry: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            auto_advance_delay: Duration::from_secs(3),
            progress_expiry: Duration::from_secs(15 * 60),
        }
    }
}
