use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// A transient user notification that dismisses itself after a fixed delay.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    raised_at: Instant,
    ttl: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_ttl(message, NOTICE_TTL)
    }

    pub fn with_ttl(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
            ttl,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn raised_at(&self) -> Instant {
        self.raised_at
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.ttl
    }

    pub fn is_visible(&self) -> bool {
        !self.is_expired_at(Instant::now())
    }
}
