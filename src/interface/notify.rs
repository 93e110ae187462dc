use std::time::{Duration, Instant};

/// How long a success notice stays up.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);

/// How long an error notice stays up.
pub const ERROR_NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient banner message with a time-to-live.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            ttl: SUCCESS_NOTICE_TTL,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            ttl: ERROR_NOTICE_TTL,
        }
    }
}

/// Active notices with their expiry deadlines.
///
/// Notices coexist without deduplication; newest first. Expiry happens on
/// `sweep` rather than through detached timers, so teardown is just `clear`.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    active: Vec<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, notice: Notice, now: Instant) {
        let deadline = now + notice.ttl;
        self.active.insert(0, (notice, deadline));
    }

    /// Drop every notice whose deadline has passed.
    pub fn sweep(&mut self, now: Instant) {
        self.active.retain(|(_, deadline)| *deadline > now);
    }

    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.active.iter().map(|(notice, _)| notice)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
