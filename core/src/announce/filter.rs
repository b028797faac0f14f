//! Duplicate suppression.
//!
//! The filter is the final gate before text leaves the engine. It keeps
//! only the single most-recently-emitted record: a candidate is suppressed
//! when its text matches that record, its priority is below High, and the
//! record is younger than the duplicate window. High and Immediate bypass
//! the identical-text suppression so turn changes and game results always
//! land.

use chrono::{Duration, NaiveDateTime};
use herald_types::Priority;

/// One announcement ready for the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub priority: Priority,
}

/// The most recently emitted announcement, with its emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementRecord {
    pub text: String,
    pub priority: Priority,
    pub timestamp: NaiveDateTime,
}

/// Last-record duplicate gate.
#[derive(Debug, Clone)]
pub struct DuplicateFilter {
    window: Duration,
    last: Option<AnnouncementRecord>,
}

impl DuplicateFilter {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: Duration::milliseconds(window_ms as i64),
            last: None,
        }
    }

    /// Whether a candidate should be suppressed against the last record.
    pub fn should_suppress(&self, text: &str, priority: Priority, now: NaiveDateTime) -> bool {
        let Some(last) = &self.last else {
            return false;
        };
        text == last.text && priority < Priority::High && now - last.timestamp < self.window
    }

    /// Record an emission as the new "last" announcement.
    pub fn record(&mut self, text: String, priority: Priority, now: NaiveDateTime) {
        self.last = Some(AnnouncementRecord {
            text,
            priority,
            timestamp: now,
        });
    }

    /// Run the gate: `None` when suppressed, otherwise the admitted
    /// announcement, which becomes the new last record.
    pub fn admit(
        &mut self,
        text: String,
        priority: Priority,
        now: NaiveDateTime,
    ) -> Option<Announcement> {
        if self.should_suppress(&text, priority, now) {
            tracing::trace!("[ANNOUNCE] Suppressed duplicate: {text}");
            return None;
        }
        self.record(text.clone(), priority, now);
        Some(Announcement { text, priority })
    }

    pub fn last(&self) -> Option<&AnnouncementRecord> {
        self.last.as_ref()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
