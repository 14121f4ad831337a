use metrics::{counter, gauge};

/// Metrics collector for server operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "courier" }
    }

    /// Record new websocket session established
    pub fn session_established(&self) {
        counter!(format!("{}.sessions.established", self.prefix)).increment(1);
        gauge!(format!("{}.sessions.active", self.prefix)).increment(1.0);
    }

    /// Record websocket session closed
    pub fn session_closed(&self) {
        counter!(format!("{}.sessions.closed", self.prefix)).increment(1);
        gauge!(format!("{}.sessions.active", self.prefix)).decrement(1.0);
    }

    /// Record snapshot pushed to a subscriber
    pub fn snapshot_sent(&self) {
        counter!(format!("{}.snapshots.sent", self.prefix)).increment(1);
    }

    /// Record a committed contact addition
    pub fn contact_added(&self) {
        counter!(format!("{}.contacts.added", self.prefix)).increment(1);
    }

    /// Record a persisted chat message
    pub fn message_sent(&self) {
        counter!(format!("{}.messages.sent", self.prefix)).increment(1);
    }

    /// Record error occurrence
    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
