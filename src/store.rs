use chrono::Local;

// ── Message log ───────────────────────────────────────────────────────────────

/// One chat message. Immutable once it enters the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    /// Local time-of-day at creation, e.g. "14:03:27". Non-decreasing in
    /// insertion order.
    pub timestamp: String,
}

/// Append-only, session-lifetime log of chat messages. Sole owner of the
/// sequence; the view layer reads snapshots and never mutates.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    revision: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message with the current wall-clock time. Input is trimmed;
    /// a whitespace-only string is rejected silently — no entry, no revision
    /// bump. Send and simulated receive both come through here.
    pub fn append(&mut self, text: &str) -> Option<&Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(Message {
            text: trimmed.to_string(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        });
        self.revision += 1;
        self.messages.last()
    }

    /// The log in insertion order: every successful append exactly once,
    /// never reordered.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Bumped on every successful append. The view compares revisions to
    /// detect new entries instead of aliasing the message vector.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
