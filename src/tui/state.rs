use ratatui::layout::Rect;
use std::time::Instant;

use crate::store::{Message, MessageStore};
use crate::tui::input::InputController;

// ── App state ─────────────────────────────────────────────────────────────────

pub struct App {
    /// Session-lifetime source of truth for the conversation.
    pub store: MessageStore,
    /// View-local, disposable draft state.
    pub input: InputController,
    pub status: String,
    pub status_set_at: Option<Instant>,
    /// Echo mode: each sent message comes back as a simulated incoming one.
    pub echo: bool,
    pub chat_scroll: u16,         // manual scroll offset for the conversation panel
    pub chat_scroll_manual: bool, // true while the user has scrolled away from the end
    /// Store revision the view has already reacted to.
    pub seen_revision: u64,
    /// Geometry of the conversation panel — set on first draw. `None` means
    /// the panel has never been mounted, so there is nothing to scroll.
    pub conv_rect: Option<Rect>,
    /// Last computed max_scroll for the conversation panel.
    pub conv_max_scroll: u16,
}

impl App {
    pub fn new(echo: bool) -> Self {
        App {
            store: MessageStore::new(),
            input: InputController::new(),
            status: String::new(),
            status_set_at: None,
            echo,
            chat_scroll: 0,
            chat_scroll_manual: false,
            seen_revision: 0,
            conv_rect: None,
            conv_max_scroll: 0,
        }
    }

    /// Commit the current draft. Both the Enter key and any programmatic
    /// trigger call this; a whitespace-only draft is a silent no-op.
    pub fn submit(&mut self) -> Option<Message> {
        self.input.submit(&mut self.store)
    }

    /// Simulated incoming message — the same append as a send, invoked by a
    /// different caller.
    pub fn receive(&mut self, text: &str) {
        self.store.append(text);
    }

    /// React to log changes: if the store moved since the last look, snap the
    /// conversation view to the newest entry. Never fires while the log is
    /// still empty at revision 0.
    pub fn observe_log(&mut self) {
        let rev = self.store.revision();
        if rev != self.seen_revision {
            self.seen_revision = rev;
            self.scroll_to_end();
        }
    }

    /// Pin the conversation view to the end of the log. No-op until the
    /// conversation panel has been drawn at least once.
    pub fn scroll_to_end(&mut self) {
        if self.conv_rect.is_none() {
            return;
        }
        self.chat_scroll_manual = false;
        self.chat_scroll = self.conv_max_scroll;
    }

    /// End key: with a draft in progress the cursor jumps to the end of the
    /// draft; with an empty draft it jumps the conversation to the newest
    /// entry and re-enables auto-follow.
    pub fn end_key(&mut self) {
        if self.input.draft_text().is_empty() {
            self.scroll_to_end();
        } else {
            self.input.draft.move_end();
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_sub(lines);
        self.chat_scroll_manual = true;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_add(lines);
        self.chat_scroll_manual = true;
    }

    pub fn toggle_echo(&mut self) {
        self.echo = !self.echo;
        self.set_status(if self.echo {
            "Echo ON — sent messages come back"
        } else {
            "Echo OFF"
        });
    }

    /// Transient status-line notice; the event-loop tick clears it after 3 s.
    pub fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.status_set_at = Some(Instant::now());
    }
}
