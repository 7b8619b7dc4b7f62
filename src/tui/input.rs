use crate::store::{Message, MessageStore};

// ── Draft editor with cursor ──────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize, // byte position
}

impl TextInput {
    pub fn new() -> Self { Self::default() }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 { return; }
        let prev = self.value[..self.cursor]
            .char_indices().next_back().map(|(i, _)| i).unwrap_or(0);
        self.value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete_char_after(&mut self) {
        if self.cursor >= self.value.len() { return; }
        self.value.remove(self.cursor);
    }

    pub fn move_left(&mut self) {
        if self.cursor == 0 { return; }
        self.cursor = self.value[..self.cursor]
            .char_indices().next_back().map(|(i, _)| i).unwrap_or(0);
    }

    pub fn move_right(&mut self) {
        if self.cursor >= self.value.len() { return; }
        let ch = self.value[self.cursor..].chars().next();
        self.cursor += ch.map(|c| c.len_utf8()).unwrap_or(0);
    }

    pub fn move_home(&mut self) { self.cursor = 0; }
    pub fn move_end(&mut self) { self.cursor = self.value.len(); }

    pub fn clear(&mut self) { self.value.clear(); self.cursor = 0; }

    /// Replace the whole value, cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.value = text.to_string();
        self.cursor = self.value.len();
    }

    /// Returns (text_before_cursor, cursor_char_or_space, text_after_cursor)
    /// for rendering a visible block cursor.
    pub fn split_at_cursor(&self) -> (&str, &str, &str) {
        let before = &self.value[..self.cursor];
        if self.cursor >= self.value.len() {
            (before, " ", "")
        } else {
            let ch_end = self.cursor
                + self.value[self.cursor..].chars().next().map(|c| c.len_utf8()).unwrap_or(1);
            (before, &self.value[self.cursor..ch_end], &self.value[ch_end..])
        }
    }
}

// ── Input controller ──────────────────────────────────────────────────────────

/// Owner of the transient draft — the one piece of state that is not part of
/// the log. Sole writer-adapter between raw input events and the store.
#[derive(Debug, Default)]
pub struct InputController {
    pub draft: TextInput,
}

impl InputController {
    pub fn new() -> Self { Self::default() }

    pub fn draft_text(&self) -> &str {
        &self.draft.value
    }

    /// Unconditional draft replacement; validation happens only on submit.
    pub fn set_draft(&mut self, text: &str) {
        self.draft.set(text);
    }

    /// Commit the draft to the store. A whitespace-only draft never reaches
    /// the log and is left in place untouched; on success the draft is
    /// cleared and the stored message returned. Every commit trigger (Enter,
    /// programmatic) lands here, so a repeated trigger on a cleared draft is
    /// a no-op.
    pub fn submit(&mut self, store: &mut MessageStore) -> Option<Message> {
        let appended = store.append(&self.draft.value)?.clone();
        self.draft.clear();
        Some(appended)
    }
}

// ── Draft key handler ─────────────────────────────────────────────────────────

pub fn handle_draft_key(input: &mut TextInput, key: crossterm::event::KeyEvent) {
    use crossterm::event::KeyCode;
    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_char_before(),
        KeyCode::Delete => input.delete_char_after(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        _ => {}
    }
}
