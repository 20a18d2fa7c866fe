//! Input handling for the ListGroup widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::ListGroup;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl ListGroup {
    /// Handle a click on the header row.
    pub fn on_click(&self) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        self.click();
        EventResult::Consumed
    }

    /// Handle a key press while the header is focused.
    ///
    /// Enter without modifiers toggles the group; every other key is left
    /// for the surrounding list.
    pub fn on_key(&self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release || !key.modifiers.is_empty() {
            return EventResult::Ignored;
        }

        match key.code {
            KeyCode::Enter => self.on_click(),
            _ => EventResult::Ignored,
        }
    }
}
