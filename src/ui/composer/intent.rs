//! Intents for the response generator view.

use crate::ui::mvi::Intent;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerIntent {
    /// Type a character at the cursor.
    InsertChar(char),
    /// Bracketed paste.
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Empty the draft.
    ClearDraft,

    /// User triggered dispatch. `request_id` tags the request if it starts.
    Submit { request_id: Uuid },

    /// Spinner tick while in flight.
    AnimationTick,

    /// Endpoint returned a reply.
    Completed { request_id: Uuid, response: String },

    /// Request failed for any reason. Carries the user-facing message only.
    Failed { request_id: Uuid, message: String },
}

impl Intent for ComposerIntent {}
