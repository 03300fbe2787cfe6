//! Session types for the rolling conversation history.
//!
//! A [`Session`] owns the full turn sequence for one chat invocation. The
//! history is append-only; only the most recent [`crate::HISTORY_WINDOW`]
//! turns are sent to the webhook as context, older turns stay local. Nothing
//! is persisted across restarts.

use serde::{Deserialize, Serialize};

use crate::relay::HISTORY_WINDOW;

/// One completed user/bot exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// What the user typed.
    pub user: String,
    /// What the webhook answered (or the placeholder substitute).
    pub bot: String,
}

/// Conversation history owned by a single chat session.
#[derive(Debug, Default)]
pub struct Session {
    turns: Vec<ConversationTurn>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn.
    pub fn push(&mut self, user: impl Into<String>, bot: impl Into<String>) {
        self.turns.push(ConversationTurn {
            user: user.into(),
            bot: bot.into(),
        });
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// The most recent turns sent to the webhook as context.
    pub fn context_window(&self) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(HISTORY_WINDOW);
        &self.turns[start..]
    }

    /// Number of turns recorded so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the session has any turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
