//! Conversational session
//!
//! Turn-based state machine over the chat endpoint. Sending appends the user
//! turn and a pending bot placeholder, then resolves the placeholder in place
//! once the gateway call returns. The session tracks the total user-turn
//! count, the set of distinct non-"general" topic categories seen, and the
//! current quick-reply set. One session lives for one page view; `reset`
//! is the teardown for navigation away.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, GatewayError};
use crate::model::chat::{ChatRequest, ChatResponse};

/// Placeholder content shown while a bot reply is outstanding.
pub const PENDING_PLACEHOLDER: &str = "Thinking\u{2026}";

/// Topic category that is never counted as a distinct topic.
const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// User message appended and counters updated.
    Sent,
    /// Placeholder bot turn shown while the call is outstanding.
    Pending,
    /// Placeholder replaced in place with the formatted response.
    Resolved,
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub state: TurnState,
    pub content: String,
}

#[derive(Debug, Default)]
struct SessionState {
    turns: Vec<Turn>,
    user_turns: usize,
    topics: BTreeSet<String>,
    quick_replies: Vec<String>,
    /// Bumped by `reset`; replies from an earlier generation are dropped.
    generation: u64,
}

pub struct ChatSession {
    gateway: Arc<AnalysisGateway>,
    state: RwLock<SessionState>,
}

impl ChatSession {
    pub fn new(gateway: Arc<AnalysisGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Sends one user message through the full turn cycle.
    ///
    /// Blank input is a no-op. On gateway failure the placeholder stays
    /// pending and the error is returned as the user-visible notice.
    pub async fn send(&self, message: &str) -> Result<(), GatewayError> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(());
        }

        let (generation, pending_index) = {
            let mut state = self.state.write().unwrap();
            state.turns.push(Turn {
                role: Role::User,
                state: TurnState::Sent,
                content: message.to_string(),
            });
            state.user_turns += 1;
            state.turns.push(Turn {
                role: Role::Bot,
                state: TurnState::Pending,
                content: PENDING_PLACEHOLDER.to_string(),
            });
            (state.generation, state.turns.len() - 1)
        };

        let response: ChatResponse = self
            .gateway
            .call(
                endpoints::CHAT,
                &ChatRequest {
                    message: message.to_string(),
                },
            )
            .await?;

        let mut state = self.state.write().unwrap();
        if state.generation != generation {
            debug!("session was reset while the reply was outstanding, dropping it");
            return Ok(());
        }
        let turn = &mut state.turns[pending_index];
        turn.content = format_response(&response.response);
        turn.state = TurnState::Resolved;
        if response.category != DEFAULT_CATEGORY {
            state.topics.insert(response.category.clone());
        }
        if let Some(quick_replies) = response.quick_replies {
            debug!(count = quick_replies.len(), "quick replies replaced");
            state.quick_replies = quick_replies;
        }
        Ok(())
    }

    /// Sends the quick reply at `index` through the same flow as typed
    /// input. Out-of-range indexes are a no-op.
    pub async fn send_quick_reply(&self, index: usize) -> Result<(), GatewayError> {
        let message = {
            let state = self.state.read().unwrap();
            state.quick_replies.get(index).cloned()
        };
        match message {
            Some(message) => self.send(&message).await,
            None => Ok(()),
        }
    }

    pub fn turns(&self) -> Vec<Turn> {
        self.state.read().unwrap().turns.clone()
    }

    /// Total number of user turns sent.
    pub fn user_turn_count(&self) -> usize {
        self.state.read().unwrap().user_turns
    }

    /// Number of distinct non-"general" topic categories seen.
    pub fn topic_count(&self) -> usize {
        self.state.read().unwrap().topics.len()
    }

    pub fn quick_replies(&self) -> Vec<String> {
        self.state.read().unwrap().quick_replies.clone()
    }

    /// Clears the session: turns, counters, topics, quick replies. Replies
    /// still outstanding when the session is reset are dropped on arrival.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap();
        *state = SessionState {
            generation: state.generation + 1,
            ..SessionState::default()
        };
    }
}

/// Formats a service response for display: bullets always start on a new
/// line, however the service formatted them.
pub fn format_response(text: &str) -> String {
    text.replace('\u{2022}', "\n\u{2022}")
}
