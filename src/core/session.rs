//! Per-operator transient session state
//!
//! Tracks whether the next free-text message from an operator should be
//! interpreted as a group-registration payload. State lives in process
//! memory only and is lost on restart; the operator just re-issues
//! /addgroup.

use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::ChatId;
use tokio::sync::Mutex;

/// What the bot expects next from a given operator.
///
/// A missing entry in the store is equivalent to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No pending input expected
    #[default]
    Idle,
    /// The operator's next free-text message is a `<id> <title>` payload
    AwaitingGroupEntry,
}

/// Keyed store of per-operator session state.
///
/// One slot per operator: setting `AwaitingGroupEntry` while a wait is
/// already pending restarts the wait rather than stacking. The store holds
/// its own mutex because teloxide may run handlers for distinct chats
/// concurrently; updates within one chat arrive serialized, so a handler's
/// read-then-clear sequence for its own operator never races.
#[derive(Clone, Default)]
pub struct SessionStore {
    states: Arc<Mutex<HashMap<ChatId, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for an operator; `Idle` when no entry exists.
    pub async fn get(&self, chat_id: ChatId) -> SessionState {
        let states = self.states.lock().await;
        states.get(&chat_id).copied().unwrap_or_default()
    }

    /// Set the state for an operator, overwriting any pending wait.
    pub async fn set(&self, chat_id: ChatId, state: SessionState) {
        let mut states = self.states.lock().await;
        states.insert(chat_id, state);
    }

    /// Reset an operator back to `Idle`.
    pub async fn clear(&self, chat_id: ChatId) {
        let mut states = self.states.lock().await;
        states.remove(&chat_id);
    }
}
