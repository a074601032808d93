//! Session storage implementation
//!
//! Sessions live in process memory only. They are never persisted and never
//! expire; a conversation the user abandons stays in the map until the user
//! starts, confirms or cancels another one.

use std::sync::Arc;
use dashmap::DashMap;
use tracing::debug;
use super::session::Session;

/// In-memory session store keyed by chat id
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<i64, Session>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the session of a user
    pub fn get(&self, user_id: i64) -> Option<Session> {
        let session = self.sessions.get(&user_id).map(|entry| entry.value().clone());
        debug!(user_id = user_id, found = session.is_some(), "Loaded session");
        session
    }

    /// Save a session, replacing whatever the user had before
    pub fn set(&self, user_id: i64, session: Session) {
        debug!(user_id = user_id, flow = session.flow(), step = session.step_name(), "Saving session");
        if let Some(previous) = self.sessions.insert(user_id, session) {
            debug!(user_id = user_id, replaced_flow = previous.flow(), replaced_step = previous.step_name(),
                   "Replaced existing session");
        }
    }

    /// Remove the session of a user, returning it if there was one
    pub fn delete(&self, user_id: i64) -> Option<Session> {
        let removed = self.sessions.remove(&user_id).map(|(_, session)| session);
        if removed.is_some() {
            debug!("Deleted session for user {}", user_id);
        } else {
            debug!("No session to delete for user {}", user_id);
        }
        removed
    }

    /// Check if a session exists for a user
    pub fn contains(&self, user_id: i64) -> bool {
        self.sessions.contains_key(&user_id)
    }

    /// Number of users with a session
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
