//! Result Session
//!
//! Holds the outcome of the most recent successful analysis together
//! with its clarification chat history. The session has an explicit
//! lifecycle: created when an analysis succeeds, read by the results
//! view, cleared when the user leaves it. A chat response that arrives
//! after the session was cleared is silently dropped.

use tokio::sync::RwLock;

use crate::models::feedback::{AnalysisResult, ChatMessage};

struct ResultSession {
    result: AnalysisResult,
    chat: Vec<ChatMessage>,
}

/// Store for the single active result session
#[derive(Default)]
pub struct ResultSessionStore {
    inner: RwLock<Option<ResultSession>>,
}

impl ResultSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for a fresh analysis result, replacing any
    /// previous one (and its chat history)
    pub async fn create(&self, result: AnalysisResult) {
        let mut guard = self.inner.write().await;
        *guard = Some(ResultSession {
            result,
            chat: Vec::new(),
        });
    }

    /// Whether a session is currently active
    pub async fn is_active(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// The active session's analysis result, if any
    pub async fn result(&self) -> Option<AnalysisResult> {
        self.inner.read().await.as_ref().map(|s| s.result.clone())
    }

    /// The chat history so far; empty when no session is active
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|s| s.chat.clone())
            .unwrap_or_default()
    }

    /// Append a user message. No-op when no session is active.
    pub async fn push_user_message(&self, message: impl Into<String>) {
        self.push(ChatMessage::from_user(message)).await;
    }

    /// Append an assistant message. No-op when no session is active,
    /// which is how a late reply for a cleared session gets dropped.
    pub async fn push_assistant_message(&self, message: impl Into<String>) {
        self.push(ChatMessage::from_assistant(message)).await;
    }

    async fn push(&self, message: ChatMessage) {
        let mut guard = self.inner.write().await;
        if let Some(session) = guard.as_mut() {
            session.chat.push(message);
        }
    }

    /// End the session, discarding the result and chat history
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        *guard = None;
    }
}
