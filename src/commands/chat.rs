//! Chat Commands
//!
//! Commands behind the clarification chat on the results view.

use std::time::Duration;

use tauri::State;

use crate::models::feedback::ChatMessage;
use crate::models::response::CommandResponse;
use crate::services::parser::extract_essay_text;
use crate::state::AppState;

/// Assistant entry appended when the chat request fails for any reason
pub const CHAT_FALLBACK_REPLY: &str =
    "Sorry, I couldn't process your question right now. Please try again.";

/// Send a clarification question about the active analysis result.
///
/// The user entry is appended to the history immediately. The request
/// carries the raw feedback, the history so far, and an essay text
/// when one can be extracted from the feedback payload. Any failure
/// (transport, non-OK status, server-reported) appends a fixed
/// apologetic assistant entry instead of surfacing an error.
#[tauri::command]
pub async fn send_chat_message(
    state: State<'_, AppState>,
    message: String,
) -> Result<CommandResponse<Vec<ChatMessage>>, String> {
    let message = message.trim().to_string();
    if message.is_empty() {
        return Ok(CommandResponse::err("Message must not be empty"));
    }

    let Some(result) = state.sessions().result().await else {
        return Ok(CommandResponse::err("No analysis session is active"));
    };
    let config = match state.get_config().await {
        Ok(config) => config,
        Err(e) => return Ok(CommandResponse::err(e.to_string())),
    };

    // History before this message; the new question rides in `message`
    let history = state.sessions().history().await;
    state.sessions().push_user_message(&message).await;

    let essay_text = extract_essay_text(&result.feedback);
    let reply = state
        .grading()
        .chat(
            &config.chat_url,
            &message,
            &result.feedback,
            &history,
            essay_text.as_deref(),
            Duration::from_secs(config.request_timeout_secs),
        )
        .await;

    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("chat request failed: {}", e);
            CHAT_FALLBACK_REPLY.to_string()
        }
    };

    // Dropped silently if the session was cleared while waiting
    state.sessions().push_assistant_message(reply).await;

    Ok(CommandResponse::ok(state.sessions().history().await))
}

/// Get the chat history of the active session
#[tauri::command]
pub async fn get_chat_history(
    state: State<'_, AppState>,
) -> Result<CommandResponse<Vec<ChatMessage>>, String> {
    if !state.sessions().is_active().await {
        return Ok(CommandResponse::err("No analysis session is active"));
    }
    Ok(CommandResponse::ok(state.sessions().history().await))
}
