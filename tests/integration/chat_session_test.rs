//! Result Session and Chat Integration Tests
//!
//! Exercises the session lifecycle and the chat flow as the commands
//! drive it, including the apology fallback when the chat endpoint is
//! unreachable.

use std::time::Duration;

use rubricxpert_desktop::commands::chat::CHAT_FALLBACK_REPLY;
use rubricxpert_desktop::models::feedback::AnalysisResult;
use rubricxpert_desktop::services::grading::GradingClient;
use rubricxpert_desktop::services::parser::extract_essay_text;
use rubricxpert_desktop::services::session::ResultSessionStore;
use rubricxpert_desktop::ParsedFeedback;
use serde_json::json;

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        feedback: json!({
            "results": [{"criterion": "Content", "score": 3, "feedback": "Good"}],
            "essay_text": "The essay body."
        }),
        parsed: ParsedFeedback {
            overall_score: 75,
            criteria: Vec::new(),
            general_feedback: String::new(),
        },
        essay_name: "essay.pdf".to_string(),
        rubric_name: "rubric.pdf".to_string(),
    }
}

#[tokio::test]
async fn test_session_lifecycle() {
    let store = ResultSessionStore::new();
    assert!(store.result().await.is_none());

    store.create(sample_result()).await;
    let result = store.result().await.unwrap();
    assert_eq!(result.essay_name, "essay.pdf");
    assert_eq!(result.parsed.overall_score, 75);

    store.clear().await;
    assert!(store.result().await.is_none());
}

#[tokio::test]
async fn test_chat_failure_appends_apology() {
    let store = ResultSessionStore::new();
    store.create(sample_result()).await;
    let result = store.result().await.unwrap();

    // This is the sequence send_chat_message drives: user entry first,
    // then one request, then the reply (or the apology) appended.
    let history = store.history().await;
    store.push_user_message("How can I improve?").await;

    let client = GradingClient::new();
    let reply = client
        .chat(
            "http://127.0.0.1:9/chat", // nothing listens here
            "How can I improve?",
            &result.feedback,
            &history,
            extract_essay_text(&result.feedback).as_deref(),
            Duration::from_secs(2),
        )
        .await
        .unwrap_or_else(|_| CHAT_FALLBACK_REPLY.to_string());

    store.push_assistant_message(reply).await;

    // History grew by exactly two entries: the question and the apology
    let history = store.history().await;
    assert_eq!(history.len(), 2);
    assert!(history[0].user);
    assert_eq!(history[0].message, "How can I improve?");
    assert!(!history[1].user);
    assert_eq!(history[1].message, CHAT_FALLBACK_REPLY);
}

#[tokio::test]
async fn test_late_reply_after_clear_is_discarded() {
    let store = ResultSessionStore::new();
    store.create(sample_result()).await;
    store.push_user_message("question").await;

    // The user leaves the results view while the request is in flight
    store.clear().await;
    store.push_assistant_message("late reply").await;

    assert!(store.history().await.is_empty());
}

#[tokio::test]
async fn test_essay_text_rides_along_when_present() {
    let result = sample_result();
    let essay = extract_essay_text(&result.feedback);
    assert_eq!(essay.as_deref(), Some("The essay body."));
}
