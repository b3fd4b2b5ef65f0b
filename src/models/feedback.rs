//! Feedback Models
//!
//! Types describing the grading service's feedback, in both its raw
//! and normalized forms, plus the clarification chat messages.

use serde::{Deserialize, Serialize};

/// Unnormalized feedback payload as returned by the grading service.
///
/// The service has shipped several incompatible shapes over time: a
/// JSON object carrying a `results` array, and two plain-text formats
/// with markdown score blocks. `serde_json::Value` covers all of them;
/// the feedback parser detects the shape before interpreting it.
pub type RawFeedback = serde_json::Value;

/// One named rubric dimension with its score and feedback text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    /// Score on a 0-100 scale
    pub score: f64,
    pub feedback: String,
}

/// Normalized, UI-ready feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFeedback {
    /// Overall score, always an integer in [0, 100]
    pub overall_score: u32,
    /// Per-criterion breakdown, empty (never null) when nothing parsed
    pub criteria: Vec<Criterion>,
    pub general_feedback: String,
}

impl ParsedFeedback {
    /// The zero/empty value used when a payload cannot be interpreted
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            overall_score: 0,
            criteria: Vec::new(),
            general_feedback: message.into(),
        }
    }
}

/// One entry in the clarification chat history.
///
/// Field names match the chat endpoint's `chatHistory` wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// True for user messages, false for assistant replies
    pub user: bool,
    pub message: String,
}

impl ChatMessage {
    pub fn from_user(message: impl Into<String>) -> Self {
        Self {
            user: true,
            message: message.into(),
        }
    }

    pub fn from_assistant(message: impl Into<String>) -> Self {
        Self {
            user: false,
            message: message.into(),
        }
    }
}

/// The outcome of a successful analysis, held by the result session
/// until the user leaves the results view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Raw feedback as received, kept for chat context
    pub feedback: RawFeedback,
    pub parsed: ParsedFeedback,
    pub essay_name: String,
    pub rubric_name: String,
}
