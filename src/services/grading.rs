//! Grading Service Client
//!
//! HTTP client for the external grading service's two endpoints:
//! `/analyze` (multipart essay + rubric upload) and `/chat`
//! (clarification questions about the returned feedback).
//!
//! One best-effort request per call; retries stay a user action.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::feedback::{ChatMessage, RawFeedback};
use crate::utils::error::{AppError, AppResult};

/// Client for the external grading service
pub struct GradingClient {
    client: reqwest::Client,
}

/// Wire format of the `/analyze` response
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    success: bool,
    feedback: Option<Value>,
    error: Option<String>,
}

/// Wire format of the `/chat` request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    feedback: &'a Value,
    #[serde(rename = "chatHistory")]
    chat_history: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    essay_text: Option<&'a str>,
}

/// Wire format of the `/chat` response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    success: bool,
    response: Option<String>,
    error: Option<String>,
}

impl GradingClient {
    /// Create a new grading client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Submit an essay and rubric for analysis, returning the raw
    /// feedback payload on success.
    pub async fn analyze(
        &self,
        url: &str,
        essay: &Path,
        rubric: &Path,
        timeout: Duration,
    ) -> AppResult<RawFeedback> {
        let form = multipart::Form::new()
            .part("essay", file_part(essay).await?)
            .part("rubric", file_part(rubric).await?);

        tracing::info!(url, "submitting essay and rubric for analysis");

        let response = self
            .client
            .post(url)
            .multipart(form)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AppError::parse(format!("Failed to parse analyze response: {}", e)))?;

        if !status.is_success() || !body.success {
            let message = body
                .error
                .unwrap_or_else(|| format!("analyze request failed with status {}", status));
            return Err(AppError::api(message));
        }

        body.feedback
            .ok_or_else(|| AppError::api("analyze response carried no feedback"))
    }

    /// Ask the chat endpoint a clarification question about existing
    /// feedback. The full raw feedback, the history so far, and an
    /// opportunistically extracted essay text ride along as context.
    pub async fn chat(
        &self,
        url: &str,
        message: &str,
        feedback: &Value,
        chat_history: &[ChatMessage],
        essay_text: Option<&str>,
        timeout: Duration,
    ) -> AppResult<String> {
        let request = ChatRequest {
            message,
            feedback,
            chat_history,
            essay_text,
        };

        let response = self
            .client
            .post(url)
            .json(&request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api(format!(
                "chat request failed with status {}",
                status
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::parse(format!("Failed to parse chat response: {}", e)))?;

        if !body.success {
            return Err(AppError::api(
                body.error.unwrap_or_else(|| "chat request failed".to_string()),
            ));
        }

        body.response
            .ok_or_else(|| AppError::api("chat response carried no reply"))
    }
}

impl Default for GradingClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a file into a multipart part carrying its original filename
async fn file_part(path: &Path) -> AppResult<multipart::Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    Ok(multipart::Part::bytes(bytes).file_name(file_name))
}
