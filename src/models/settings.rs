//! Settings Models
//!
//! Application configuration and settings data structures.
//! The grading endpoints and the score scale are deliberately
//! configuration rather than constants baked into the code.

use serde::{Deserialize, Serialize};

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Analysis endpoint (multipart essay + rubric upload)
    #[serde(default = "default_analyze_url")]
    pub analyze_url: String,
    /// Clarification chat endpoint
    #[serde(default = "default_chat_url")]
    pub chat_url: String,
    /// Upper bound of the grading service's per-entry score scale in
    /// structured responses. Per-entry scores are mapped to 0-100 by
    /// multiplying with `100 / score_scale_max`.
    #[serde(default = "default_score_scale_max")]
    pub score_scale_max: f64,
    /// Timeout applied to each request to the grading service
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_analyze_url() -> String {
    "http://127.0.0.1:5000/analyze".to_string()
}

fn default_chat_url() -> String {
    "http://127.0.0.1:5000/chat".to_string()
}

fn default_score_scale_max() -> f64 {
    4.0
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analyze_url: default_analyze_url(),
            chat_url: default_chat_url(),
            score_scale_max: default_score_scale_max(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub analyze_url: Option<String>,
    pub chat_url: Option<String>,
    pub score_scale_max: Option<f64>,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(url) = update.analyze_url {
            self.analyze_url = url;
        }
        if let Some(url) = update.chat_url {
            self.chat_url = url;
        }
        if let Some(scale) = update.score_scale_max {
            self.score_scale_max = scale;
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
    }

    /// Validate the configuration, returning an error message on the
    /// first invalid field
    pub fn validate(&self) -> Result<(), String> {
        if !self.analyze_url.starts_with("http://") && !self.analyze_url.starts_with("https://") {
            return Err(format!("Invalid analyze URL: {}", self.analyze_url));
        }
        if !self.chat_url.starts_with("http://") && !self.chat_url.starts_with("https://") {
            return Err(format!("Invalid chat URL: {}", self.chat_url));
        }
        if !self.score_scale_max.is_finite() || self.score_scale_max <= 0.0 {
            return Err(format!(
                "Score scale max must be positive, got {}",
                self.score_scale_max
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be at least 1 second".to_string());
        }
        Ok(())
    }
}
