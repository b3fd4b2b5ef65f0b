//! RubricXpert Desktop - Rust Backend Library
//!
//! This library provides the core backend functionality for the RubricXpert
//! desktop application. It includes:
//! - Tauri command handlers for frontend IPC
//! - The feedback parser normalizing the grading service's responses
//! - The upload/submit state machine and result session
//! - Storage layer (JSON config) and the grading service HTTP client

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::{
    // Init commands
    init_app, get_version,
    // Health commands
    get_health,
    // Settings commands
    get_settings, update_settings,
    // Upload/analysis commands
    select_essay_file, select_rubric_file, get_upload_state, get_analysis_progress, analyze_essay,
    // Results commands
    get_analysis_result, clear_analysis_result,
    // Chat commands
    send_chat_message, get_chat_history,
};
pub use models::feedback::{AnalysisResult, ChatMessage, Criterion, ParsedFeedback, RawFeedback};
pub use models::response::*;
pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::parser::FeedbackParser;
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
