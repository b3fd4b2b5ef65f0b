//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod grading;
pub mod parser;
pub mod session;

pub use grading::GradingClient;
pub use parser::{extract_essay_text, FeedbackParser};
pub use session::ResultSessionStore;
