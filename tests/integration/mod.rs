//! Integration Tests Module
//!
//! End-to-end tests for the RubricXpert backend: feedback parsing
//! across all historical response shapes, the upload/submit state
//! machine, and the result session with its clarification chat.

// Feedback parser end-to-end tests
mod parser_test;

// Upload/submit flow tests
mod upload_flow_test;

// Result session and chat fallback tests
mod chat_session_test;
