//! Tauri Commands
//!
//! Contains all Tauri command handlers that can be called from the frontend.
//! These are the IPC entry points for the application.

pub mod analyze;
pub mod chat;
pub mod health;
pub mod init;
pub mod results;
pub mod settings;

pub use analyze::*;
pub use chat::*;
pub use health::*;
pub use init::*;
pub use results::*;
pub use settings::*;
