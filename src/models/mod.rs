//! Data Models
//!
//! Contains all data structures used throughout the application.

pub mod feedback;
pub mod response;
pub mod settings;
pub mod upload;

pub use feedback::*;
pub use response::*;
pub use settings::*;
pub use upload::*;
