//! Storage Layer
//!
//! Handles data persistence; currently the JSON config file only.

pub mod config;

pub use config::*;
