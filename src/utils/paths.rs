//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application's directories.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the RubricXpert directory (~/.rubricxpert/)
pub fn rubricxpert_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".rubricxpert"))
}

/// Get the config file path (~/.rubricxpert/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(rubricxpert_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the RubricXpert directory, creating if it doesn't exist
pub fn ensure_rubricxpert_dir() -> AppResult<PathBuf> {
    let path = rubricxpert_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dir() {
        let home = home_dir();
        assert!(home.is_ok());
    }

    #[test]
    fn test_rubricxpert_dir() {
        let dir = rubricxpert_dir();
        assert!(dir.is_ok());
        assert!(dir.unwrap().to_string_lossy().contains(".rubricxpert"));
    }

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.is_ok());
        assert!(path.unwrap().to_string_lossy().contains("config.json"));
    }
}
