//! Application State
//!
//! Global state managed by Tauri, containing all services.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::models::upload::UploadFlow;
use crate::services::grading::GradingClient;
use crate::services::session::ResultSessionStore;
use crate::storage::ConfigService;
use crate::utils::error::{AppError, AppResult};

/// Application state managed by Tauri
pub struct AppState {
    /// Configuration service for app settings
    config: Arc<RwLock<Option<ConfigService>>>,
    /// Upload form state machine
    upload: Arc<RwLock<UploadFlow>>,
    /// Active analysis result and its chat history
    sessions: ResultSessionStore,
    /// HTTP client for the grading service
    grading: GradingClient,
    /// Whether the state has been initialized
    initialized: Arc<RwLock<bool>>,
}

impl AppState {
    /// Create a new uninitialized app state
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            upload: Arc::new(RwLock::new(UploadFlow::new())),
            sessions: ResultSessionStore::new(),
            grading: GradingClient::new(),
            initialized: Arc::new(RwLock::new(false)),
        }
    }

    /// Initialize all services
    pub async fn initialize(&self) -> AppResult<()> {
        let mut initialized = self.initialized.write().await;
        if *initialized {
            return Ok(());
        }

        {
            let config = ConfigService::new()?;
            let mut config_lock = self.config.write().await;
            *config_lock = Some(config);
        }

        *initialized = true;
        Ok(())
    }

    /// Check if config is healthy
    pub fn is_config_healthy(&self) -> bool {
        // Use try_read to avoid blocking
        if let Ok(guard) = self.config.try_read() {
            if let Some(ref config) = *guard {
                return config.is_healthy();
            }
        }
        false
    }

    /// Get the current configuration
    pub async fn get_config(&self) -> AppResult<AppConfig> {
        let guard = self.config.read().await;
        match &*guard {
            Some(config) => Ok(config.get_config_clone()),
            None => Err(AppError::config("Config service not initialized")),
        }
    }

    /// Update the configuration
    pub async fn update_config(&self, update: SettingsUpdate) -> AppResult<AppConfig> {
        let mut guard = self.config.write().await;
        match &mut *guard {
            Some(config) => config.update_config(update),
            None => Err(AppError::config("Config service not initialized")),
        }
    }

    /// The upload form state machine
    pub fn upload(&self) -> &Arc<RwLock<UploadFlow>> {
        &self.upload
    }

    /// The result session store
    pub fn sessions(&self) -> &ResultSessionStore {
        &self.sessions
    }

    /// The grading service client
    pub fn grading(&self) -> &GradingClient {
        &self.grading
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("initialized", &self.initialized)
            .finish()
    }
}
