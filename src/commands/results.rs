//! Results Commands
//!
//! Commands behind the results view: reading the active analysis
//! result and ending the session when the user navigates away.

use tauri::State;

use crate::models::feedback::AnalysisResult;
use crate::models::response::CommandResponse;
use crate::state::AppState;

/// Get the active analysis result for the results view
#[tauri::command]
pub async fn get_analysis_result(
    state: State<'_, AppState>,
) -> Result<CommandResponse<AnalysisResult>, String> {
    match state.sessions().result().await {
        Some(result) => Ok(CommandResponse::ok(result)),
        None => Ok(CommandResponse::err("No analysis result available")),
    }
}

/// End the result session when leaving the results view. The upload
/// form reopens with its previous file selection intact.
#[tauri::command]
pub async fn clear_analysis_result(
    state: State<'_, AppState>,
) -> Result<CommandResponse<()>, String> {
    state.sessions().clear().await;
    state.upload().write().await.reopen();
    Ok(CommandResponse::ok(()))
}
