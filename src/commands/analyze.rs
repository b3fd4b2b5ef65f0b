//! Analysis Commands
//!
//! Commands behind the upload form: file selection, the analyze
//! action, and the cosmetic progress indicator shown while a request
//! is in flight.

use std::path::PathBuf;
use std::time::Duration;

use tauri::State;

use crate::models::feedback::{AnalysisResult, ParsedFeedback};
use crate::models::response::CommandResponse;
use crate::models::upload::UploadStateView;
use crate::services::parser::FeedbackParser;
use crate::state::AppState;

/// Select (or re-select) the essay file
#[tauri::command]
pub async fn select_essay_file(
    state: State<'_, AppState>,
    path: String,
) -> Result<CommandResponse<UploadStateView>, String> {
    let mut flow = state.upload().write().await;
    match flow.select_essay(PathBuf::from(path)) {
        Ok(()) => Ok(CommandResponse::ok(flow.view())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Select (or re-select) the rubric file
#[tauri::command]
pub async fn select_rubric_file(
    state: State<'_, AppState>,
    path: String,
) -> Result<CommandResponse<UploadStateView>, String> {
    let mut flow = state.upload().write().await;
    match flow.select_rubric(PathBuf::from(path)) {
        Ok(()) => Ok(CommandResponse::ok(flow.view())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Get a snapshot of the upload form state
#[tauri::command]
pub async fn get_upload_state(
    state: State<'_, AppState>,
) -> Result<CommandResponse<UploadStateView>, String> {
    let flow = state.upload().read().await;
    Ok(CommandResponse::ok(flow.view()))
}

/// Cosmetic progress percentage for the analyze button overlay
#[tauri::command]
pub async fn get_analysis_progress(
    state: State<'_, AppState>,
) -> Result<CommandResponse<u8>, String> {
    let flow = state.upload().read().await;
    Ok(CommandResponse::ok(flow.progress_percent()))
}

/// Submit the selected essay and rubric for analysis.
///
/// Requires both files to be selected; issues exactly one request. On
/// success a result session is created for the results view and the
/// parsed feedback is returned. On failure the upload form stays on
/// the selected files so the user can retry.
#[tauri::command]
pub async fn analyze_essay(
    state: State<'_, AppState>,
) -> Result<CommandResponse<ParsedFeedback>, String> {
    let config = match state.get_config().await {
        Ok(config) => config,
        Err(e) => return Ok(CommandResponse::err(e.to_string())),
    };

    let (essay, rubric) = {
        let mut flow = state.upload().write().await;
        match flow.begin_submit() {
            Ok(paths) => paths,
            Err(e) => return Ok(CommandResponse::err(e.to_string())),
        }
    };

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let outcome = state
        .grading()
        .analyze(&config.analyze_url, &essay, &rubric, timeout)
        .await;

    match outcome {
        Ok(raw) => {
            let parser = FeedbackParser::new(config.score_scale_max);
            let parsed = parser.parse(&raw);

            let result = AnalysisResult {
                feedback: raw,
                parsed: parsed.clone(),
                essay_name: file_name(&essay),
                rubric_name: file_name(&rubric),
            };
            state.sessions().create(result).await;
            state.upload().write().await.finish_success();

            tracing::info!(overall_score = parsed.overall_score, "analysis complete");
            Ok(CommandResponse::ok(parsed))
        }
        Err(e) => {
            state.upload().write().await.finish_failure();
            tracing::error!("analysis request failed: {}", e);
            Ok(CommandResponse::err(e.to_string()))
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
