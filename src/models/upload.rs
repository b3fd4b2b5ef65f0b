//! Upload Flow Model
//!
//! State machine behind the upload form: two independent file slots
//! (essay and rubric), a submission phase, and the cosmetic progress
//! value shown while an analysis request is in flight.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// How long the cosmetic progress bar takes to ramp to 99%
const PROGRESS_RAMP_MS: u64 = 15_000;

/// Progress ceiling while a request is still pending
const PROGRESS_CEILING: f64 = 99.0;

/// Phases of the upload/submit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPhase {
    #[default]
    Idle,
    FilesSelected,
    Submitting,
    Succeeded,
    Failed,
}

/// Snapshot of the upload flow sent to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadStateView {
    pub phase: UploadPhase,
    pub essay_name: Option<String>,
    pub rubric_name: Option<String>,
    pub can_submit: bool,
    pub progress: u8,
}

/// The upload/submit state machine.
///
/// File selection fills the two slots independently; submission is
/// only accepted once both are populated. A failed submission returns
/// to the files-selected state so the user can retry. No file type or
/// size validation is enforced here; the file pickers carry an
/// advisory extension filter only.
#[derive(Debug, Default)]
pub struct UploadFlow {
    essay: Option<PathBuf>,
    rubric: Option<PathBuf>,
    phase: UploadPhase,
    submitted_at: Option<Instant>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select (or re-select) the essay file
    pub fn select_essay(&mut self, path: PathBuf) -> AppResult<()> {
        self.select(path, true)
    }

    /// Select (or re-select) the rubric file
    pub fn select_rubric(&mut self, path: PathBuf) -> AppResult<()> {
        self.select(path, false)
    }

    fn select(&mut self, path: PathBuf, essay: bool) -> AppResult<()> {
        if self.phase == UploadPhase::Submitting {
            return Err(AppError::validation(
                "Analysis in progress, please wait for it to finish",
            ));
        }
        if essay {
            self.essay = Some(path);
        } else {
            self.rubric = Some(path);
        }
        self.phase = UploadPhase::FilesSelected;
        Ok(())
    }

    /// Whether both slots are populated
    pub fn is_complete(&self) -> bool {
        self.essay.is_some() && self.rubric.is_some()
    }

    /// Whether the analyze action is currently available
    pub fn can_submit(&self) -> bool {
        self.is_complete() && self.phase != UploadPhase::Submitting
    }

    /// Transition to Submitting, returning the two selected paths.
    ///
    /// Rejected while a submission is already pending or while either
    /// slot is empty; no request may be issued in those cases.
    pub fn begin_submit(&mut self) -> AppResult<(PathBuf, PathBuf)> {
        if self.phase == UploadPhase::Submitting {
            return Err(AppError::validation("An analysis is already in progress"));
        }
        let (essay, rubric) = match (&self.essay, &self.rubric) {
            (Some(e), Some(r)) => (e.clone(), r.clone()),
            _ => {
                return Err(AppError::validation(
                    "Please upload both essay and rubric files",
                ))
            }
        };
        self.phase = UploadPhase::Submitting;
        self.submitted_at = Some(Instant::now());
        Ok((essay, rubric))
    }

    /// Record a successful analysis; progress snaps to 100
    pub fn finish_success(&mut self) {
        self.phase = UploadPhase::Succeeded;
        self.submitted_at = None;
    }

    /// Record a failed analysis; the selected files are kept so the
    /// user can retry with another explicit action
    pub fn finish_failure(&mut self) {
        self.phase = UploadPhase::Failed;
        self.submitted_at = None;
    }

    /// Return from the results view to the upload form
    pub fn reopen(&mut self) {
        self.phase = if self.essay.is_some() || self.rubric.is_some() {
            UploadPhase::FilesSelected
        } else {
            UploadPhase::Idle
        };
        self.submitted_at = None;
    }

    /// Cosmetic progress percentage: ramps toward (never reaching) 99
    /// while submitting, 100 once the response has arrived, 0 otherwise
    pub fn progress_percent(&self) -> u8 {
        match self.phase {
            UploadPhase::Submitting => {
                let elapsed_ms = self
                    .submitted_at
                    .map(|t| t.elapsed().as_millis() as f64)
                    .unwrap_or(0.0);
                let pct = (elapsed_ms / PROGRESS_RAMP_MS as f64) * PROGRESS_CEILING;
                pct.min(PROGRESS_CEILING).floor() as u8
            }
            UploadPhase::Succeeded => 100,
            _ => 0,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn essay_name(&self) -> Option<String> {
        file_name(self.essay.as_deref())
    }

    pub fn rubric_name(&self) -> Option<String> {
        file_name(self.rubric.as_deref())
    }

    /// Snapshot for the frontend
    pub fn view(&self) -> UploadStateView {
        UploadStateView {
            phase: self.phase,
            essay_name: self.essay_name(),
            rubric_name: self.rubric_name(),
            can_submit: self.can_submit(),
            progress: self.progress_percent(),
        }
    }
}

fn file_name(path: Option<&std::path::Path>) -> Option<String> {
    path.and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
}
