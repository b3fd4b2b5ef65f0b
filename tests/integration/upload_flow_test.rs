//! Upload Flow Integration Tests
//!
//! Walks the upload/submit state machine through the flows a user can
//! produce from the upload form.

use std::path::PathBuf;

use rubricxpert_desktop::models::upload::{UploadFlow, UploadPhase};

#[test]
fn test_analyze_disabled_with_only_essay() {
    let mut flow = UploadFlow::new();
    flow.select_essay(PathBuf::from("essay.pdf")).unwrap();

    assert!(!flow.can_submit());
    // The submit attempt is rejected before any request could be sent
    let err = flow.begin_submit().unwrap_err();
    assert!(err.to_string().contains("both essay and rubric"));
    assert_eq!(flow.phase(), UploadPhase::FilesSelected);
}

#[test]
fn test_full_success_path() {
    let mut flow = UploadFlow::new();
    flow.select_essay(PathBuf::from("essay.pdf")).unwrap();
    flow.select_rubric(PathBuf::from("rubric.pdf")).unwrap();
    assert!(flow.can_submit());

    let (essay, rubric) = flow.begin_submit().unwrap();
    assert_eq!(essay, PathBuf::from("essay.pdf"));
    assert_eq!(rubric, PathBuf::from("rubric.pdf"));
    assert_eq!(flow.phase(), UploadPhase::Submitting);
    assert!(flow.progress_percent() < 99);

    flow.finish_success();
    assert_eq!(flow.phase(), UploadPhase::Succeeded);
    assert_eq!(flow.progress_percent(), 100);
}

#[test]
fn test_failure_then_manual_retry() {
    let mut flow = UploadFlow::new();
    flow.select_essay(PathBuf::from("essay.pdf")).unwrap();
    flow.select_rubric(PathBuf::from("rubric.pdf")).unwrap();

    flow.begin_submit().unwrap();
    flow.finish_failure();

    // The files stay selected; a retry needs another explicit action
    assert_eq!(flow.phase(), UploadPhase::Failed);
    assert!(flow.can_submit());
    assert_eq!(flow.progress_percent(), 0);

    flow.begin_submit().unwrap();
    assert_eq!(flow.phase(), UploadPhase::Submitting);
}

#[test]
fn test_reselection_overwrites_slot() {
    let mut flow = UploadFlow::new();
    flow.select_essay(PathBuf::from("draft1.pdf")).unwrap();
    flow.select_essay(PathBuf::from("draft2.pdf")).unwrap();
    flow.select_rubric(PathBuf::from("rubric.pdf")).unwrap();

    let (essay, _) = flow.begin_submit().unwrap();
    assert_eq!(essay, PathBuf::from("draft2.pdf"));
}

#[test]
fn test_no_overlapping_submissions() {
    let mut flow = UploadFlow::new();
    flow.select_essay(PathBuf::from("essay.pdf")).unwrap();
    flow.select_rubric(PathBuf::from("rubric.pdf")).unwrap();

    flow.begin_submit().unwrap();
    assert!(flow.begin_submit().is_err());
    assert!(flow.select_rubric(PathBuf::from("other.pdf")).is_err());
}
