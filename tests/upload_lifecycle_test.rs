//! Upload Simulation Tests
//!
//! Browser tests for the timer-driven upload lifecycle. The pure pieces
//! (extension filtering, progress stepping) are covered by native unit tests;
//! these exercise the signal-backed state and the async ticker.

use doclens_frontend::components::upload::{
    simulate_upload, UploadState, UploadStatus, PROCESSING_DELAY_MS, TICK_INTERVAL_MS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Full simulated transfer plus a safety margin
const FULL_LIFECYCLE_MS: u32 = 20 * TICK_INTERVAL_MS + PROCESSING_DELAY_MS + 500;

// ============================================================================
// Admission
// ============================================================================

#[wasm_bindgen_test]
fn test_admission_filters_by_extension() {
    let state = UploadState::new();

    let admitted = state.admit_files(vec![
        ("Annual Report 2022.pdf".to_string(), 1024.0),
        ("photo.png".to_string(), 2048.0),
        ("Financial Statement.docx".to_string(), 512.0),
        ("notes.txt".to_string(), 64.0),
        ("archive.zip".to_string(), 4096.0),
    ]);

    assert_eq!(admitted.len(), 3);
    let entries = state.entries.get();
    assert_eq!(entries.len(), 3);
    let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Annual Report 2022.pdf",
            "Financial Statement.docx",
            "archive.zip"
        ]
    );
    assert!(entries.iter().all(|e| e.status == UploadStatus::Idle));
    assert!(entries.iter().all(|e| e.progress == 0));
}

#[wasm_bindgen_test]
fn test_removal_discards_entry() {
    let state = UploadState::new();
    let admitted = state.admit_files(vec![
        ("a.pdf".to_string(), 1.0),
        ("b.pdf".to_string(), 1.0),
    ]);

    state.remove_entry(admitted[0]);

    let entries = state.entries.get();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name, "b.pdf");
}

#[wasm_bindgen_test]
fn test_all_complete_requires_at_least_one_entry() {
    let state = UploadState::new();
    assert!(!state.all_complete());
}

// ============================================================================
// Simulated lifecycle
// ============================================================================

#[wasm_bindgen_test]
async fn test_progress_is_monotonic_and_completes() {
    let state = UploadState::new();
    let admitted = state.admit_files(vec![("report.pdf".to_string(), 1024.0)]);
    let id = admitted[0];

    simulate_upload(state.entries, id);

    // Sample the entry while it runs; progress must never go backwards and
    // Processing must only appear at exactly 100.
    let mut last_progress = 0u8;
    let mut saw_processing = false;
    for _ in 0..80 {
        TimeoutFuture::new(TICK_INTERVAL_MS / 2).await;
        let Some(entry) = state.entries.get().into_iter().find(|e| e.id == id) else {
            panic!("entry disappeared during simulation");
        };
        assert!(
            entry.progress >= last_progress,
            "progress went backwards: {} -> {}",
            last_progress,
            entry.progress
        );
        last_progress = entry.progress;

        match entry.status {
            UploadStatus::Processing => {
                assert_eq!(entry.progress, 100, "Processing before progress hit 100");
                saw_processing = true;
            }
            UploadStatus::Complete => {
                assert!(saw_processing, "Complete without passing through Processing");
                assert_eq!(entry.progress, 100);
                assert!(state.all_complete());
                return;
            }
            _ => {}
        }
    }
    panic!("upload never completed");
}

#[wasm_bindgen_test]
async fn test_entries_upload_concurrently() {
    let state = UploadState::new();
    let admitted = state.admit_files(vec![
        ("first.pdf".to_string(), 1.0),
        ("second.docx".to_string(), 1.0),
    ]);
    for id in &admitted {
        simulate_upload(state.entries, *id);
    }

    // Both tickers run independently; after one full lifecycle both are done
    TimeoutFuture::new(FULL_LIFECYCLE_MS).await;

    let entries = state.entries.get();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.status == UploadStatus::Complete));
    assert!(state.all_complete());
}

#[wasm_bindgen_test]
async fn test_removal_mid_flight_stops_the_ticker() {
    let state = UploadState::new();
    let admitted = state.admit_files(vec![("doomed.pdf".to_string(), 1.0)]);
    let id = admitted[0];

    simulate_upload(state.entries, id);

    // Let it make some progress, then pull the entry out from under it
    TimeoutFuture::new(5 * TICK_INTERVAL_MS).await;
    state.remove_entry(id);

    TimeoutFuture::new(FULL_LIFECYCLE_MS).await;
    assert!(state.entries.get().is_empty(), "removed entry came back");
}
