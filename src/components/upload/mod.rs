//! Upload Module
//!
//! Drag-and-drop document intake with a simulated transfer lifecycle.
//! Each admitted file advances Idle -> Uploading -> Processing -> Complete
//! on its own timer; there is no real transport behind it.

mod file_uploader;

#[cfg(test)]
mod tests;

pub use file_uploader::FileUploader;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::components::A;
use phosphor_leptos::{Icon, ARROW_LEFT};
use uuid::Uuid;

use crate::components::design_system::BadgeVariant;

// ============================================================================
// Types
// ============================================================================

/// Extensions accepted by the drop zone and browse input
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "zip"];

/// Progress gained per simulated tick
pub const PROGRESS_STEP: u8 = 5;
/// Interval between simulated ticks
pub const TICK_INTERVAL_MS: u32 = 100;
/// Dwell time in Processing before an entry completes
pub const PROCESSING_DELAY_MS: u32 = 1500;

/// Lifecycle of one tracked upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Processing,
    Complete,
    Error,
}

impl UploadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "Ready",
            UploadStatus::Uploading => "Uploading",
            UploadStatus::Processing => "Processing",
            UploadStatus::Complete => "Complete",
            UploadStatus::Error => "Error",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            UploadStatus::Idle => BadgeVariant::Default,
            UploadStatus::Uploading => BadgeVariant::Info,
            UploadStatus::Processing => BadgeVariant::Warning,
            UploadStatus::Complete => BadgeVariant::Success,
            UploadStatus::Error => BadgeVariant::Danger,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Complete | UploadStatus::Error)
    }
}

/// Document kind, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Docx,
    Doc,
    Zip,
}

impl FileKind {
    pub fn from_name(name: &str) -> Option<FileKind> {
        match file_extension(name)?.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            "doc" => Some(FileKind::Doc),
            "zip" => Some(FileKind::Zip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
            FileKind::Doc => "doc",
            FileKind::Zip => "zip",
        }
    }

    /// Tint for the file-type icon
    pub fn icon_class(&self) -> &'static str {
        match self {
            FileKind::Pdf => "text-red-400",
            FileKind::Docx | FileKind::Doc => "text-blue-400",
            FileKind::Zip => "text-yellow-400",
        }
    }
}

/// One tracked file
#[derive(Debug, Clone, PartialEq)]
pub struct UploadEntry {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: f64,
    pub kind: FileKind,
    /// 0-100, non-decreasing
    pub progress: u8,
    pub status: UploadStatus,
    pub error: Option<String>,
}

impl UploadEntry {
    pub fn new(file_name: String, size_bytes: f64, kind: FileKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            size_bytes,
            kind,
            progress: 0,
            status: UploadStatus::Idle,
            error: None,
        }
    }
}

// ============================================================================
// Pure Helpers
// ============================================================================

/// Extension after the final dot, lowercased
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Whether a file name passes the extension allow-set
pub fn is_supported_file(name: &str) -> bool {
    file_extension(name)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Advance a progress value by one tick, clamped to 100
pub fn next_progress(progress: u8) -> u8 {
    progress.saturating_add(PROGRESS_STEP).min(100)
}

// ============================================================================
// Upload State Context
// ============================================================================

/// Shared upload state for the drop zone and file rows
#[derive(Clone, Copy)]
pub struct UploadState {
    pub entries: RwSignal<Vec<UploadEntry>>,
    pub is_drag_over: RwSignal<bool>,
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            is_drag_over: RwSignal::new(false),
        }
    }

    /// Admit a batch of candidate files as (name, size) pairs.
    /// Unsupported extensions are dropped without comment; returns the ids
    /// of the entries that were created.
    pub fn admit_files(&self, files: Vec<(String, f64)>) -> Vec<Uuid> {
        let mut admitted = Vec::new();
        for (name, size) in files {
            let Some(kind) = FileKind::from_name(&name) else {
                continue;
            };
            let entry = UploadEntry::new(name, size, kind);
            admitted.push(entry.id);
            self.entries.update(|list| list.push(entry));
        }
        admitted
    }

    pub fn remove_entry(&self, id: Uuid) {
        self.entries.update(|list| list.retain(|e| e.id != id));
    }

    /// True once every entry (at least one) has finished processing
    pub fn all_complete(&self) -> bool {
        let entries = self.entries.get();
        !entries.is_empty() && entries.iter().all(|e| e.status == UploadStatus::Complete)
    }
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_upload_state() -> UploadState {
    expect_context::<UploadState>()
}

// ============================================================================
// Simulated Lifecycle
// ============================================================================

fn update_entry(
    entries: RwSignal<Vec<UploadEntry>>,
    id: Uuid,
    f: impl FnOnce(&mut UploadEntry),
) -> bool {
    let mut found = false;
    entries.update(|list| {
        if let Some(entry) = list.iter_mut().find(|e| e.id == id) {
            f(entry);
            found = true;
        }
    });
    found
}

/// Drive one entry through the simulated lifecycle.
///
/// The ticker re-resolves the entry by id on every step and exits quietly
/// when the entry has been removed, so removal mid-flight needs no extra
/// cancellation plumbing.
pub fn simulate_upload(entries: RwSignal<Vec<UploadEntry>>, id: Uuid) {
    spawn_local(async move {
        if !update_entry(entries, id, |e| e.status = UploadStatus::Uploading) {
            return;
        }

        loop {
            TimeoutFuture::new(TICK_INTERVAL_MS).await;
            let mut reached_full = false;
            let alive = update_entry(entries, id, |e| {
                e.progress = next_progress(e.progress);
                if e.progress == 100 {
                    e.status = UploadStatus::Processing;
                    reached_full = true;
                }
            });
            if !alive {
                return;
            }
            if reached_full {
                break;
            }
        }

        TimeoutFuture::new(PROCESSING_DELAY_MS).await;
        update_entry(entries, id, |e| e.status = UploadStatus::Complete);
    });
}

/// Admit browser file handles and start their simulated uploads
pub fn ingest_file_list(state: &UploadState, files: Option<web_sys::FileList>) {
    let Some(files) = files else {
        return;
    };
    let mut batch = Vec::new();
    for i in 0..files.length() {
        if let Some(file) = files.item(i) {
            batch.push((file.name(), file.size()));
        }
    }
    for id in state.admit_files(batch) {
        simulate_upload(state.entries, id);
    }
}

// ============================================================================
// Upload Page
// ============================================================================

#[component]
pub fn Upload() -> impl IntoView {
    // Fresh state per visit; leaving the page discards tracked entries
    let state = UploadState::new();
    provide_context(state);

    view! {
        <div class="max-w-3xl mx-auto px-4 py-10">
            <A
                href="/dashboard"
                attr:class="inline-flex items-center gap-1.5 text-sm text-gray-400 hover:text-gray-200 transition-colors mb-6"
            >
                <Icon icon=ARROW_LEFT size="14px" />
                "Back to Dashboard"
            </A>
            <h1 class="text-2xl font-bold text-gray-100">"Upload Documents"</h1>
            <p class="text-gray-400 mt-1 mb-8">"Add new documents to start analyzing"</p>
            <FileUploader />
        </div>
    }
}
