//! Drop zone and per-file rows for the upload page

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use phosphor_leptos::{Icon, CLOUD_ARROW_UP, FILE_DOC, FILE_PDF, FILE_ZIP, X};

use super::{
    ingest_file_list, use_upload_state, FileKind, UploadEntry, UploadStatus, SUPPORTED_EXTENSIONS,
};
use crate::components::design_system::{Badge, Button};
use crate::services::notification_service::show_success;
use crate::utils::formatting::format_file_size;

#[component]
pub fn FileUploader() -> impl IntoView {
    let state = use_upload_state();
    let file_input_ref: NodeRef<html::Input> = NodeRef::new();

    // Drag-and-drop handlers
    let on_drag_enter = move |evt: ev::DragEvent| {
        evt.prevent_default();
        state.is_drag_over.set(true);
    };

    let on_drag_over = move |evt: ev::DragEvent| {
        evt.prevent_default();
        state.is_drag_over.set(true);
    };

    let on_drag_leave = move |evt: ev::DragEvent| {
        evt.prevent_default();
        state.is_drag_over.set(false);
    };

    let on_drop = move |evt: ev::DragEvent| {
        evt.prevent_default();
        state.is_drag_over.set(false);
        if let Some(transfer) = evt.data_transfer() {
            ingest_file_list(&state, transfer.files());
        }
    };

    let on_browse_click = move |_: ev::MouseEvent| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_file_input = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        ingest_file_list(&state, input.files());
    };

    let accept = SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    let zone_class = move || {
        if state.is_drag_over.get() {
            "relative border-2 border-dashed border-blue-500 bg-blue-950/20 rounded-xl p-10 text-center transition-colors"
        } else {
            "relative border-2 border-dashed border-gray-700 rounded-xl p-10 text-center transition-colors hover:border-gray-600"
        }
    };

    let has_entries = move || !state.entries.get().is_empty();
    let process_disabled = Signal::derive(move || !state.all_complete());

    let on_process_click = move |_: ev::MouseEvent| {
        show_success(
            "Files processed",
            Some("Your documents are ready for analysis."),
        );
    };

    view! {
        <div class="flex flex-col gap-6">
            // Drop zone
            <div
                class=zone_class
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="flex flex-col items-center gap-3">
                    <span class="w-14 h-14 rounded-full bg-gray-800 flex items-center justify-center text-blue-400">
                        <Icon icon=CLOUD_ARROW_UP size="28px" />
                    </span>
                    <div>
                        <p class="font-medium text-gray-200">"Drag and drop files"</p>
                        <p class="text-sm text-gray-500 mt-1">"PDF, DOCX, and ZIP files are supported"</p>
                    </div>
                    <Button on_click=on_browse_click class="mt-2">
                        "Browse files"
                    </Button>
                    <input
                        node_ref=file_input_ref
                        type="file"
                        multiple=true
                        accept=accept
                        class="hidden"
                        on:change=on_file_input
                    />
                </div>
            </div>

            // Tracked files
            <Show when=has_entries>
                <div class="bg-gray-900 border border-gray-800 rounded-xl divide-y divide-gray-800">
                    <For
                        each=move || state.entries.get()
                        key=|entry| (entry.id, entry.progress, entry.status)
                        children=move |entry| {
                            view! { <FileRow entry=entry /> }
                        }
                    />
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-sm text-gray-500">
                        {move || {
                            let count = state.entries.get().len();
                            if count == 1 {
                                "1 file".to_string()
                            } else {
                                format!("{} files", count)
                            }
                        }}
                    </span>
                    <Button disabled=process_disabled on_click=on_process_click>
                        "Process Files"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

/// One tracked file with its kind icon, size, status, and progress
#[component]
fn FileRow(entry: UploadEntry) -> impl IntoView {
    let state = use_upload_state();
    let id = entry.id;

    let kind_icon = match entry.kind {
        FileKind::Pdf => view! { <Icon icon=FILE_PDF size="24px" /> },
        FileKind::Docx | FileKind::Doc => view! { <Icon icon=FILE_DOC size="24px" /> },
        FileKind::Zip => view! { <Icon icon=FILE_ZIP size="24px" /> },
    };

    let is_uploading = entry.status == UploadStatus::Uploading;
    let progress_width = format!("{}%", entry.progress);
    let progress_label = format!("{}%", entry.progress);

    view! {
        <div class="flex items-center gap-3 px-4 py-3">
            <span class=format!("flex-shrink-0 {}", entry.kind.icon_class())>
                {kind_icon}
            </span>
            <div class="flex-1 min-w-0">
                <div class="flex items-center justify-between gap-3">
                    <p class="text-sm font-medium text-gray-200 truncate">
                        {entry.file_name.clone()}
                    </p>
                    <Badge variant=entry.status.badge_variant()>
                        {entry.status.label()}
                    </Badge>
                </div>
                <p class="text-xs text-gray-500 mt-0.5">
                    {format_file_size(entry.size_bytes)}
                </p>
                {is_uploading.then(|| view! {
                    <div class="flex items-center gap-2 mt-2">
                        <div class="flex-1 bg-gray-800 rounded-full h-1.5">
                            <div
                                class="bg-blue-500 h-1.5 rounded-full transition-all"
                                style:width=progress_width
                            ></div>
                        </div>
                        <span class="text-xs text-gray-500 w-9 text-right">{progress_label}</span>
                    </div>
                })}
                {entry.error.clone().map(|message| view! {
                    <p class="text-xs text-red-400 mt-1">{message}</p>
                })}
            </div>
            <button
                class="flex-shrink-0 p-1.5 rounded text-gray-500 hover:text-red-400 hover:bg-gray-800 transition-colors"
                aria-label="Remove file"
                on:click=move |_| state.remove_entry(id)
            >
                <Icon icon=X size="16px" />
            </button>
        </div>
    }
}
