//! Slide-in preview panel for the document a citation points at

use leptos::prelude::*;
use phosphor_leptos::{Icon, X};

use super::{use_qa_state, DocumentKindIcon};

#[component]
pub fn DocumentPanel() -> impl IntoView {
    let state = use_qa_state();

    view! {
        {move || {
            state
                .active_document
                .get()
                .map(|document| {
                    let kind = document.kind;
                    view! {
                        <div class="hidden lg:flex flex-col w-96 flex-shrink-0 bg-gray-900 border border-gray-800 rounded-xl p-4 h-[calc(100vh-16rem)] min-h-[28rem]">
                            <div class="flex items-center justify-between gap-2 mb-4">
                                <div class="flex items-center gap-2 min-w-0">
                                    <span class=kind.icon_class()>
                                        <DocumentKindIcon kind=kind />
                                    </span>
                                    <h3 class="font-medium text-gray-200 truncate">
                                        {document.name.clone()}
                                    </h3>
                                </div>
                                <button
                                    class="flex-shrink-0 p-1 rounded text-gray-500 hover:text-gray-200 hover:bg-gray-800 transition-colors"
                                    aria-label="Close preview"
                                    on:click=move |_| state.close_document()
                                >
                                    <Icon icon=X size="16px" />
                                </button>
                            </div>
                            <div class="flex-1 flex items-center justify-center border border-gray-800 rounded-lg bg-gray-950/50 p-8">
                                <p class="text-center text-gray-500 text-sm">
                                    "Document preview would appear here."
                                    <br />
                                    "Rendering requires the full viewer build."
                                </p>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
