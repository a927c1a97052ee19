//! Chat surface for asking questions against a project's documents

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, CARET_DOWN, CARET_RIGHT, CHECK_CIRCLE, COPY, INFO, PAPER_PLANE_RIGHT};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::{use_qa_state, Citation, MessageKind, QaMessage, COPIED_RESET_MS};
use crate::components::design_system::{Button, Input, Markdown, TypingIndicator};
use crate::utils::formatting::format_clock_time;

#[component]
pub fn QaInterface() -> impl IntoView {
    let state = use_qa_state();

    // The draft lives in QaState; submit leaves it visible in the disabled
    // input until the answer arrives, then the state clears it.
    let send_question = move || {
        let text = state.draft.get();
        if text.trim().is_empty() || state.is_waiting.get() {
            return;
        }
        state.submit(&text);
    };

    let on_send_click = move |_: ev::MouseEvent| {
        send_question();
    };

    let on_keydown = Callback::new(move |e: ev::KeyboardEvent| {
        if e.key() == "Enter" && !e.shift_key() {
            e.prevent_default();
            send_question();
        }
    });

    let send_disabled = Signal::derive(move || {
        state.is_waiting.get() || state.draft.get().trim().is_empty()
    });

    let has_messages = move || !state.messages.get().is_empty();

    view! {
        <div class="flex-1 flex flex-col bg-gray-900 border border-gray-800 rounded-xl overflow-hidden h-[calc(100vh-16rem)] min-h-[28rem]">
            // Message area
            <div class="flex-1 overflow-y-auto p-6">
                <Show
                    when=has_messages
                    fallback=|| {
                        view! {
                            <div class="h-full flex flex-col items-center justify-center text-center text-gray-500">
                                <div class="w-16 h-16 rounded-full bg-gray-800 flex items-center justify-center mb-4">
                                    <Icon icon=INFO size="32px" />
                                </div>
                                <h3 class="text-lg font-medium text-gray-300 mb-2">
                                    "Ask questions about your documents"
                                </h3>
                                <p class="max-w-sm">
                                    "Ask specific questions about the documents in this project. \
                                     The AI will analyze them and provide answers with citations."
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="space-y-6">
                        <For
                            each=move || state.messages.get()
                            key=|message| message.id
                            children=move |message| {
                                view! { <MessageBubble message=message /> }
                            }
                        />
                        {move || {
                            state
                                .is_waiting
                                .get()
                                .then(|| {
                                    view! {
                                        <div class="mr-auto max-w-md p-4">
                                            <TypingIndicator />
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </Show>
            </div>

            // Input area
            <div class="border-t border-gray-800 p-4">
                <div class="flex gap-2">
                    <div class="flex-1">
                        <Input
                            value=state.draft
                            placeholder="Ask a question about your documents..."
                            disabled=state.is_waiting
                            on_keydown=on_keydown
                        />
                    </div>
                    <Button on_click=on_send_click disabled=send_disabled title="Send question">
                        <Icon icon=PAPER_PLANE_RIGHT size="16px" />
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// One chat turn. Questions sit right-aligned; answers carry citation and
/// copy affordances.
#[component]
fn MessageBubble(message: QaMessage) -> impl IntoView {
    let is_question = message.kind == MessageKind::Question;
    let show_citations = RwSignal::new(false);
    let copied = RwSignal::new(false);

    let container_class = if is_question {
        "ml-auto max-w-lg bg-blue-900/40 border border-blue-800 rounded-tl-xl rounded-tr-xl rounded-bl-xl p-4"
    } else {
        "mr-auto max-w-2xl bg-gray-800 border border-gray-700 rounded-tl-xl rounded-tr-xl rounded-br-xl p-4"
    };

    let text_for_clipboard = message.text.clone();
    let on_copy = move |_: ev::MouseEvent| {
        let text = text_for_clipboard.clone();
        spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                    copied.set(true);
                    set_timeout(
                        move || copied.set(false),
                        std::time::Duration::from_millis(COPIED_RESET_MS),
                    );
                }
            }
        });
    };

    let citation_count = message.citations.len();
    let citations = message.citations.clone();

    let citation_block = (!is_question && citation_count > 0).then(|| {
        let toggle_label = if citation_count == 1 {
            "1 citation".to_string()
        } else {
            format!("{citation_count} citations")
        };
        view! {
            <div class="mt-4">
                <button
                    class="flex items-center gap-1 text-xs text-blue-400 hover:text-blue-300 transition-colors"
                    on:click=move |_| show_citations.update(|open| *open = !*open)
                >
                    {move || {
                        if show_citations.get() {
                            view! { <Icon icon=CARET_DOWN size="14px" /> }.into_any()
                        } else {
                            view! { <Icon icon=CARET_RIGHT size="14px" /> }.into_any()
                        }
                    }}
                    <span>{toggle_label}</span>
                </button>
                <Show when=move || show_citations.get()>
                    <div class="mt-2 space-y-2">
                        {citations
                            .clone()
                            .into_iter()
                            .map(|citation| view! { <CitationCard citation=citation /> })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        }
    });

    let copy_button = (!is_question).then(|| {
        view! {
            <button
                class="text-gray-500 hover:text-gray-200 transition-colors"
                title="Copy answer"
                on:click=on_copy
            >
                {move || {
                    if copied.get() {
                        view! {
                            <span class="text-green-400">
                                <Icon icon=CHECK_CIRCLE size="16px" />
                            </span>
                        }
                            .into_any()
                    } else {
                        view! { <Icon icon=COPY size="16px" /> }.into_any()
                    }
                }}
            </button>
        }
    });

    // Questions echo the user's text verbatim; answers may carry markup
    let body = if is_question {
        view! {
            <div class="text-sm text-gray-200 whitespace-pre-wrap">{message.text.clone()}</div>
        }
        .into_any()
    } else {
        view! { <Markdown content=message.text.clone() class="text-sm" /> }.into_any()
    };

    view! {
        <div class=container_class>
            {body}
            {citation_block}
            <div class="mt-2 flex justify-between items-center">
                <span class="text-xs text-gray-500">{format_clock_time(message.timestamp)}</span>
                {copy_button}
            </div>
        </div>
    }
}

/// A cited excerpt; clicking it opens the cited document in the preview panel
#[component]
fn CitationCard(citation: Citation) -> impl IntoView {
    let state = use_qa_state();
    let document = citation.document.clone();
    let document_name = document.name.clone();

    view! {
        <button
            class="w-full text-left text-xs p-2.5 rounded bg-gray-900/60 border border-gray-700 hover:border-gray-500 transition-colors"
            title="Toggle document preview"
            on:click=move |_| state.toggle_document(document.clone())
        >
            <div class="flex justify-between gap-2">
                <span class="font-medium text-gray-300">{document_name}</span>
                <span class="text-gray-500 flex-shrink-0">{format!("Page {}", citation.page)}</span>
            </div>
            <p class="mt-1 text-gray-400">{citation.quote.clone()}</p>
        </button>
    }
}
