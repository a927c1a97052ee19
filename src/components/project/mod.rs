//! Project workspace: document list, Q&A chat, and citation-driven preview
//!
//! All answers are produced locally after a fixed delay; no model or backend
//! is consulted. The document list and citations are static fixtures.

mod document_panel;
mod qa_interface;

#[cfg(test)]
mod tests;

pub use document_panel::DocumentPanel;
pub use qa_interface::QaInterface;

use chrono::{Local, NaiveTime};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use phosphor_leptos::{Icon, ARROW_LEFT, DOWNLOAD_SIMPLE, FILE_DOC, FILE_PDF, FILE_ZIP};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::components::dashboard::find_project;
use crate::components::design_system::{
    Button, ButtonSize, ButtonVariant, Card, CardBody, CardHeader, CardTitle,
};
use crate::components::upload::FileKind;
use crate::utils::formatting::format_project_date;

/// Delay before the simulated answer is appended
pub const ANSWER_DELAY_MS: u32 = 1500;
/// How long the "copied" indicator stays on after copying an answer
pub const COPIED_RESET_MS: u64 = 2000;

/// Whether a chat entry came from the user or the simulated model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Question,
    Answer,
}

/// A document the Q&A session can cite and preview
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRef {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
}

impl DocumentRef {
    fn new(id: &str, name: &str, kind: FileKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
        }
    }
}

/// A quoted excerpt backing part of an answer
#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    pub id: String,
    pub quote: String,
    pub page: u32,
    pub document: DocumentRef,
}

/// One turn in the Q&A log
#[derive(Debug, Clone, PartialEq)]
pub struct QaMessage {
    pub id: Uuid,
    pub kind: MessageKind,
    pub text: String,
    pub timestamp: NaiveTime,
    /// Populated for answers only; questions carry no citations
    pub citations: Vec<Citation>,
}

impl QaMessage {
    pub fn question(text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: MessageKind::Question,
            text: text.to_string(),
            timestamp: Local::now().time(),
            citations: Vec::new(),
        }
    }

    pub fn answer(text: String, citations: Vec<Citation>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: MessageKind::Answer,
            text,
            timestamp: Local::now().time(),
            citations,
        }
    }
}

fn annual_report() -> DocumentRef {
    DocumentRef::new("doc1", "Annual Report 2022.pdf", FileKind::Pdf)
}

fn financial_statement() -> DocumentRef {
    DocumentRef::new("doc2", "Financial Statement.docx", FileKind::Docx)
}

fn market_analysis() -> DocumentRef {
    DocumentRef::new("doc3", "Market Analysis.pdf", FileKind::Pdf)
}

/// The static document set attached to every project
pub fn sample_documents() -> Vec<DocumentRef> {
    vec![annual_report(), financial_statement(), market_analysis()]
}

/// Builds the canned answer for a submitted question
pub fn build_answer(question: &str) -> QaMessage {
    let text = format!(
        "This is a simulated answer to your question about \"{question}\". In a real \
         implementation, this would be the response from the AI model analyzing the \
         uploaded documents."
    );
    let citations = vec![
        Citation {
            id: "cit1".to_string(),
            quote: "According to the annual report, revenue increased by 15% year-over-year."
                .to_string(),
            page: 24,
            document: annual_report(),
        },
        Citation {
            id: "cit2".to_string(),
            quote: "The financial statement shows a positive cash flow of $2.3M in Q4."
                .to_string(),
            page: 3,
            document: financial_statement(),
        },
    ];
    QaMessage::answer(text, citations)
}

/// Shared state for one project's Q&A session
#[derive(Clone, Copy)]
pub struct QaState {
    /// Append-only chat log, ordered by insertion
    pub messages: RwSignal<Vec<QaMessage>>,
    /// True between question submission and the simulated answer
    pub is_waiting: RwSignal<bool>,
    /// Question text bound to the input field
    pub draft: RwSignal<String>,
    /// Document currently open in the preview panel
    pub active_document: RwSignal<Option<DocumentRef>>,
}

impl QaState {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            is_waiting: RwSignal::new(false),
            draft: RwSignal::new(String::new()),
            active_document: RwSignal::new(None),
        }
    }

    /// Appends the question and schedules the simulated answer.
    ///
    /// Blank questions and submissions made while an answer is pending are
    /// ignored. The submitted text stays in the draft while the answer is
    /// pending; the answer append clears the waiting flag and the draft.
    pub fn submit(&self, question: &str) {
        let question = question.trim();
        if question.is_empty() || self.is_waiting.get() {
            return;
        }

        self.messages
            .update(|messages| messages.push(QaMessage::question(question)));
        self.is_waiting.set(true);

        let state = *self;
        let question = question.to_string();
        spawn_local(async move {
            TimeoutFuture::new(ANSWER_DELAY_MS).await;
            state
                .messages
                .update(|messages| messages.push(build_answer(&question)));
            state.is_waiting.set(false);
            state.draft.set(String::new());
        });
    }

    /// Opens the preview panel for `document`, or closes it when the same
    /// document is already open.
    pub fn toggle_document(&self, document: DocumentRef) {
        self.active_document.update(|active| {
            let same = active.as_ref().is_some_and(|open| open.id == document.id);
            *active = if same { None } else { Some(document) };
        });
    }

    pub fn close_document(&self) {
        self.active_document.set(None);
    }
}

impl Default for QaState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_qa_state() -> QaState {
    expect_context::<QaState>()
}

/// Route params for the project workspace
#[derive(Params, PartialEq, Clone, Default)]
pub struct ProjectParams {
    pub id: Option<u32>,
}

/// Project page: header plus the Q&A workspace
#[component]
pub fn ProjectView() -> impl IntoView {
    let params = use_params::<ProjectParams>();
    let project = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|p| p.id)
            .and_then(find_project)
    });

    let state = QaState::new();
    provide_context(state);

    let title = move || {
        project
            .get()
            .map(|p| p.title)
            .unwrap_or_else(|| "Untitled Project".to_string())
    };

    let subtitle = move || match project.get() {
        Some(p) => {
            let noun = if p.document_count == 1 {
                "document"
            } else {
                "documents"
            };
            format!(
                "{} {} \u{2022} Last updated {}",
                p.document_count,
                noun,
                format_project_date(p.last_updated)
            )
        }
        None => format!("{} documents", sample_documents().len()),
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="mb-8">
                <A
                    href="/dashboard"
                    attr:class="inline-flex items-center gap-1 text-gray-400 hover:text-gray-200 transition-colors"
                >
                    <Icon icon=ARROW_LEFT size="16px" />
                    <span>"Back to Dashboard"</span>
                </A>
                <h1 class="text-3xl font-bold text-white mt-4">{title}</h1>
                <p class="text-gray-400 mt-1">{subtitle}</p>
            </div>

            <div class="flex flex-col md:flex-row gap-6">
                <DocumentSidebar />
                <QaInterface />
                <DocumentPanel />
            </div>
        </div>
    }
}

/// Clickable list of the project's documents; selecting one toggles the
/// preview panel
#[component]
fn DocumentSidebar() -> impl IntoView {
    let state = use_qa_state();
    let documents = sample_documents();

    view! {
        <Card class="w-full md:w-64 flex-shrink-0 h-fit">
            <CardHeader>
                <CardTitle class="text-base">"Documents"</CardTitle>
            </CardHeader>
            <CardBody class="p-4">
                <div class="space-y-2">
                {documents
                    .into_iter()
                    .map(|document| {
                        let row_doc = document.clone();
                        let doc_id = document.id.clone();
                        let row_class = move || {
                            if state
                                .active_document
                                .get()
                                .is_some_and(|open| open.id == doc_id)
                            {
                                "w-full p-3 rounded-lg flex items-center gap-2 text-left bg-gray-800 text-gray-100 transition-colors"
                            } else {
                                "w-full p-3 rounded-lg flex items-center gap-2 text-left text-gray-400 hover:bg-gray-800/50 hover:text-gray-200 transition-colors"
                            }
                        };
                        view! {
                            <button
                                class=row_class
                                on:click=move |_| state.toggle_document(row_doc.clone())
                            >
                                <span class=document.kind.icon_class()>
                                    <DocumentKindIcon kind=document.kind size="20px" />
                                </span>
                                <span class="text-sm truncate">{document.name.clone()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
                </div>
                <div class="mt-6 pt-4 border-t border-gray-800">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        class="w-full"
                        title="Export all answers with citations"
                        on_click=move |_: ev::MouseEvent| {}
                        disabled=true
                    >
                        <Icon icon=DOWNLOAD_SIMPLE size="14px" />
                        "Export Results"
                    </Button>
                </div>
            </CardBody>
        </Card>
    }
}

/// File-kind icon used by the sidebar, citations, and the preview panel
#[component]
pub fn DocumentKindIcon(
    kind: FileKind,
    #[prop(into, default = "20px".to_string())] size: String,
) -> impl IntoView {
    match kind {
        FileKind::Pdf => view! { <Icon icon=FILE_PDF size=size /> },
        FileKind::Docx | FileKind::Doc => view! { <Icon icon=FILE_DOC size=size /> },
        FileKind::Zip => view! { <Icon icon=FILE_ZIP size=size /> },
    }
}
