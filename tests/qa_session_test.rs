//! Q&A Session Tests
//!
//! Browser tests for the deferred-answer exchange: exactly one question and
//! one answer per submission, with the fixed citation set.

use doclens_frontend::components::project::{MessageKind, QaState, ANSWER_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SETTLE_MS: u32 = ANSWER_DELAY_MS + 300;

#[wasm_bindgen_test]
async fn test_submission_appends_question_then_answer() {
    let state = QaState::new();

    state.submit("What is the revenue growth?");

    // Question lands immediately and the session is waiting
    let messages = state.messages.get();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, MessageKind::Question);
    assert_eq!(messages[0].text, "What is the revenue growth?");
    assert!(state.is_waiting.get());

    TimeoutFuture::new(SETTLE_MS).await;

    let messages = state.messages.get();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].kind, MessageKind::Answer);
    assert!(!state.is_waiting.get());

    // The canned answer cites the fixed two-document set
    let citations = &messages[1].citations;
    assert_eq!(citations.len(), 2);
    assert_eq!(citations[0].document.name, "Annual Report 2022.pdf");
    assert_eq!(citations[0].page, 24);
    assert_eq!(citations[1].document.name, "Financial Statement.docx");
    assert_eq!(citations[1].page, 3);
}

#[wasm_bindgen_test]
async fn test_draft_stays_visible_until_the_answer_lands() {
    let state = QaState::new();

    state.draft.set("What is the revenue growth?".to_string());
    state.submit(&state.draft.get());

    // The submitted text remains in the (disabled) input during the wait
    assert!(state.is_waiting.get());
    assert_eq!(state.draft.get(), "What is the revenue growth?");

    TimeoutFuture::new(SETTLE_MS).await;

    // The answer append clears the waiting flag and the draft together
    assert!(!state.is_waiting.get());
    assert_eq!(state.draft.get(), "");
    assert_eq!(state.messages.get().len(), 2);
}

#[wasm_bindgen_test]
async fn test_submission_trims_whitespace() {
    let state = QaState::new();

    state.submit("  Where is the cash flow summary?  ");

    let messages = state.messages.get();
    assert_eq!(messages[0].text, "Where is the cash flow summary?");

    TimeoutFuture::new(SETTLE_MS).await;
    assert_eq!(state.messages.get().len(), 2);
}

#[wasm_bindgen_test]
async fn test_overlapping_submission_is_rejected() {
    let state = QaState::new();

    state.submit("First question");
    state.submit("Second question while waiting");

    // Only the first question made it into the log
    assert_eq!(state.messages.get().len(), 1);

    TimeoutFuture::new(SETTLE_MS).await;

    // One answer for the one accepted question, and the session is idle again
    let messages = state.messages.get();
    assert_eq!(messages.len(), 2);
    assert!(!state.is_waiting.get());

    // A new submission is accepted once the answer has landed
    state.submit("Follow-up question");
    assert_eq!(state.messages.get().len(), 3);

    TimeoutFuture::new(SETTLE_MS).await;
    assert_eq!(state.messages.get().len(), 4);
}

#[wasm_bindgen_test]
async fn test_log_is_append_only_and_ordered() {
    let state = QaState::new();

    state.submit("Question one");
    TimeoutFuture::new(SETTLE_MS).await;
    state.submit("Question two");
    TimeoutFuture::new(SETTLE_MS).await;

    let kinds: Vec<MessageKind> = state.messages.get().iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MessageKind::Question,
            MessageKind::Answer,
            MessageKind::Question,
            MessageKind::Answer,
        ]
    );

    let texts: Vec<String> = state
        .messages
        .get()
        .iter()
        .filter(|m| m.kind == MessageKind::Question)
        .map(|m| m.text.clone())
        .collect();
    assert_eq!(texts, vec!["Question one", "Question two"]);
}
