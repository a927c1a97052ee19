use super::*;

// ==========================================================================
// Static document fixtures
// ==========================================================================

#[test]
fn test_sample_documents() {
    let documents = sample_documents();
    let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["doc1", "doc2", "doc3"]);

    assert_eq!(documents[0].name, "Annual Report 2022.pdf");
    assert_eq!(documents[0].kind, FileKind::Pdf);
    assert_eq!(documents[1].name, "Financial Statement.docx");
    assert_eq!(documents[1].kind, FileKind::Docx);
    assert_eq!(documents[2].name, "Market Analysis.pdf");
    assert_eq!(documents[2].kind, FileKind::Pdf);
}

// ==========================================================================
// Canned answer
// ==========================================================================

#[test]
fn test_answer_text_embeds_question() {
    let answer = build_answer("What is the revenue growth?");
    assert_eq!(
        answer.text,
        "This is a simulated answer to your question about \"What is the revenue growth?\". \
         In a real implementation, this would be the response from the AI model analyzing \
         the uploaded documents."
    );
    assert_eq!(answer.kind, MessageKind::Answer);
}

#[test]
fn test_answer_carries_fixed_citation_pair() {
    let answer = build_answer("anything");
    assert_eq!(answer.citations.len(), 2);

    let first = &answer.citations[0];
    assert_eq!(first.id, "cit1");
    assert_eq!(
        first.quote,
        "According to the annual report, revenue increased by 15% year-over-year."
    );
    assert_eq!(first.page, 24);
    assert_eq!(first.document.id, "doc1");
    assert_eq!(first.document.name, "Annual Report 2022.pdf");
    assert_eq!(first.document.kind, FileKind::Pdf);

    let second = &answer.citations[1];
    assert_eq!(second.id, "cit2");
    assert_eq!(
        second.quote,
        "The financial statement shows a positive cash flow of $2.3M in Q4."
    );
    assert_eq!(second.page, 3);
    assert_eq!(second.document.id, "doc2");
    assert_eq!(second.document.name, "Financial Statement.docx");
    assert_eq!(second.document.kind, FileKind::Docx);
}

#[test]
fn test_question_carries_no_citations() {
    let question = QaMessage::question("Where is the cash flow summary?");
    assert_eq!(question.kind, MessageKind::Question);
    assert_eq!(question.text, "Where is the cash flow summary?");
    assert!(question.citations.is_empty());
}

// ==========================================================================
// Submission guards (the timer path is covered by browser tests)
// ==========================================================================

#[test]
fn test_blank_submissions_are_ignored() {
    let state = QaState::new();
    state.submit("");
    state.submit("   ");
    assert!(state.messages.get_untracked().is_empty());
    assert!(!state.is_waiting.get_untracked());
}

#[test]
fn test_submission_rejected_while_waiting() {
    let state = QaState::new();
    state.is_waiting.set(true);
    state.submit("What changed in Q4?");
    assert!(state.messages.get_untracked().is_empty());
}

// ==========================================================================
// Preview panel toggling
// ==========================================================================

#[test]
fn test_toggle_document_opens_and_closes() {
    let state = QaState::new();
    let documents = sample_documents();

    state.toggle_document(documents[0].clone());
    assert_eq!(
        state.active_document.get_untracked().map(|d| d.id),
        Some("doc1".to_string())
    );

    // Same document closes the panel
    state.toggle_document(documents[0].clone());
    assert!(state.active_document.get_untracked().is_none());
}

#[test]
fn test_toggle_document_switches_between_documents() {
    let state = QaState::new();
    let documents = sample_documents();

    state.toggle_document(documents[0].clone());
    state.toggle_document(documents[2].clone());
    assert_eq!(
        state.active_document.get_untracked().map(|d| d.id),
        Some("doc3".to_string())
    );

    state.close_document();
    assert!(state.active_document.get_untracked().is_none());
}
