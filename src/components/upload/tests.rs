use super::*;

// ==========================================================================
// File extension handling
// ==========================================================================

#[test]
fn test_file_extension_lowercases() {
    assert_eq!(file_extension("Report.PDF"), Some("pdf".to_string()));
    assert_eq!(file_extension("notes.Docx"), Some("docx".to_string()));
}

#[test]
fn test_file_extension_takes_last_segment() {
    assert_eq!(file_extension("archive.tar.zip"), Some("zip".to_string()));
    assert_eq!(file_extension("v1.2.3.doc"), Some("doc".to_string()));
}

#[test]
fn test_file_extension_none_without_dot() {
    assert_eq!(file_extension("README"), None);
}

#[test]
fn test_supported_files() {
    assert!(is_supported_file("Annual Report 2022.pdf"));
    assert!(is_supported_file("Financial Statement.docx"));
    assert!(is_supported_file("legacy-contract.doc"));
    assert!(is_supported_file("bundle.ZIP"));
}

#[test]
fn test_unsupported_files() {
    assert!(!is_supported_file("photo.png"));
    assert!(!is_supported_file("data.csv"));
    assert!(!is_supported_file("noextension"));
    assert!(!is_supported_file("script.pdf.exe"));
}

#[test]
fn test_file_kind_covers_every_supported_extension() {
    for ext in SUPPORTED_EXTENSIONS {
        let name = format!("sample.{ext}");
        assert!(
            FileKind::from_name(&name).is_some(),
            "no FileKind for extension {ext}"
        );
    }
}

#[test]
fn test_file_kind_from_name() {
    assert_eq!(FileKind::from_name("a.pdf"), Some(FileKind::Pdf));
    assert_eq!(FileKind::from_name("a.docx"), Some(FileKind::Docx));
    assert_eq!(FileKind::from_name("a.doc"), Some(FileKind::Doc));
    assert_eq!(FileKind::from_name("a.zip"), Some(FileKind::Zip));
    assert_eq!(FileKind::from_name("a.txt"), None);
}

// ==========================================================================
// Progress stepping
// ==========================================================================

#[test]
fn test_next_progress_steps_by_five() {
    assert_eq!(next_progress(0), 5);
    assert_eq!(next_progress(45), 50);
}

#[test]
fn test_next_progress_caps_at_hundred() {
    assert_eq!(next_progress(95), 100);
    assert_eq!(next_progress(100), 100);
    assert_eq!(next_progress(98), 100);
}

#[test]
fn test_progress_reaches_completion_in_twenty_ticks() {
    let mut progress = 0u8;
    let mut ticks = 0;
    while progress < 100 {
        progress = next_progress(progress);
        ticks += 1;
        assert!(ticks <= 20, "progress never reached 100");
    }
    assert_eq!(ticks, 20);
    assert_eq!(progress, 100);
}

// ==========================================================================
// Status metadata
// ==========================================================================

#[test]
fn test_status_labels() {
    assert_eq!(UploadStatus::Idle.label(), "Ready");
    assert_eq!(UploadStatus::Uploading.label(), "Uploading");
    assert_eq!(UploadStatus::Processing.label(), "Processing");
    assert_eq!(UploadStatus::Complete.label(), "Complete");
    assert_eq!(UploadStatus::Error.label(), "Error");
}

#[test]
fn test_status_terminality() {
    assert!(UploadStatus::Complete.is_terminal());
    assert!(UploadStatus::Error.is_terminal());
    assert!(!UploadStatus::Idle.is_terminal());
    assert!(!UploadStatus::Uploading.is_terminal());
    assert!(!UploadStatus::Processing.is_terminal());
}

// ==========================================================================
// Entry construction
// ==========================================================================

#[test]
fn test_new_entry_defaults() {
    let entry = UploadEntry::new("Annual Report 2022.pdf".to_string(), 2_516_582.4, FileKind::Pdf);
    assert_eq!(entry.file_name, "Annual Report 2022.pdf");
    assert_eq!(entry.status, UploadStatus::Idle);
    assert_eq!(entry.progress, 0);
    assert!(entry.error.is_none());
}

#[test]
fn test_new_entries_get_distinct_ids() {
    let a = UploadEntry::new("a.pdf".to_string(), 1.0, FileKind::Pdf);
    let b = UploadEntry::new("b.pdf".to_string(), 1.0, FileKind::Pdf);
    assert_ne!(a.id, b.id);
}
