use super::badge::BadgeVariant;
use super::button::{ButtonSize, ButtonVariant};
use super::markdown::render_markdown;

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_classes_are_distinct() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
        ButtonVariant::Link,
    ];
    for (i, a) in variants.iter().enumerate() {
        for b in variants.iter().skip(i + 1) {
            assert_ne!(a.class(), b.class());
        }
    }
}

#[test]
fn test_button_size_classes() {
    assert!(ButtonSize::Sm.class().contains("text-sm"));
    assert!(ButtonSize::Lg.class().contains("text-lg"));
    assert_eq!(ButtonSize::default(), ButtonSize::Md);
}

#[test]
fn test_badge_variant_classes() {
    assert!(BadgeVariant::Success.class().contains("green"));
    assert!(BadgeVariant::Danger.class().contains("red"));
    assert!(BadgeVariant::Info.class().contains("blue"));
    assert!(BadgeVariant::Warning.class().contains("yellow"));
}

#[test]
fn test_render_markdown_paragraph_and_emphasis() {
    let html = render_markdown("This is **important** text.");
    assert!(html.contains("<p>"));
    assert!(html.contains("<strong>important</strong>"));
}

#[test]
fn test_render_markdown_list() {
    let html = render_markdown("- one\n- two\n");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn test_render_markdown_strikethrough() {
    let html = render_markdown("~~outdated figure~~");
    assert!(html.contains("<del>outdated figure</del>"));
}

#[test]
fn test_render_markdown_leaves_table_syntax_as_text() {
    // No table styling exists, so the extension stays off and pipe rows
    // render as plain paragraphs
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(!html.contains("<table>"));
}
