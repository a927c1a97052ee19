use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// CSS styles for rendered answer text
const MARKDOWN_STYLES: &str = r#"
    .markdown-content p { margin-bottom: 0.8em; line-height: 1.6; }
    .markdown-content p:last-child { margin-bottom: 0; }
    .markdown-content ul { list-style-type: disc; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content ol { list-style-type: decimal; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content li { margin-bottom: 0.25em; }
    .markdown-content code { background-color: #030712; border: 1px solid #1f2937; padding: 0.2em 0.4em; border-radius: 0.25em; font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace; font-size: 0.9em; color: #e5e7eb; }
    .markdown-content blockquote { border-left: 3px solid #3b82f6; padding-left: 1em; color: #9ca3af; margin-left: 0; margin-right: 0; }
    .markdown-content a { color: #60a5fa; text-decoration: underline; }
    .markdown-content strong { font-weight: 600; color: #f9fafb; }
    .markdown-content em { font-style: italic; }
    .markdown-content del { color: #6b7280; }
"#;

/// Render answer markdown to HTML. Strikethrough is the only extension;
/// answers never carry tables or task lists.
pub(crate) fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// A markdown renderer component using pulldown-cmark
#[component]
pub fn Markdown(
    /// The markdown content to render
    #[prop(into)]
    content: String,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let html_content = render_markdown(&content);
    let full_class = format!("markdown-content text-gray-200 {class}");

    view! {
        <style>{MARKDOWN_STYLES}</style>
        <div class=full_class inner_html=html_content />
    }
}
