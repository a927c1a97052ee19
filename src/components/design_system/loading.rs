use leptos::prelude::*;

/// A loading spinner component
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    let size_class = match size {
        "sm" => "w-4 h-4",
        "lg" => "w-8 h-8",
        _ => "w-6 h-6",
    };

    view! {
        <div class=format!("{} animate-spin rounded-full border-2 border-gray-800 border-t-blue-500", size_class)></div>
    }
}

/// Three staggered dots shown while an answer is being prepared
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1.5">
            {[0u32, 150, 300]
                .into_iter()
                .map(|delay| {
                    view! {
                        <div
                            class="w-2 h-2 rounded-full bg-blue-400/80 animate-bounce"
                            style=format!("animation-delay: {delay}ms")
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
