use leptos::prelude::*;

/// Badge variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Info,
    Warning,
    Danger,
}

impl BadgeVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-gray-800 text-gray-300 border-gray-700",
            BadgeVariant::Success => "bg-green-900/50 text-green-300 border-green-800",
            BadgeVariant::Info => "bg-blue-900/50 text-blue-300 border-blue-800",
            BadgeVariant::Warning => "bg-yellow-900/50 text-yellow-300 border-yellow-800",
            BadgeVariant::Danger => "bg-red-900/50 text-red-300 border-red-800",
        }
    }
}

/// A small status/category pill
#[component]
pub fn Badge(
    /// The visual variant of the badge
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let full_class = format!(
        "inline-flex items-center gap-1 px-2 py-0.5 rounded-full text-xs font-medium border {} {class}",
        variant.class()
    );

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
