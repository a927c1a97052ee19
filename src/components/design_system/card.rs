use leptos::prelude::*;

/// A styled card container component
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Card content
    children: Children,
) -> impl IntoView {
    let base_class = "bg-gray-900 border border-gray-800 rounded-xl shadow-md overflow-hidden";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Card header section with distinct background
#[component]
pub fn CardHeader(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Header content
    children: Children,
) -> impl IntoView {
    let base_class =
        "px-5 py-4 bg-gray-900/60 border-b border-gray-800 flex justify-between items-center";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Card body section with padding
#[component]
pub fn CardBody(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Body content
    children: Children,
) -> impl IntoView {
    let base_class = "p-5";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Prominent title line inside a card header or body
#[component]
pub fn CardTitle(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("text-lg font-semibold text-gray-100 {class}");

    view! {
        <h3 class=full_class>
            {children()}
        </h3>
    }
}

/// Muted descriptive line under a card title
#[component]
pub fn CardDescription(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("text-sm text-gray-400 {class}");

    view! {
        <p class=full_class>
            {children()}
        </p>
    }
}
