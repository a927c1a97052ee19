use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
    Link,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 hover:bg-blue-500 text-white shadow-lg shadow-blue-950/40 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-gray-800 hover:bg-gray-700 text-gray-200 border border-gray-700"
            }
            ButtonVariant::Outline => {
                "bg-transparent border border-gray-600 text-gray-300 hover:border-gray-400 hover:text-white"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-gray-400 hover:text-white border border-transparent"
            }
            ButtonVariant::Danger => {
                "bg-red-600 hover:bg-red-500 text-white shadow-lg shadow-red-950/40 border border-transparent"
            }
            ButtonVariant::Link => {
                "bg-transparent text-blue-400 hover:text-blue-300 hover:underline border border-transparent shadow-none px-1"
            }
        }
    }
}

/// Button sizing presets
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-4 py-2",
            ButtonSize::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Sizing preset
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Click handler - accepts any closure taking MouseEvent
    #[prop(optional)]
    on_click: Option<F>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Whether to show a loading spinner
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "rounded-md transition-all duration-200 inline-flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-950 focus:ring-blue-500";
    let variant_class = variant.class();
    let size_class = size.class();

    let is_disabled = move || disabled.get() || loading.get();

    let state_class = move || {
        if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class =
        move || format!("{base_class} {variant_class} {size_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button
            class=full_class
            on:click=handle_click
            disabled=is_disabled
            title=title
        >
            {move || {
                if loading.get() {
                    Some(view! { <LoadingSpinner size="sm" /> })
                } else {
                    None
                }
            }}
            {children()}
        </button>
    }
}
