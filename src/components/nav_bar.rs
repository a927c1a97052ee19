//! Fixed top navigation bar
//!
//! Link set depends on whether a session is present. The mobile menu mirrors
//! the desktop links and collapses after any selection.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, FILE_MAGNIFYING_GLASS, GEAR, LIST, SIGN_OUT, X};
use wasm_bindgen_futures::spawn_local;

use crate::components::design_system::{Button, ButtonSize, ButtonVariant};
use crate::services::notification_service::show_error;
use crate::services::session_service::{sign_out, use_session_state, SessionState};

/// Ends the session, then routes back to the login page
fn log_out(session: SessionState, navigate: impl Fn(&str) + 'static) {
    spawn_local(async move {
        match sign_out(session).await {
            Ok(()) => navigate("/login"),
            Err(message) => {
                log::warn!("Logout failed: {message}");
                show_error("Logout failed", Some(&message));
            }
        }
    });
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session_state();
    let mobile_open = RwSignal::new(false);

    let signed_in = {
        let session = session.clone();
        Signal::derive(move || session.is_signed_in())
    };

    let on_logout = {
        let session = session.clone();
        let navigate = use_navigate();
        move |_: ev::MouseEvent| {
            mobile_open.set(false);
            let navigate = navigate.clone();
            log_out(session.clone(), move |path| {
                navigate(path, Default::default())
            });
        }
    };
    let on_logout_mobile = StoredValue::new(on_logout.clone());

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-gray-950/90 backdrop-blur border-b border-gray-800">
            <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-2 text-white font-semibold text-lg">
                    <span class="text-blue-500">
                        <Icon icon=FILE_MAGNIFYING_GLASS size="24px" />
                    </span>
                    "DocLens"
                </A>

                // Desktop links
                <div class="hidden md:flex items-center gap-2">
                    <Show
                        when=move || signed_in.get()
                        fallback=|| {
                            view! {
                                <A
                                    href="/login"
                                    attr:class="px-3 py-2 text-sm text-gray-300 hover:text-white transition-colors"
                                >
                                    "Login"
                                </A>
                                <A href="/signup">
                                    <Button size=ButtonSize::Sm on_click=|_| {}>"Sign Up"</Button>
                                </A>
                            }
                        }
                    >
                        <A
                            href="/dashboard"
                            attr:class="px-3 py-2 text-sm text-gray-300 hover:text-white transition-colors"
                        >
                            "Dashboard"
                        </A>
                        <A
                            href="/upload"
                            attr:class="px-3 py-2 text-sm text-gray-300 hover:text-white transition-colors"
                        >
                            "Upload"
                        </A>
                        <button
                            class="p-2 text-gray-400 hover:text-white transition-colors"
                            title="Settings"
                        >
                            <Icon icon=GEAR size="18px" />
                        </button>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on_click=on_logout.clone()
                        >
                            <Icon icon=SIGN_OUT size="16px" />
                            "Logout"
                        </Button>
                    </Show>
                </div>

                // Mobile menu toggle
                <button
                    class="md:hidden p-2 text-gray-300 hover:text-white"
                    aria-label="Toggle menu"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || {
                        if mobile_open.get() {
                            view! { <Icon icon=X size="22px" /> }.into_any()
                        } else {
                            view! { <Icon icon=LIST size="22px" /> }.into_any()
                        }
                    }}
                </button>
            </nav>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-800 bg-gray-950 px-4 py-3 flex flex-col gap-1">
                    <Show
                        when=move || signed_in.get()
                        fallback=move || {
                            view! {
                                <MobileLink href="/login" label="Login" open=mobile_open />
                                <MobileLink href="/signup" label="Sign Up" open=mobile_open />
                            }
                        }
                    >
                        <MobileLink href="/dashboard" label="Dashboard" open=mobile_open />
                        <MobileLink href="/upload" label="Upload" open=mobile_open />
                        <button
                            class="px-3 py-2 rounded-md text-left text-sm text-gray-300 hover:bg-gray-800 hover:text-white transition-colors"
                            on:click=move |evt| on_logout_mobile.with_value(|f| f(evt))
                        >
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn MobileLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=href
            attr:class="px-3 py-2 rounded-md text-sm text-gray-300 hover:bg-gray-800 hover:text-white transition-colors"
            on:click=move |_| open.set(false)
        >
            {label}
        </A>
    }
}
