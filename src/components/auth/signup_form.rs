//! Account registration with local confirm-password validation

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, GOOGLE_LOGO, USER_PLUS};
use wasm_bindgen_futures::spawn_local;

use super::login_form::{start_google_sign_in, OrContinueWith};
use crate::bindings::sign_up;
use crate::components::design_system::{Button, ButtonVariant, Input};
use crate::services::notification_service::{show_error, show_info, show_success};
use crate::services::session_service::use_session_state;

#[component]
pub fn SignupForm() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    // Only local validation; everything else is the provider's call
    let mismatch = Signal::derive(move || {
        !confirm_password.get().is_empty() && password.get() != confirm_password.get()
    });

    let submit = {
        let navigate = navigate.clone();
        move || {
            if is_loading.get() {
                return;
            }
            if password.get() != confirm_password.get() {
                show_error("Passwords don't match", Some("Please re-enter your password"));
                return;
            }
            is_loading.set(true);

            let name_value = full_name.get();
            let email_value = email.get();
            let password_value = password.get();
            let session = session.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match sign_up(name_value, email_value, password_value).await {
                    Ok(Some(auth_session)) => {
                        session.apply_session(Some(auth_session));
                        show_success("Account created", Some("Welcome to DocLens"));
                        navigate("/dashboard", Default::default());
                    }
                    Ok(None) => {
                        // Provider held the session back pending email confirmation
                        show_info(
                            "Check your inbox",
                            Some("Confirm your email address to finish signing up"),
                        );
                    }
                    Err(message) => {
                        log::warn!("Signup failed: {message}");
                        show_error("Signup failed", Some(&message));
                    }
                }
                is_loading.set(false);
            });
        }
    };

    let on_submit_click = {
        let submit = submit.clone();
        move |_: ev::MouseEvent| submit()
    };

    let on_enter = Callback::new(move |e: ev::KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            submit();
        }
    });

    let on_google_click = move |_: ev::MouseEvent| start_google_sign_in();

    view! {
        <div class="w-full max-w-md p-8 bg-gray-900 border border-gray-800 rounded-xl shadow-xl">
            <div class="text-center mb-8">
                <h1 class="text-2xl font-bold text-white">"Create an Account"</h1>
                <p class="text-gray-400 mt-2">"Start analyzing your documents in minutes"</p>
            </div>

            <div class="space-y-6">
                <div class="space-y-2">
                    <label for="name" class="text-sm font-medium text-gray-300">
                        "Full name"
                    </label>
                    <Input
                        value=full_name
                        id="name"
                        placeholder="Jamie Doe"
                        required=true
                        on_keydown=on_enter
                    />
                </div>

                <div class="space-y-2">
                    <label for="email" class="text-sm font-medium text-gray-300">
                        "Email"
                    </label>
                    <Input
                        value=email
                        id="email"
                        r#type="email"
                        placeholder="name@company.com"
                        required=true
                        on_keydown=on_enter
                    />
                </div>

                <div class="space-y-2">
                    <label for="password" class="text-sm font-medium text-gray-300">
                        "Password"
                    </label>
                    <Input
                        value=password
                        id="password"
                        r#type="password"
                        placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                        required=true
                        on_keydown=on_enter
                    />
                </div>

                <div class="space-y-2">
                    <label for="confirm-password" class="text-sm font-medium text-gray-300">
                        "Confirm password"
                    </label>
                    <Input
                        value=confirm_password
                        id="confirm-password"
                        r#type="password"
                        placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                        required=true
                        on_keydown=on_enter
                    />
                    <Show when=move || mismatch.get()>
                        <p class="text-xs text-red-400">"Passwords don't match"</p>
                    </Show>
                </div>

                <div class="space-y-4">
                    <Button class="w-full" loading=is_loading on_click=on_submit_click>
                        <Icon icon=USER_PLUS size="16px" />
                        "Create account"
                    </Button>

                    <OrContinueWith />

                    <Button
                        variant=ButtonVariant::Outline
                        class="w-full"
                        on_click=on_google_click
                    >
                        <Icon icon=GOOGLE_LOGO size="16px" />
                        "Google"
                    </Button>
                </div>
            </div>

            <div class="mt-6 text-center text-sm">
                <span class="text-gray-500">"Already have an account?"</span>
                " "
                <A href="/login" attr:class="text-blue-400 font-medium hover:underline">
                    "Sign in"
                </A>
            </div>
        </div>
    }
}
