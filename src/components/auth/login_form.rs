//! Email/password sign-in with an OAuth alternative

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, GOOGLE_LOGO, SIGN_IN};
use wasm_bindgen_futures::spawn_local;

use crate::bindings::{sign_in_with_oauth, sign_in_with_password, OAuthProvider};
use crate::components::design_system::{Button, ButtonVariant, Input};
use crate::services::notification_service::{show_error, show_success};
use crate::services::session_service::use_session_state;

/// Where OAuth providers send the browser after a completed sign-in
pub(super) fn dashboard_redirect_url() -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/dashboard")
}

/// Launches the provider's OAuth flow; the page navigates away on success
pub(super) fn start_google_sign_in() {
    spawn_local(async move {
        if let Err(message) =
            sign_in_with_oauth(OAuthProvider::Google, dashboard_redirect_url()).await
        {
            log::warn!("Google login failed: {message}");
            show_error("Google login failed", Some(&message));
        }
    });
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let submit = {
        let navigate = navigate.clone();
        move || {
            if is_loading.get() {
                return;
            }
            is_loading.set(true);

            let email_value = email.get();
            let password_value = password.get();
            let session = session.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match sign_in_with_password(email_value, password_value).await {
                    Ok(auth_session) => {
                        session.apply_session(Some(auth_session));
                        show_success(
                            "Login successful",
                            Some("You've been logged in successfully"),
                        );
                        navigate("/dashboard", Default::default());
                    }
                    Err(message) => {
                        log::warn!("Login failed: {message}");
                        show_error("Login failed", Some(&message));
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
                <h1 class="text-2xl font-bold text-white">"Welcome Back"</h1>
                <p class="text-gray-400 mt-2">"Sign in to your account to continue"</p>
            </div>

            <div class="space-y-6">
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
                    <div class="flex items-center justify-between">
                        <label for="password" class="text-sm font-medium text-gray-300">
                            "Password"
                        </label>
                        <A
                            href="/forgot-password"
                            attr:class="text-xs text-blue-400 hover:underline"
                        >
                            "Forgot password?"
                        </A>
                    </div>
                    <Input
                        value=password
                        id="password"
                        r#type="password"
                        placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                        required=true
                        on_keydown=on_enter
                    />
                </div>

                <div class="flex items-center">
                    <input
                        id="remember-me"
                        type="checkbox"
                        class="h-4 w-4 rounded border-gray-700 bg-gray-950 text-blue-600 focus:ring-blue-500"
                        prop:checked=move || remember_me.get()
                        on:change=move |evt| remember_me.set(event_target_checked(&evt))
                    />
                    <label for="remember-me" class="ml-2 text-sm text-gray-400">
                        "Remember me"
                    </label>
                </div>

                <div class="space-y-4">
                    <Button class="w-full" loading=is_loading on_click=on_submit_click>
                        <Icon icon=SIGN_IN size="16px" />
                        "Sign in"
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
                <span class="text-gray-500">"Don't have an account?"</span>
                " "
                <A href="/signup" attr:class="text-blue-400 font-medium hover:underline">
                    "Sign up"
                </A>
            </div>
        </div>
    }
}

/// Divider between the credential form and OAuth buttons
#[component]
pub(super) fn OrContinueWith() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute inset-0 flex items-center">
                <div class="w-full border-t border-gray-800"></div>
            </div>
            <div class="relative flex justify-center text-xs uppercase">
                <span class="bg-gray-900 px-2 text-gray-500">"Or continue with"</span>
            </div>
        </div>
    }
}
