//! Authentication pages
//!
//! Credential and OAuth sign-in/sign-up against the hosted auth provider.
//! All provider failures surface as toasts; the forms hold no auth logic of
//! their own.

mod login_form;
mod signup_form;

pub use login_form::LoginForm;
pub use signup_form::SignupForm;

use leptos::prelude::*;

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="min-h-[calc(100vh-8rem)] flex items-center justify-center px-4 py-12">
            <LoginForm />
        </div>
    }
}

#[component]
pub fn Signup() -> impl IntoView {
    view! {
        <div class="min-h-[calc(100vh-8rem)] flex items-center justify-center px-4 py-12">
            <SignupForm />
        </div>
    }
}
