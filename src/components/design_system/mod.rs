//! Design System Components
//!
//! A collection of reusable, styled UI components.

mod badge;
mod button;
mod card;
mod input;
mod loading;
mod markdown;
mod toast;

#[cfg(test)]
mod tests;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardBody, CardDescription, CardHeader, CardTitle};
pub use input::Input;
pub use loading::{LoadingSpinner, TypingIndicator};
pub use markdown::Markdown;
pub use toast::{Toast, ToastContainer};
