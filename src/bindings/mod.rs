pub mod auth;
pub mod core;

#[cfg(test)]
mod tests;

pub use auth::*;
pub use core::{js_error_message, unwrap_envelope};
