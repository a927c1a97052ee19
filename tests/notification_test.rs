//! Notification Service Tests
//!
//! Toast lifecycle: add, ordering, and removal.

use doclens_frontend::services::notification_service::{
    provide_notification_state, NotificationState, ToastType, DEFAULT_TOAST_DURATION_MS,
};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_notification_state_starts_empty() {
    let state = NotificationState::new();
    assert!(state.notifications.get().is_empty());
}

#[wasm_bindgen_test]
fn test_add_sets_default_duration() {
    let state = NotificationState::new();

    state.add(
        ToastType::Success,
        "Login successful".to_string(),
        Some("You've been logged in successfully".to_string()),
    );

    let notifications = state.notifications.get();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Login successful");
    assert_eq!(notifications[0].toast_type, ToastType::Success);
    assert_eq!(notifications[0].duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
}

#[wasm_bindgen_test]
fn test_toasts_keep_insertion_order() {
    let state = NotificationState::new();

    state.add(ToastType::Info, "First".to_string(), None);
    state.add(ToastType::Warning, "Second".to_string(), None);
    state.add(ToastType::Error, "Third".to_string(), None);

    let titles: Vec<String> = state
        .notifications
        .get()
        .iter()
        .map(|n| n.title.clone())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[wasm_bindgen_test]
fn test_remove_targets_one_toast() {
    let state = NotificationState::new();

    state.add(ToastType::Info, "Keep".to_string(), None);
    state.add(ToastType::Info, "Drop".to_string(), None);

    let id = state.notifications.get()[1].id;
    state.remove(id);

    let notifications = state.notifications.get();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Keep");
}

#[wasm_bindgen_test]
fn test_remove_unknown_id_is_a_no_op() {
    let state = NotificationState::new();
    state.add(ToastType::Error, "Still here".to_string(), None);

    state.remove(Uuid::new_v4());

    assert_eq!(state.notifications.get().len(), 1);
}

#[wasm_bindgen_test]
fn test_provide_notification_state_mounts() {
    leptos::mount::mount_to_body(|| {
        provide_notification_state();

        view! {
            <div id="notification-test">"Notification state provided"</div>
        }
    });
}
