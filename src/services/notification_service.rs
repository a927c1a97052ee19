use leptos::prelude::*;
use uuid::Uuid;

/// Toasts linger this long before dismissing themselves
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub toast_type: ToastType,
    pub title: String,
    pub message: Option<String>,
    pub duration_ms: Option<u64>,
}

#[derive(Clone)]
pub struct NotificationState {
    pub notifications: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(&self, toast_type: ToastType, title: String, message: Option<String>) {
        let notification = Notification {
            id: Uuid::new_v4(),
            toast_type,
            title,
            message,
            duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
        };

        self.notifications.update(|list| list.push(notification));
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                list.remove(pos);
            }
        });
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

// Global accessor helpers
pub fn provide_notification_state() {
    provide_context(NotificationState::new());
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}

pub fn remove_notification(id: Uuid) {
    if let Some(state) = use_context::<NotificationState>() {
        state.remove(id);
    }
}

pub fn show_success(title: &str, message: Option<&str>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(ToastType::Success, title.to_string(), message.map(String::from));
    }
}

pub fn show_error(title: &str, message: Option<&str>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(ToastType::Error, title.to_string(), message.map(String::from));
    }
}

pub fn show_info(title: &str, message: Option<&str>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(ToastType::Info, title.to_string(), message.map(String::from));
    }
}
