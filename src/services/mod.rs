pub mod notification_service;
pub mod session_service;
