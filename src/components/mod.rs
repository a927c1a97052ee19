//! UI Components
//!
//! Page-level components (home, auth, dashboard, upload, project) plus the
//! shared design system and navigation chrome.

pub mod auth;
pub mod dashboard;
pub mod design_system;
pub mod home;
pub mod nav_bar;
pub mod project;
pub mod upload;
