//! UI components

pub mod content_view;
pub mod dashboard_list;
pub mod login_modal;
