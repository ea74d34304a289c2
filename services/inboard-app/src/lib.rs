//! Inboard viewer - Leptos frontend
//!
//! Client-side rendered dashboard inbox: lists dashboards from the hosted
//! table, shows the selected one in an embedded frame, and syncs per-user
//! read/archived flags for signed-in users.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod realtime;
pub mod session;

pub use app::App;
