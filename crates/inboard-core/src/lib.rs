//! Inboard core - shared types and client-side state
//!
//! Everything here is plain data and pure logic: the table row types shared
//! by the viewer and the sync tool, the viewer's in-memory application state,
//! auth session types, and the realtime channel wire frames. No I/O, so the
//! crate compiles for both native and wasm32 targets.

pub mod auth;
pub mod model;
pub mod realtime;
pub mod state;

pub use model::{DashboardMeta, DashboardRow, UserState, UserStateRow};
pub use state::AppState;
