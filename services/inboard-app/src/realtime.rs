//! Websocket subscription to the dashboards change feed
//!
//! Joins the realtime channel and invokes the callback on every change
//! notification; the caller refetches the full list rather than patching
//! state from the payload.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};

use inboard_core::realtime::{heartbeat_frame, join_frame, ServerFrame};

use crate::config::{SUPABASE_ANON_KEY, SUPABASE_URL};

const HEARTBEAT_MS: u32 = 30_000;

fn websocket_url() -> String {
    let ws_base = SUPABASE_URL
        .replacen("https://", "wss://", 1)
        .replacen("http://", "ws://", 1);
    format!(
        "{}/realtime/v1/websocket?apikey={}&vsn=1.0.0",
        ws_base, SUPABASE_ANON_KEY
    )
}

/// Open the change feed; `on_change` fires on every dashboards-table event.
/// A socket that cannot be opened is logged and the viewer simply never
/// refreshes in the background.
pub fn subscribe(on_change: impl Fn() + 'static) {
    let ws = match WebSocket::new(&websocket_url()) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::error!("Realtime socket failed to open: {e:?}");
            return;
        }
    };

    let ws_open = ws.clone();
    let onopen = Closure::<dyn FnMut()>::new(move || {
        if ws_open.send_with_str(&join_frame(1)).is_err() {
            leptos::logging::warn!("Realtime join frame not sent");
        }
    });
    ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        if let Some(text) = event.data().as_string() {
            if let Some(frame) = ServerFrame::parse(&text) {
                if frame.signals_refresh() {
                    on_change();
                }
            }
        }
    });
    ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    // The server drops silent connections; heartbeat until the socket closes.
    let ws_beat = ws.clone();
    leptos::task::spawn_local(async move {
        let mut frame_ref: u64 = 2;
        loop {
            gloo_timers::future::TimeoutFuture::new(HEARTBEAT_MS).await;
            if ws_beat.ready_state() != WebSocket::OPEN {
                break;
            }
            if ws_beat.send_with_str(&heartbeat_frame(frame_ref)).is_err() {
                break;
            }
            frame_ref += 1;
        }
    });
}
