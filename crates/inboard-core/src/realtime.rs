//! Wire frames for the realtime change feed
//!
//! The backend's realtime endpoint speaks the Phoenix channel protocol over
//! a websocket: the client joins a topic with a `postgres_changes` config,
//! sends periodic heartbeats, and receives one frame per database change.
//! The viewer only cares whether a frame is a change notification for the
//! `dashboards` table; the payload details are ignored and a full refetch is
//! triggered instead.

use serde::Deserialize;
use serde_json::json;

/// Channel topic carrying change events for the dashboards table
pub const DASHBOARDS_TOPIC: &str = "realtime:public:dashboards";

/// Frame joining the dashboards topic, subscribed to every event
pub fn join_frame(frame_ref: u64) -> String {
    json!({
        "topic": DASHBOARDS_TOPIC,
        "event": "phx_join",
        "payload": {
            "config": {
                "postgres_changes": [
                    {"event": "*", "schema": "public", "table": "dashboards"}
                ]
            }
        },
        "ref": frame_ref.to_string(),
    })
    .to_string()
}

/// Keepalive frame; the server drops silent connections
pub fn heartbeat_frame(frame_ref: u64) -> String {
    json!({
        "topic": "phoenix",
        "event": "heartbeat",
        "payload": {},
        "ref": frame_ref.to_string(),
    })
    .to_string()
}

/// Inbound frame, reduced to the fields the viewer inspects
#[derive(Debug, Clone, Deserialize)]
pub struct ServerFrame {
    pub topic: String,
    pub event: String,
}

impl ServerFrame {
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// True for change notifications on the dashboards topic
    pub fn signals_refresh(&self) -> bool {
        self.topic == DASHBOARDS_TOPIC && self.event == "postgres_changes"
    }
}
