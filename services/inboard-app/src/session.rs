//! Session persistence and magic-link redirect handling
//!
//! The session lives in localStorage for the page lifetime and beyond;
//! a magic-link redirect (tokens in the URL fragment) takes precedence over
//! a stored session and replaces it.

use inboard_core::auth::{parse_fragment, AuthSession, FragmentTokens};

use crate::api;

const SESSION_KEY: &str = "inboard_auth_session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn save(session: &AuthSession) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(session) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

pub fn load() -> Option<AuthSession> {
    let json = local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Pull tokens out of the location hash, clearing it so a reload does not
/// replay them
fn take_fragment_tokens() -> Option<FragmentTokens> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let tokens = parse_fragment(&hash)?;
    let _ = window.location().set_hash("");
    Some(tokens)
}

/// Restore the session: fragment tokens first, stored session second
pub async fn restore() -> Option<AuthSession> {
    if let Some(tokens) = take_fragment_tokens() {
        match api::fetch_user(&tokens.access_token).await {
            Ok(user) => {
                let session = AuthSession {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                    user,
                };
                save(&session);
                return Some(session);
            }
            Err(e) => {
                leptos::logging::error!("Magic-link session rejected: {e}");
            }
        }
    }
    load()
}
