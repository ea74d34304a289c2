//! Client-side fetch helpers for the backend REST and auth endpoints
//!
//! Every helper returns `Result<_, String>` so failures can be dropped into
//! status text directly; the viewer has no machine-readable error taxonomy.

use gloo_net::http::{Request, RequestBuilder};
use serde::Deserialize;

use inboard_core::auth::AuthUser;
use inboard_core::model::{DashboardMeta, UserStateRecord, UserStateRow};

use crate::config::{SUPABASE_ANON_KEY, SUPABASE_URL};

fn rest_url(path_and_query: &str) -> String {
    format!("{}/rest/v1/{}", SUPABASE_URL, path_and_query)
}

/// apikey plus a bearer token: the user's token when signed in, the
/// publishable key otherwise
fn with_auth(request: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
    let bearer = format!("Bearer {}", access_token.unwrap_or(SUPABASE_ANON_KEY));
    request
        .header("apikey", SUPABASE_ANON_KEY)
        .header("Authorization", &bearer)
}

/// All dashboards, newest first
pub async fn fetch_dashboards() -> Result<Vec<DashboardMeta>, String> {
    let url = rest_url("dashboards?select=id,title,updated_at,tags&order=updated_at.desc");
    let response = with_auth(Request::get(&url), None)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Fetching dashboards returned {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

#[derive(Debug, Deserialize)]
struct ContentRow {
    title: String,
    content: String,
}

/// Full content for one dashboard; None when the id has no row
pub async fn fetch_content(id: &str) -> Result<Option<(String, String)>, String> {
    let url = rest_url(&format!("dashboards?select=title,content&id=eq.{}", id));
    let response = with_auth(Request::get(&url), None)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Fetching {} returned {}", id, response.status()));
    }
    let rows: Vec<ContentRow> = response.json().await.map_err(|e| e.to_string())?;
    Ok(rows.into_iter().next().map(|r| (r.title, r.content)))
}

/// The signed-in user's read/archived rows
pub async fn fetch_user_states(
    access_token: &str,
    user_id: &str,
) -> Result<Vec<UserStateRecord>, String> {
    let url = rest_url(&format!(
        "user_states?select=dashboard_id,is_read,is_archived&user_id=eq.{}",
        user_id
    ));
    let response = with_auth(Request::get(&url), Some(access_token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Fetching user state returned {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Upsert one read/archived row, keyed by (user_id, dashboard_id)
pub async fn upsert_user_state(access_token: &str, row: &UserStateRow) -> Result<(), String> {
    let url = rest_url("user_states");
    let body = serde_json::to_string(row).map_err(|e| e.to_string())?;
    let response = with_auth(Request::post(&url), Some(access_token))
        .header("Content-Type", "application/json")
        .header("Prefer", "resolution=merge-duplicates")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Saving user state returned {}", response.status()));
    }
    Ok(())
}

/// Request a magic-link email
pub async fn sign_in_with_otp(email: &str) -> Result<(), String> {
    let url = format!("{}/auth/v1/otp", SUPABASE_URL);
    let body = serde_json::json!({ "email": email, "create_user": true });
    let response = Request::post(&url)
        .header("apikey", SUPABASE_ANON_KEY)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(format!("Magic link request failed: {}", detail));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: String,
}

/// Resolve the user behind an access token
pub async fn fetch_user(access_token: &str) -> Result<AuthUser, String> {
    let url = format!("{}/auth/v1/user", SUPABASE_URL);
    let response = with_auth(Request::get(&url), Some(access_token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Session check returned {}", response.status()));
    }
    let user: UserResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(AuthUser {
        id: user.id,
        email: user.email,
    })
}

/// Invalidate the session server-side; local cleanup happens regardless
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let url = format!("{}/auth/v1/logout", SUPABASE_URL);
    let response = with_auth(Request::post(&url), Some(access_token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Sign out returned {}", response.status()));
    }
    Ok(())
}
