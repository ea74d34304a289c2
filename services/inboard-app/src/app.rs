//! Root application component and event wiring
//!
//! Holds the page-lifetime `AppState`, drives fetches, and connects the
//! sidebar, content frame, and login modal. All updates are optimistic: the
//! local state changes first and the remote write follows fire-and-forget.

use inboard_core::auth::AuthSession;
use inboard_core::model::UserStateRow;
use inboard_core::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::content_view::ContentView;
use crate::components::dashboard_list::DashboardList;
use crate::components::login_modal::LoginModal;
use crate::{api, config, realtime, session};

async fn refresh_dashboards(state: RwSignal<AppState>, status: RwSignal<String>) {
    match api::fetch_dashboards().await {
        Ok(dashboards) => {
            state.update(|s| s.set_dashboards(dashboards));
            status.set(String::new());
        }
        Err(e) => {
            leptos::logging::error!("Fetching dashboards failed: {e}");
            status.set("Error loading".to_string());
        }
    }
}

async fn restore_session(state: RwSignal<AppState>, auth: RwSignal<Option<AuthSession>>) {
    let Some(restored) = session::restore().await else {
        return;
    };

    state.update(|s| s.user = Some(restored.user.clone()));
    match api::fetch_user_states(&restored.access_token, &restored.user.id).await {
        Ok(records) => state.update(|s| s.set_user_states(records)),
        Err(e) => leptos::logging::error!("Fetching user state failed: {e}"),
    }
    auth.set(Some(restored));
}

/// Root component
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(AppState::new());
    let auth = RwSignal::new(None::<AuthSession>);
    let status = RwSignal::new(String::from("Loading..."));
    let content = RwSignal::new(None::<(String, String)>);
    let show_login = RwSignal::new(false);
    let login_status = RwSignal::new(String::new());

    if config::is_configured() {
        spawn_local(async move {
            refresh_dashboards(state, status).await;
            restore_session(state, auth).await;
        });
        realtime::subscribe(move || {
            spawn_local(refresh_dashboards(state, status));
        });
    } else {
        status.set("Offline mode (config error)".to_string());
    }

    let on_select = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::fetch_content(&id).await {
                Ok(Some((title, html))) => {
                    content.set(Some((title, html)));

                    let mut reader = None;
                    state.update(|s| {
                        s.select(&id);
                        if let Some(user) = s.user.clone() {
                            if s.mark_read(&id) {
                                reader = Some(user.id);
                            }
                        }
                    });

                    // Fire and forget; the local flag is already set, so a
                    // second selection never re-issues the write.
                    if let (Some(user_id), Some(active)) = (reader, auth.get_untracked()) {
                        let row = UserStateRow::mark_read(&user_id, &id);
                        spawn_local(async move {
                            if let Err(e) =
                                api::upsert_user_state(&active.access_token, &row).await
                            {
                                leptos::logging::error!("Mark-read failed: {e}");
                            }
                        });
                    }
                }
                Ok(None) => status.set(format!("{id} no longer exists")),
                Err(e) => {
                    leptos::logging::error!("Loading {id} failed: {e}");
                    status.set("Error loading dashboard".to_string());
                }
            }
        });
    });

    let on_archive = Callback::new(move |(id, archived): (String, bool)| {
        let Some(active) = auth.get_untracked() else {
            status.set("Sign in to sync archives.".to_string());
            // Re-render resets the checkbox the browser just toggled.
            state.update(|_| {});
            return;
        };

        state.update(|s| s.set_archived(&id, archived));
        let row = UserStateRow::set_archived(&active.user.id, &id, archived);
        spawn_local(async move {
            if let Err(e) = api::upsert_user_state(&active.access_token, &row).await {
                leptos::logging::error!("Archive update failed: {e}");
            }
        });
    });

    let on_send = Callback::new(move |email: String| {
        if email.is_empty() {
            return;
        }
        login_status.set("Sending link...".to_string());
        spawn_local(async move {
            match api::sign_in_with_otp(&email).await {
                Ok(()) => {
                    login_status.set("Check your email for the magic link!".to_string())
                }
                Err(e) => login_status.set(e),
            }
        });
    });

    let on_auth_click = move |_| {
        match auth.get_untracked() {
            Some(active) => {
                auth.set(None);
                session::clear();
                state.update(|s| s.clear_user());
                spawn_local(async move {
                    if let Err(e) = api::sign_out(&active.access_token).await {
                        leptos::logging::warn!("Server-side sign out failed: {e}");
                    }
                });
            }
            None => show_login.set(true),
        }
    };

    let on_toggle_view = move |_| {
        content.set(None);
        state.update(|s| s.showing_archive = !s.showing_archive);
    };

    view! {
        <main style="font-family: system-ui, sans-serif; display: flex; height: 100vh; margin: 0;">
            <aside style="width: 320px; border-right: 1px solid #dee2e6; padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem;">
                <h1 style="margin: 0; font-size: 1.25rem;">"Inboard"</h1>
                <div style="display: flex; gap: 0.5rem;">
                    <button on:click=on_auth_click>
                        {move || if auth.with(|a| a.is_some()) {
                            "Sign out"
                        } else {
                            "Sign in (sync)"
                        }}
                    </button>
                    <button on:click=on_toggle_view>
                        {move || state.with(|s| if s.showing_archive {
                            "Back to inbox".to_string()
                        } else {
                            format!("View archive ({})", s.archived_count())
                        })}
                    </button>
                </div>
                <p style="margin: 0; font-size: 0.85em; color: #6c757d;">
                    {move || {
                        let note = status.get();
                        if note.is_empty() {
                            state.with(|s| format!("{} files", s.visible().len()))
                        } else {
                            note
                        }
                    }}
                </p>
                <Show
                    when=move || state.with(|s| !s.visible().is_empty())
                    fallback=|| view! { <p style="color: #6c757d;">"Nothing here."</p> }
                >
                    <DashboardList state on_select on_archive />
                </Show>
            </aside>
            <ContentView content />
            <LoginModal show=show_login status=login_status on_send />
        </main>
    }
}
