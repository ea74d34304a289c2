//! Sidebar list of dashboards for the current view

use inboard_core::AppState;
use leptos::prelude::*;

/// Renders the filtered dashboard list with per-item archive checkboxes
#[component]
pub fn DashboardList(
    state: RwSignal<AppState>,
    on_select: Callback<String>,
    on_archive: Callback<(String, bool)>,
) -> impl IntoView {
    view! {
        <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.25rem; overflow-y: auto;">
            {move || state.with(|s| {
                let selected = s.selected().map(str::to_string);
                s.visible()
                    .into_iter()
                    .map(|d| {
                        let id = d.id.clone();
                        let flags = s.state_of(&id);
                        let active = selected.as_deref() == Some(id.as_str());
                        let select_id = id.clone();
                        let archive_id = id.clone();

                        let background = if active { "#e7f1ff" } else { "transparent" };
                        let title_weight = if flags.is_read { "400" } else { "600" };
                        let date: String = d.updated_at.chars().take(10).collect();

                        view! {
                            <li
                                style=format!(
                                    "padding: 0.5rem; border-radius: 0.25rem; cursor: pointer; background-color: {};",
                                    background,
                                )
                                on:click=move |_| on_select.run(select_id.clone())
                            >
                                <p style=format!(
                                    "margin: 0 0 0.25rem 0; font-weight: {};",
                                    title_weight,
                                )>{d.title.clone()}</p>
                                <div style="display: flex; justify-content: space-between; font-size: 0.8em; color: #6c757d;">
                                    <span>{id.clone()}</span>
                                    <span>{date}</span>
                                </div>
                                <label
                                    style="display: block; margin-top: 0.25rem; font-size: 0.8em;"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <input
                                        type="checkbox"
                                        prop:checked=flags.is_archived
                                        on:click=|ev| ev.stop_propagation()
                                        on:change=move |ev| {
                                            on_archive.run((archive_id.clone(), event_target_checked(&ev)))
                                        }
                                    />
                                    " Archived"
                                </label>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            })}
        </ul>
    }
}
