//! Magic-link sign-in modal

use leptos::prelude::*;

/// Email form for requesting a magic link; clicking the backdrop closes it
#[component]
pub fn LoginModal(
    show: RwSignal<bool>,
    status: RwSignal<String>,
    on_send: Callback<String>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());

    view! {
        <Show when=move || show.get()>
            <div
                style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center;"
                on:click=move |_| show.set(false)
            >
                <div
                    style="background: white; padding: 1.5rem; border-radius: 0.5rem; width: 320px;"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h3 style="margin-top: 0;">"Sign in"</h3>
                    <p style="font-size: 0.9em;">"A magic link will be emailed to you."</p>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        style="width: 100%; box-sizing: border-box; padding: 0.4rem; margin-bottom: 0.5rem;"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button on:click=move |_| {
                        on_send.run(email.get_untracked())
                    }>"Send magic link"</button>
                    <p style="font-size: 0.85em;">{move || status.get()}</p>
                </div>
            </div>
        </Show>
    }
}
