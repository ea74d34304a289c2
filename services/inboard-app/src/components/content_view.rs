//! Embedded frame for the selected dashboard

use leptos::prelude::*;

/// Shows the selected dashboard's HTML in a sandboxed iframe, or an empty
/// state when nothing is selected
#[component]
pub fn ContentView(content: RwSignal<Option<(String, String)>>) -> impl IntoView {
    view! {
        <section style="flex: 1; display: flex; flex-direction: column; min-width: 0; padding: 0.5rem 1rem;">
            {move || match content.get() {
                Some((title, html)) => view! {
                    <div style="flex: 1; display: flex; flex-direction: column;">
                        <h2 style="margin: 0 0 0.5rem 0;">{title}</h2>
                        <iframe
                            srcdoc=html
                            sandbox="allow-scripts"
                            style="flex: 1; width: 100%; border: 1px solid #dee2e6; border-radius: 0.25rem;"
                        ></iframe>
                    </div>
                }
                .into_any(),
                None => view! {
                    <p style="margin: auto; color: #6c757d;">
                        "Select a dashboard from the list."
                    </p>
                }
                .into_any(),
            }}
        </section>
    }
}
