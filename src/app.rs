//! Daily Reports App
//!
//! Top-level component: provides the store and context, keeps the report
//! cache aligned with the server, and lays out the form and history columns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ReportForm, ReportList};
use crate::context::AppContext;
use crate::dates;
use crate::draft::Draft;
use crate::store::{store_replace_reports, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let draft = RwSignal::new(Draft::new(dates::today()));
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), draft));

    // Refresh the cache whenever a mutation bumps the trigger. The first run
    // is the initial load. Overlapping reloads are not sequenced; the last
    // one to resolve wins.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match api::list_reports().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[App] Loaded {} reports, trigger={}", loaded.len(), trigger)
                            .into(),
                    );
                    store_replace_reports(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[App] Failed to load reports: {}", e).into(),
                    );
                }
            }
        });
    });

    let on_export = move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url(&api::export_url()) {
                web_sys::console::error_1(&e);
            }
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div>
                    <h1>"Daily Reports"</h1>
                    <p class="subtitle">"Office Management System"</p>
                </div>
                <button class="export-btn" on:click=on_export>
                    "Export CSV"
                </button>
            </header>

            <main class="main-content">
                <ReportForm />
                <ReportList />
            </main>
        </div>
    }
}
