//! Report List Component
//!
//! Search box plus the filtered report history. Filtering is derived state
//! over the store's cache and search term; the server is never consulted.

use leptos::prelude::*;

use crate::components::ReportCard;
use crate::filter::filter_reports;
use crate::store::{store_set_search_term, use_app_store, AppStateStoreFields};

/// Report history with free-text search
#[component]
pub fn ReportList() -> impl IntoView {
    let store = use_app_store();

    let filtered = move || {
        let reports = store.reports().get();
        let term = store.search_term().get();
        filter_reports(&reports, &term)
    };

    view! {
        <section class="report-list">
            <div class="report-list-header">
                <h2>"Report History"</h2>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search reports..."
                    prop:value=move || store.search_term().get()
                    on:input=move |ev| store_set_search_term(&store, event_target_value(&ev))
                />
            </div>

            {move || {
                if filtered().is_empty() {
                    view! { <p class="empty-state">"No reports found"</p> }.into_any()
                } else {
                    view! {
                        <div class="report-entries">
                            <For
                                each=filtered
                                key=|r| (r.id.clone(), r.date.clone())
                                children=move |record| view! { <ReportCard report=record /> }
                            />
                        </div>
                    }.into_any()
                }
            }}

            <p class="report-count">
                {move || format!("{} reports shown", filtered().len())}
            </p>
        </section>
    }
}
