//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Report;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Server-confirmed snapshot: exactly the last `GET /reports` response
    pub reports: Vec<Report>,
    /// Free-text search over the cached reports
    pub search_term: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cache wholesale with a fresh server response
pub fn store_replace_reports(store: &AppStore, reports: Vec<Report>) {
    *store.reports().write() = reports;
}

/// Update the search term
pub fn store_set_search_term(store: &AppStore, term: String) {
    *store.search_term().write() = term;
}
