//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::dates;
use crate::draft::Draft;
use crate::models::Report;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload reports from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload reports from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// The form's working copy, shared so the list can start edits
    pub draft: RwSignal<Draft>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        draft: RwSignal<Draft>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            draft,
        }
    }

    /// Trigger a reload of the report cache
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Load a record into the form and switch it to edit mode
    pub fn begin_edit(&self, record: &Report) {
        self.draft.update(|d| d.begin_edit(record));
    }

    /// Back to a blank create draft dated today
    pub fn reset_draft(&self) {
        let today = dates::today();
        self.draft.update(|d| d.reset(today));
    }
}
