//! Report Form Component
//!
//! Form for submitting a new report or saving an edit, backed by the shared
//! draft in AppContext.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ReportPayload};
use crate::components::alert;
use crate::context::AppContext;
use crate::draft::DraftMode;

/// Form for creating or editing a report
#[component]
pub fn ReportForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let draft = ctx.draft;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if !current.has_required_fields() {
            alert("Date and report are required");
            return;
        }

        spawn_local(async move {
            let result = match &current.mode {
                DraftMode::Creating => {
                    api::create_report(&ReportPayload {
                        date: &current.date,
                        report: &current.report,
                        notes: &current.notes,
                    })
                    .await
                }
                // Updates are keyed by the date the edit started from
                DraftMode::Editing { original_date } => {
                    api::update_report(&ReportPayload {
                        date: original_date,
                        report: &current.report,
                        notes: &current.notes,
                    })
                    .await
                }
            };

            match result {
                Ok(()) => {
                    ctx.reset_draft();
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ReportForm] Submission failed: {}", e).into(),
                    );
                }
            }
        });
    };

    view! {
        <form class="report-form" on:submit=on_submit>
            <h2>{move || if draft.with(|d| d.is_editing()) { "Edit Report" } else { "New Report" }}</h2>

            <div class="form-field">
                <label>"Date"</label>
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.date.clone())
                    prop:disabled=move || draft.with(|d| d.is_editing())
                    on:input=move |ev| draft.update(|d| d.set_date(event_target_value(&ev)))
                />
            </div>

            <div class="form-field">
                <label>"Daily Report"</label>
                <textarea
                    placeholder="Describe today's activities, achievements, and progress..."
                    prop:value=move || draft.with(|d| d.report.clone())
                    on:input=move |ev| draft.update(|d| d.report = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-field">
                <label>"Additional Notes"</label>
                <textarea
                    placeholder="Any additional notes, reminders, or observations..."
                    prop:value=move || draft.with(|d| d.notes.clone())
                    on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-actions">
                <button type="submit">
                    {move || if draft.with(|d| d.is_editing()) { "Save Changes" } else { "Submit Report" }}
                </button>
                <Show when=move || draft.with(|d| d.is_editing())>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.reset_draft()>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
