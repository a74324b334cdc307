//! Report Card Component
//!
//! One record in the history list: long-form date heading, report body,
//! notes callout, and the edit / delete entry points.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, DeleteConfirmButton};
use crate::context::AppContext;
use crate::dates::long_date;
use crate::models::Report;

#[component]
pub fn ReportCard(report: Report) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let heading = long_date(&report.date);
    let raw_date = report.date.clone();
    let has_notes = !report.notes.is_empty();
    let notes = report.notes.clone();
    let edit_source = report.clone();

    // Deletion needs a server identity; date-keyed legacy records get no
    // delete control
    let delete_control = report.id.clone().map(|id| {
        let on_confirm = Callback::new(move |_: ()| {
            let id = id.clone();
            spawn_local(async move {
                match api::delete_report(&id).await {
                    Ok(()) => {
                        ctx.reset_draft();
                        ctx.reload();
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[ReportCard] Failed to delete {}: {}", id, e).into(),
                        );
                        alert("Failed to delete report");
                    }
                }
            });
        });
        view! {
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_confirm />
        }
    });

    view! {
        <article class="report-card">
            <div class="report-card-header">
                <div>
                    <h3>{heading}</h3>
                    <p class="raw-date">{raw_date}</p>
                </div>
                <div class="report-card-actions">
                    <button
                        class="edit-btn"
                        on:click=move |_| ctx.begin_edit(&edit_source)
                    >
                        "Edit"
                    </button>
                    {delete_control}
                </div>
            </div>

            <p class="report-body">{report.report.clone()}</p>

            <Show when=move || has_notes>
                <p class="report-notes">
                    <span class="notes-label">"Notes: "</span>
                    {notes.clone()}
                </p>
            </Show>
        </article>
    }
}
