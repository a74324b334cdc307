//! UI Components
//!
//! Reusable Leptos components.

mod report_form;
mod report_list;
mod report_card;
mod delete_confirm_button;

pub use report_form::ReportForm;
pub use report_list::ReportList;
pub use report_card::ReportCard;
pub use delete_confirm_button::DeleteConfirmButton;

/// Blocking user notice, the only error surface the UI has
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
