//! Draft State Machine
//!
//! The transient staging area behind the report form. Two states: `Creating`
//! (the default) and `Editing`, entered by picking a record from the list.
//! Kept free of browser types so it can be exercised without a rendered UI.

use crate::models::Report;

/// Whether the draft is creating a new record or editing an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum DraftMode {
    Creating,
    /// Carries the date the edit started from; updates are keyed by it
    Editing { original_date: String },
}

/// The report form's working copy
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub date: String,
    pub report: String,
    pub notes: String,
    pub mode: DraftMode,
}

impl Draft {
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            date: today.into(),
            report: String::new(),
            notes: String::new(),
            mode: DraftMode::Creating,
        }
    }

    /// Populate the draft from an existing record and capture its date as
    /// the edit target
    pub fn begin_edit(&mut self, record: &Report) {
        self.date = record.date.clone();
        self.report = record.report.clone();
        self.notes = record.notes.clone();
        self.mode = DraftMode::Editing {
            original_date: record.date.clone(),
        };
    }

    /// Back to a blank create draft; used after every successful submission
    /// or delete, and on cancel
    pub fn reset(&mut self, today: impl Into<String>) {
        *self = Draft::new(today);
    }

    /// The date field is locked while an edit is in progress
    pub fn set_date(&mut self, date: impl Into<String>) {
        if !self.is_editing() {
            self.date = date.into();
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Editing { .. })
    }

    /// The date the current edit is keyed by, if any
    pub fn edit_target(&self) -> Option<&str> {
        match &self.mode {
            DraftMode::Editing { original_date } => Some(original_date),
            DraftMode::Creating => None,
        }
    }

    /// Both `date` and `report` must be present before anything goes on the
    /// wire
    pub fn has_required_fields(&self) -> bool {
        !self.date.is_empty() && !self.report.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(date: &str, report: &str, notes: &str) -> Report {
        Report {
            id: Some("66b1".to_string()),
            date: date.to_string(),
            report: report.to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = Draft::new("2024-03-15");
        assert_eq!(draft.date, "2024-03-15");
        assert_eq!(draft.report, "");
        assert_eq!(draft.notes, "");
        assert!(!draft.is_editing());
        assert_eq!(draft.edit_target(), None);
    }

    #[test]
    fn test_begin_edit_populates_draft_and_captures_target() {
        let mut draft = Draft::new("2024-03-15");
        draft.begin_edit(&make_report("2024-01-01", "Fixed bug", "see PR"));

        assert_eq!(draft.date, "2024-01-01");
        assert_eq!(draft.report, "Fixed bug");
        assert_eq!(draft.notes, "see PR");
        assert!(draft.is_editing());
        assert_eq!(draft.edit_target(), Some("2024-01-01"));
    }

    #[test]
    fn test_date_is_locked_while_editing() {
        let mut draft = Draft::new("2024-03-15");
        draft.set_date("2024-03-16");
        assert_eq!(draft.date, "2024-03-16");

        draft.begin_edit(&make_report("2024-01-01", "Fixed bug", ""));
        draft.set_date("2024-02-02");
        assert_eq!(draft.date, "2024-01-01");
        assert_eq!(draft.edit_target(), Some("2024-01-01"));
    }

    #[test]
    fn test_edit_target_survives_body_edits() {
        let mut draft = Draft::new("2024-03-15");
        draft.begin_edit(&make_report("2024-01-01", "Fixed bug", ""));
        draft.report = "Fixed bug and wrote tests".to_string();
        draft.notes = "follow-up".to_string();
        assert_eq!(draft.edit_target(), Some("2024-01-01"));
    }

    #[test]
    fn test_reset_returns_to_creating() {
        let mut draft = Draft::new("2024-03-15");
        draft.begin_edit(&make_report("2024-01-01", "Fixed bug", "see PR"));
        draft.reset("2024-03-15");

        assert_eq!(draft, Draft::new("2024-03-15"));
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_required_fields_gate() {
        let mut draft = Draft::new("2024-03-15");
        assert!(!draft.has_required_fields());

        draft.report = "Met client".to_string();
        assert!(draft.has_required_fields());

        draft.date = String::new();
        assert!(!draft.has_required_fields());
    }
}
