//! Frontend Models
//!
//! Data structures matching the report-store service wire format.

use serde::{Deserialize, Serialize};

/// One daily report as returned by `GET /reports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Server-assigned identity; records from the date-keyed era carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: String,
    pub report: String,
    /// Absent notes deserialize as empty
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_notes_or_id() {
        let report: Report =
            serde_json::from_str(r#"{"date":"2024-01-01","report":"Fixed bug"}"#).unwrap();
        assert_eq!(report.id, None);
        assert_eq!(report.date, "2024-01-01");
        assert_eq!(report.report, "Fixed bug");
        assert_eq!(report.notes, "");
    }

    #[test]
    fn test_deserialize_full_record() {
        let report: Report = serde_json::from_str(
            r#"{"id":"66b1","date":"2024-02-01","report":"Wrote report","notes":"ship it"}"#,
        )
        .unwrap();
        assert_eq!(report.id.as_deref(), Some("66b1"));
        assert_eq!(report.notes, "ship it");
    }
}
