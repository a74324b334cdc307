//! Report Filtering
//!
//! Client-side substring search over the cached collection. Runs
//! synchronously on every keystroke; never touches the network.

use crate::models::Report;

/// A record matches when the term appears case-insensitively in the body or
/// notes, or literally in the date. The empty term matches everything.
pub fn matches(record: &Report, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.report.to_lowercase().contains(&needle)
        || record.notes.to_lowercase().contains(&needle)
        || record.date.contains(term)
}

/// Derive the display list: matching records in cache order
pub fn filter_reports(reports: &[Report], term: &str) -> Vec<Report> {
    reports
        .iter()
        .filter(|record| matches(record, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(date: &str, report: &str, notes: &str) -> Report {
        Report {
            id: None,
            date: date.to_string(),
            report: report.to_string(),
            notes: notes.to_string(),
        }
    }

    fn sample() -> Vec<Report> {
        vec![
            make_report("2024-01-01", "Met client", ""),
            make_report("2024-02-01", "Wrote report", "deadline friday"),
        ]
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let reports = sample();
        assert_eq!(filter_reports(&reports, ""), reports);
    }

    #[test]
    fn test_body_match_is_case_insensitive() {
        let reports = sample();
        let hits = filter_reports(&reports, "MET");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].report, "Met client");
    }

    #[test]
    fn test_notes_match_is_case_insensitive() {
        let reports = sample();
        let hits = filter_reports(&reports, "Friday");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].report, "Wrote report");
    }

    #[test]
    fn test_date_match_is_literal() {
        let reports = sample();
        let hits = filter_reports(&reports, "2024-01");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, "2024-01-01");
    }

    #[test]
    fn test_term_spanning_fields_picks_the_right_record() {
        let reports = sample();
        let hits = filter_reports(&reports, "report");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].report, "Wrote report");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let reports = sample();
        assert!(filter_reports(&reports, "standup").is_empty());
    }

    #[test]
    fn test_empty_notes_are_safe_to_match_against() {
        let record = make_report("2024-01-01", "Met client", "");
        assert!(!matches(&record, "deadline"));
        assert!(matches(&record, ""));
    }

    #[test]
    fn test_order_is_preserved_across_matches() {
        let reports = vec![
            make_report("2024-01-01", "standup notes", ""),
            make_report("2024-01-02", "client call", ""),
            make_report("2024-01-03", "standup again", ""),
        ];
        let hits = filter_reports(&reports, "standup");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].date, "2024-01-01");
        assert_eq!(hits[1].date, "2024-01-03");
    }
}
