//! CSV export of completed service records.

use crate::model::ServiceRecord;

const HEADER: &str = "Service,Type,Provider,Date,Cost,Rating";

/// Build the CSV document for the given completed records.
///
/// Returns `None` when there is nothing to export; callers show an
/// informational toast instead of writing an empty file.
#[must_use]
pub fn completed_to_csv(records: &[ServiceRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut out = String::from(HEADER);
    out.push('\n');
    for record in records {
        let row = [
            escape(record.display_name()),
            escape(&record.service_type),
            escape(record.service_provider.as_deref().unwrap_or("-")),
            escape(record.updated_at.as_deref().unwrap_or(&record.created_at)),
            record
                .cost
                .map_or_else(|| "-".to_string(), |cost| format!("{cost:.2}")),
            record
                .rating
                .map_or_else(|| "-".to_string(), |rating| rating.to_string()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    Some(out)
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, ServiceStatus};

    fn completed(name: &str, cost: Option<f64>, rating: Option<u8>) -> ServiceRecord {
        ServiceRecord {
            service_id: "s1".to_string(),
            status: ServiceStatus::Completed,
            service: Some(name.to_string()),
            service_type: "plumbing".to_string(),
            priority: Priority::Medium,
            description: "desc".to_string(),
            homeowner: Some("john".to_string()),
            service_provider: Some("jane".to_string()),
            created_at: "2025-06-01T08:00:00".to_string(),
            preferred_date: None,
            start_date: None,
            updated_at: Some("2025-06-04T16:30:00".to_string()),
            cost,
            duration: None,
            rating,
        }
    }

    #[test]
    fn test_empty_export_produces_no_document() {
        assert!(completed_to_csv(&[]).is_none());
    }

    #[test]
    fn test_export_rows() {
        let csv = completed_to_csv(&[completed("Faucet Repair", Some(120.5), Some(4))]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(
            lines.next(),
            Some("Faucet Repair,plumbing,jane,2025-06-04T16:30:00,120.50,4")
        );
    }

    #[test]
    fn test_missing_cost_and_rating_render_as_dash() {
        let csv = completed_to_csv(&[completed("Job", None, None)]).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(",-,-"));
    }

    #[test]
    fn test_comma_in_field_is_quoted() {
        let csv = completed_to_csv(&[completed("Repair, urgent", None, None)]).unwrap();
        assert!(csv.contains("\"Repair, urgent\""));
    }
}
