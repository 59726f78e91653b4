//! Bucket classification for dashboard panels.
//!
//! Every refresh cycle re-runs [`classify`] over the full fetched list; no
//! classification survives across fetches. Buckets are pairwise disjoint.
//! Cancelled records fall into no bucket and are hidden from every panel.

use crate::model::{ServiceRecord, ServiceStatus};

/// How many completed jobs the provider dashboard keeps in its history table.
pub const PROVIDER_COMPLETED_CAP: usize = 10;

/// The disjoint view buckets driving the dashboard panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    /// `status == pending`.
    pub pending: Vec<ServiceRecord>,
    /// `status ∈ {scheduled, in_progress}`.
    pub active: Vec<ServiceRecord>,
    /// `status == completed`, most recently updated first.
    pub completed: Vec<ServiceRecord>,
}

/// Partition `records` into view buckets.
///
/// The completed bucket is sorted by `updated_at` descending and, when `cap`
/// is given, truncated to the most recent entries (the provider dashboard
/// shows the last [`PROVIDER_COMPLETED_CAP`]; the homeowner view is
/// unbounded).
#[must_use]
pub fn classify(records: &[ServiceRecord], cap: Option<usize>) -> Buckets {
    let mut buckets = Buckets::default();

    for record in records {
        match record.status {
            ServiceStatus::Pending => buckets.pending.push(record.clone()),
            ServiceStatus::Scheduled | ServiceStatus::InProgress => {
                buckets.active.push(record.clone());
            }
            ServiceStatus::Completed => buckets.completed.push(record.clone()),
            ServiceStatus::Cancelled => {}
        }
    }

    buckets
        .completed
        .sort_by(|a, b| b.updated_at_key().cmp(&a.updated_at_key()));
    if let Some(cap) = cap {
        buckets.completed.truncate(cap);
    }

    buckets
}

/// Derived counters for the provider dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProviderStats {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total_earnings: f64,
}

#[must_use]
pub fn provider_stats(records: &[ServiceRecord]) -> ProviderStats {
    let mut stats = ProviderStats::default();
    for record in records {
        match record.status {
            ServiceStatus::Pending => stats.pending += 1,
            ServiceStatus::InProgress => stats.in_progress += 1,
            ServiceStatus::Completed => {
                stats.completed += 1;
                stats.total_earnings += record.cost.unwrap_or(0.0);
            }
            ServiceStatus::Scheduled | ServiceStatus::Cancelled => {}
        }
    }
    stats
}

/// Derived counters for the homeowner dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeownerStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub scheduled: usize,
}

#[must_use]
pub fn homeowner_stats(records: &[ServiceRecord]) -> HomeownerStats {
    let mut stats = HomeownerStats {
        total: records.len(),
        ..HomeownerStats::default()
    };
    for record in records {
        match record.status {
            ServiceStatus::InProgress => stats.in_progress += 1,
            ServiceStatus::Completed => stats.completed += 1,
            ServiceStatus::Scheduled => stats.scheduled += 1,
            ServiceStatus::Pending | ServiceStatus::Cancelled => {}
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn record(id: &str, status: ServiceStatus, updated_at: Option<&str>) -> ServiceRecord {
        ServiceRecord {
            service_id: id.to_string(),
            status,
            service: None,
            service_type: "plumbing".to_string(),
            priority: Priority::High,
            description: "test".to_string(),
            homeowner: Some("john".to_string()),
            service_provider: None,
            created_at: "2024-01-01T00:00:00".to_string(),
            preferred_date: None,
            start_date: None,
            updated_at: updated_at.map(String::from),
            cost: None,
            duration: None,
            rating: None,
        }
    }

    fn with_cost(mut r: ServiceRecord, cost: f64) -> ServiceRecord {
        r.cost = Some(cost);
        r
    }

    #[test]
    fn test_single_pending_record() {
        let records = vec![record("s1", ServiceStatus::Pending, None)];
        let buckets = classify(&records, None);
        assert_eq!(buckets.pending.len(), 1);
        assert!(buckets.active.is_empty());
        assert!(buckets.completed.is_empty());
    }

    #[test]
    fn test_buckets_are_disjoint() {
        let records = vec![
            record("s1", ServiceStatus::Pending, None),
            record("s2", ServiceStatus::Scheduled, None),
            record("s3", ServiceStatus::InProgress, None),
            record("s4", ServiceStatus::Completed, Some("2024-01-01T00:00:00")),
            record("s5", ServiceStatus::Cancelled, None),
        ];
        let buckets = classify(&records, None);

        let mut seen = std::collections::HashSet::new();
        for r in buckets
            .pending
            .iter()
            .chain(&buckets.active)
            .chain(&buckets.completed)
        {
            assert!(seen.insert(r.service_id.clone()), "record in two buckets");
        }
        // Cancelled records are hidden from every bucket.
        assert!(!seen.contains("s5"));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let records = vec![
            record("s1", ServiceStatus::Pending, None),
            record("s2", ServiceStatus::Completed, Some("2024-02-01T00:00:00")),
            record("s3", ServiceStatus::Completed, Some("2024-01-01T00:00:00")),
        ];
        assert_eq!(classify(&records, Some(10)), classify(&records, Some(10)));
    }

    #[test]
    fn test_completed_sorted_most_recent_first() {
        let records = vec![
            record("jan", ServiceStatus::Completed, Some("2024-01-01T00:00:00")),
            record("feb", ServiceStatus::Completed, Some("2024-02-01T00:00:00")),
        ];
        let buckets = classify(&records, None);
        assert_eq!(buckets.completed[0].service_id, "feb");
        assert_eq!(buckets.completed[1].service_id, "jan");
    }

    #[test]
    fn test_completed_cap() {
        let records: Vec<_> = (0..15)
            .map(|i| {
                record(
                    &format!("s{i}"),
                    ServiceStatus::Completed,
                    Some(&format!("2024-01-{:02}T00:00:00", i + 1)),
                )
            })
            .collect();
        let buckets = classify(&records, Some(PROVIDER_COMPLETED_CAP));
        assert_eq!(buckets.completed.len(), PROVIDER_COMPLETED_CAP);
        // Cap keeps the most recent entries.
        assert_eq!(buckets.completed[0].service_id, "s14");
    }

    #[test]
    fn test_scheduled_and_in_progress_share_active() {
        let records = vec![
            record("s1", ServiceStatus::Scheduled, None),
            record("s2", ServiceStatus::InProgress, None),
        ];
        let buckets = classify(&records, None);
        assert_eq!(buckets.active.len(), 2);
    }

    #[test]
    fn test_provider_stats_earnings() {
        let records = vec![
            with_cost(
                record("s1", ServiceStatus::Completed, Some("2024-01-01T00:00:00")),
                100.0,
            ),
            with_cost(
                record("s2", ServiceStatus::Completed, Some("2024-01-02T00:00:00")),
                50.5,
            ),
            // No cost recorded yet, contributes nothing.
            record("s3", ServiceStatus::Completed, Some("2024-01-03T00:00:00")),
            record("s4", ServiceStatus::Pending, None),
        ];
        let stats = provider_stats(&records);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completed, 3);
        assert!((stats.total_earnings - 150.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_homeowner_stats_counts_all() {
        let records = vec![
            record("s1", ServiceStatus::Pending, None),
            record("s2", ServiceStatus::Scheduled, None),
            record("s3", ServiceStatus::InProgress, None),
            record("s4", ServiceStatus::Completed, None),
        ];
        let stats = homeowner_stats(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
    }
}
