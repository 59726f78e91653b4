use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a service record.
///
/// Transitions are driven exclusively by server-validated action calls;
/// the client only observes them through re-fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Pending,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ServiceStatus {
    /// Badge label shown next to a job card or table row.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Terminal states accept no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Wire representation used by `/api/update-service-status`.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of the signed-in user, as reported by `/api/current-user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Homeowner,
    ServiceProvider,
}

impl UserRole {
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Homeowner => "homeowner",
            Self::ServiceProvider => "service_provider",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Homeowner => f.write_str("Homeowner"),
            Self::ServiceProvider => f.write_str("Service Provider"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub user_type: UserRole,
}

/// A service request exchanged between a homeowner and a provider.
///
/// Server-owned; the client treats every record as a read-only snapshot and
/// recomputes all derived state (buckets, stats) on each fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceRecord {
    pub service_id: String,
    pub status: ServiceStatus,
    #[serde(default)]
    pub service: Option<String>,
    pub service_type: String,
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub homeowner: Option<String>,
    #[serde(default)]
    pub service_provider: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl ServiceRecord {
    /// Display name, falling back to a generic title for records created
    /// before the server started filling the `service` field.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.service.as_deref().unwrap_or("Service Request")
    }

    /// A record is claimable by a provider while no provider is assigned.
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        self.service_provider.is_none()
    }

    /// Sort key for the completed bucket: `updated_at`, falling back to
    /// `created_at` for records the server never touched after creation.
    #[must_use]
    pub fn updated_at_key(&self) -> Option<NaiveDateTime> {
        self.updated_at
            .as_deref()
            .or(Some(self.created_at.as_str()))
            .and_then(parse_timestamp)
    }
}

/// Parse the timestamp formats the server is known to emit.
///
/// ISO-8601 with optional fractional seconds, the space-separated variant
/// sent by `/api/update-service-status`, and bare dates.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ServiceRecord {
        serde_json::from_str(json).expect("valid record")
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let r = record(
            r#"{
                "service_id": "service_001",
                "status": "pending",
                "service_type": "plumbing",
                "priority": "high",
                "description": "Leaking faucet",
                "created_at": "2025-06-01T08:00:00"
            }"#,
        );
        assert_eq!(r.status, ServiceStatus::Pending);
        assert_eq!(r.priority, Priority::High);
        assert!(r.is_unassigned());
        assert_eq!(r.display_name(), "Service Request");
    }

    #[test]
    fn test_deserialize_full_record() {
        let r = record(
            r#"{
                "service_id": "service_002",
                "status": "completed",
                "service": "AC Unit Maintenance",
                "service_type": "hvac",
                "priority": "medium",
                "description": "Yearly maintenance",
                "homeowner": "john_homeowner",
                "service_provider": "jane_provider",
                "created_at": "2025-06-01T08:00:00",
                "updated_at": "2025-06-04T16:30:00",
                "cost": 120.5,
                "rating": 5
            }"#,
        );
        assert_eq!(r.status, ServiceStatus::Completed);
        assert_eq!(r.display_name(), "AC Unit Maintenance");
        assert_eq!(r.cost, Some(120.5));
        assert_eq!(r.rating, Some(5));
        assert!(!r.is_unassigned());
    }

    #[test]
    fn test_status_wire_format() {
        for status in [
            ServiceStatus::Pending,
            ServiceStatus::Scheduled,
            ServiceStatus::InProgress,
            ServiceStatus::Completed,
            ServiceStatus::Cancelled,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_wire()));
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(ServiceStatus::Completed.is_terminal());
        assert!(ServiceStatus::Cancelled.is_terminal());
        assert!(!ServiceStatus::Pending.is_terminal());
        assert!(!ServiceStatus::Scheduled.is_terminal());
        assert!(!ServiceStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-06-03T14:30:00").is_some());
        assert!(parse_timestamp("2025-06-03T14:30:00.123456").is_some());
        assert!(parse_timestamp("2025-06-03 14:30").is_some());
        assert!(parse_timestamp("2025-06-03").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_updated_at_key_falls_back_to_created_at() {
        let r = record(
            r#"{
                "service_id": "s1",
                "status": "completed",
                "service_type": "plumbing",
                "priority": "low",
                "description": "x",
                "created_at": "2024-01-15T10:00:00"
            }"#,
        );
        assert!(r.updated_at_key().is_some());
    }
}
