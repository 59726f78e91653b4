//! The status → action state machine and local input validation.
//!
//! Rendering consults [`allowed_actions`] to decide which affordances a card
//! or row exposes; the dispatchers run the `validate_*` functions before any
//! network call. A validation failure blocks the request entirely.

use crate::model::{ServiceRecord, ServiceStatus, UserRole};

/// A user-triggered affordance on a service record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Claim an unassigned pending request (provider).
    Accept,
    /// Cosmetically dim a pending request until the next refresh (provider).
    /// Has no server effect and is never persisted.
    Skip,
    /// Move a scheduled job to in-progress (provider).
    Start,
    /// Finish an in-progress job, recording cost and notes (provider).
    Complete,
    /// Rate a completed service 1–5 (homeowner).
    Rate,
    /// Pick a new preferred date for a non-terminal request (homeowner).
    Reschedule,
    /// Open the read-only details overlay.
    View,
}

impl Action {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Skip => "Skip",
            Self::Start => "Start",
            Self::Complete => "Complete",
            Self::Rate => "Rate",
            Self::Reschedule => "Reschedule",
            Self::View => "View",
        }
    }
}

/// Which actions a record exposes for a given viewer role.
///
/// Terminal states (`completed`, `cancelled`) only ever offer `view` plus,
/// for the homeowner on a completed job, `rate`.
#[must_use]
pub fn allowed_actions(record: &ServiceRecord, role: UserRole) -> Vec<Action> {
    match (role, record.status) {
        (UserRole::ServiceProvider, ServiceStatus::Pending) if record.is_unassigned() => {
            vec![Action::Accept, Action::Skip]
        }
        (UserRole::ServiceProvider, ServiceStatus::Pending) => vec![Action::View],
        (UserRole::ServiceProvider, ServiceStatus::Scheduled) => {
            vec![Action::Start, Action::View]
        }
        (UserRole::ServiceProvider, ServiceStatus::InProgress) => {
            vec![Action::Complete, Action::View]
        }
        (UserRole::ServiceProvider, ServiceStatus::Completed | ServiceStatus::Cancelled) => {
            vec![Action::View]
        }
        (UserRole::Homeowner, ServiceStatus::Completed) => vec![Action::View, Action::Rate],
        (UserRole::Homeowner, ServiceStatus::Cancelled) => vec![Action::View],
        (UserRole::Homeowner, _) => vec![Action::View, Action::Reschedule],
    }
}

/// Reason a local input was rejected before reaching the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0}")]
    Invalid(String),
}

/// A new service request, validated and ready for
/// `/api/create-service-request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
    pub service_type: String,
    pub priority: crate::model::Priority,
    pub description: String,
    pub preferred_date: Option<String>,
}

/// Validate the create-request form. The preferred date is optional; when
/// both a date and a time are given they are combined the way the server
/// expects (`YYYY-MM-DD HH:MM`).
pub fn validate_new_request(
    service_type: &str,
    priority: Option<crate::model::Priority>,
    description: &str,
    preferred_date: &str,
    preferred_time: &str,
) -> Result<NewRequest, ValidationError> {
    let service_type = service_type.trim();
    if service_type.is_empty() {
        return Err(ValidationError::Missing("service type"));
    }
    let Some(priority) = priority else {
        return Err(ValidationError::Missing("priority"));
    };
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::Missing("description"));
    }

    let preferred_date = match (preferred_date.trim(), preferred_time.trim()) {
        ("", _) => None,
        (date, time) => {
            if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err(ValidationError::Invalid(format!(
                    "invalid date {date:?}, expected YYYY-MM-DD"
                )));
            }
            if time.is_empty() {
                Some(date.to_string())
            } else {
                if chrono::NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                    return Err(ValidationError::Invalid(format!(
                        "invalid time {time:?}, expected HH:MM"
                    )));
                }
                Some(format!("{date} {time}"))
            }
        }
    };

    Ok(NewRequest {
        service_type: service_type.to_string(),
        priority,
        description: description.to_string(),
        preferred_date,
    })
}

/// Cost entered when completing a job must parse as a positive number.
pub fn validate_cost(input: &str) -> Result<f64, ValidationError> {
    let cost: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::Invalid(format!("{input:?} is not a number")))?;
    if cost <= 0.0 || !cost.is_finite() {
        return Err(ValidationError::Invalid(
            "cost must be greater than zero".to_string(),
        ));
    }
    Ok(cost)
}

/// Ratings are whole stars from 1 to 5.
pub fn validate_rating(rating: u8) -> Result<u8, ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::Invalid(
            "rating must be between 1 and 5".to_string(),
        ))
    }
}

/// A reschedule needs at least a new date; time is optional.
pub fn validate_reschedule(date: &str, time: &str) -> Result<String, ValidationError> {
    let date = date.trim();
    if date.is_empty() {
        return Err(ValidationError::Missing("new date"));
    }
    if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(ValidationError::Invalid(format!(
            "invalid date {date:?}, expected YYYY-MM-DD"
        )));
    }
    let time = time.trim();
    if time.is_empty() {
        Ok(date.to_string())
    } else {
        if chrono::NaiveTime::parse_from_str(time, "%H:%M").is_err() {
            return Err(ValidationError::Invalid(format!(
                "invalid time {time:?}, expected HH:MM"
            )));
        }
        Ok(format!("{date} {time}"))
    }
}

/// Sign-up form rules, mirroring the server's own checks so most failures
/// never leave the client.
pub fn validate_signup(
    username: &str,
    password: &str,
    confirm_password: &str,
    role: Option<UserRole>,
) -> Result<(), ValidationError> {
    if role.is_none() {
        return Err(ValidationError::Missing("user type"));
    }
    if username.len() < 3 {
        return Err(ValidationError::Invalid(
            "username must be at least 3 characters long".to_string(),
        ));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::Invalid(
            "username can only contain letters, numbers, and underscores".to_string(),
        ));
    }
    if password.len() < 6 {
        return Err(ValidationError::Invalid(
            "password must be at least 6 characters long".to_string(),
        ));
    }
    if password != confirm_password {
        return Err(ValidationError::Invalid(
            "passwords do not match".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn record(status: ServiceStatus, provider: Option<&str>) -> ServiceRecord {
        ServiceRecord {
            service_id: "s1".to_string(),
            status,
            service: None,
            service_type: "plumbing".to_string(),
            priority: Priority::Medium,
            description: "test".to_string(),
            homeowner: Some("john".to_string()),
            service_provider: provider.map(String::from),
            created_at: "2024-01-01T00:00:00".to_string(),
            preferred_date: None,
            start_date: None,
            updated_at: None,
            cost: None,
            duration: None,
            rating: None,
        }
    }

    #[test]
    fn test_pending_unassigned_provider_actions() {
        let r = record(ServiceStatus::Pending, None);
        assert_eq!(
            allowed_actions(&r, UserRole::ServiceProvider),
            vec![Action::Accept, Action::Skip]
        );
    }

    #[test]
    fn test_completed_actions_per_role() {
        let r = record(ServiceStatus::Completed, Some("jane"));
        assert_eq!(
            allowed_actions(&r, UserRole::Homeowner),
            vec![Action::View, Action::Rate]
        );
        assert_eq!(
            allowed_actions(&r, UserRole::ServiceProvider),
            vec![Action::View]
        );
    }

    #[test]
    fn test_homeowner_reschedule_only_non_terminal() {
        for status in [
            ServiceStatus::Pending,
            ServiceStatus::Scheduled,
            ServiceStatus::InProgress,
        ] {
            let actions = allowed_actions(&record(status, None), UserRole::Homeowner);
            assert!(actions.contains(&Action::Reschedule), "{status:?}");
        }
        for status in [ServiceStatus::Completed, ServiceStatus::Cancelled] {
            let actions = allowed_actions(&record(status, None), UserRole::Homeowner);
            assert!(!actions.contains(&Action::Reschedule), "{status:?}");
        }
    }

    #[test]
    fn test_provider_lifecycle_actions() {
        let scheduled = record(ServiceStatus::Scheduled, Some("jane"));
        assert_eq!(
            allowed_actions(&scheduled, UserRole::ServiceProvider)[0],
            Action::Start
        );
        let in_progress = record(ServiceStatus::InProgress, Some("jane"));
        assert_eq!(
            allowed_actions(&in_progress, UserRole::ServiceProvider)[0],
            Action::Complete
        );
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let result = validate_new_request("plumbing", Some(Priority::High), "  ", "", "");
        assert_eq!(result, Err(ValidationError::Missing("description")));
    }

    #[test]
    fn test_new_request_combines_date_and_time() {
        let request =
            validate_new_request("hvac", Some(Priority::Low), "AC check", "2025-06-04", "10:30")
                .unwrap();
        assert_eq!(request.preferred_date.as_deref(), Some("2025-06-04 10:30"));

        let flexible =
            validate_new_request("hvac", Some(Priority::Low), "AC check", "", "10:30").unwrap();
        assert_eq!(flexible.preferred_date, None);
    }

    #[test]
    fn test_cost_must_be_positive_number() {
        assert!(validate_cost("120.50").is_ok());
        assert!(validate_cost("0").is_err());
        assert!(validate_cost("-5").is_err());
        assert!(validate_cost("twenty").is_err());
        assert!(validate_cost("").is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_reschedule_requires_date() {
        assert_eq!(
            validate_reschedule("", "10:00"),
            Err(ValidationError::Missing("new date"))
        );
        assert_eq!(
            validate_reschedule("2025-07-01", "").as_deref(),
            Ok("2025-07-01")
        );
        assert_eq!(
            validate_reschedule("2025-07-01", "09:15").as_deref(),
            Ok("2025-07-01 09:15")
        );
    }

    #[test]
    fn test_signup_rules() {
        let ok = validate_signup("john_doe", "secret1", "secret1", Some(UserRole::Homeowner));
        assert!(ok.is_ok());
        assert!(validate_signup("jo", "secret1", "secret1", Some(UserRole::Homeowner)).is_err());
        assert!(
            validate_signup("john doe", "secret1", "secret1", Some(UserRole::Homeowner)).is_err()
        );
        assert!(validate_signup("john", "short", "short", Some(UserRole::Homeowner)).is_err());
        assert!(
            validate_signup("john", "secret1", "secret2", Some(UserRole::Homeowner)).is_err()
        );
        assert!(validate_signup("john", "secret1", "secret1", None).is_err());
    }
}
