//! Pure view-model helpers shared by both dashboards.
//!
//! Everything here is a projection of server data into display strings and
//! colors; no state, no side effects.

use ratatui::style::Color;

use crate::Theme;
use crate::model::{Priority, ServiceStatus, parse_timestamp};

/// Fixed status badge color table.
#[must_use]
pub const fn status_color(theme: &Theme, status: ServiceStatus) -> Color {
    match status {
        ServiceStatus::Pending => theme.warning(),
        ServiceStatus::Scheduled => theme.sky,
        ServiceStatus::InProgress => theme.blue,
        ServiceStatus::Completed => theme.success(),
        ServiceStatus::Cancelled => theme.overlay0,
    }
}

#[must_use]
pub const fn priority_color(theme: &Theme, priority: Priority) -> Color {
    match priority {
        Priority::Low => theme.teal,
        Priority::Medium => theme.peach,
        Priority::High => theme.red,
    }
}

/// Human-readable timestamp, passing unparseable values through unchanged.
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || value.to_string(),
        |dt| {
            if dt.format("%H:%M").to_string() == "00:00" {
                dt.format("%b %d, %Y").to_string()
            } else {
                dt.format("%b %d, %Y %H:%M").to_string()
            }
        },
    )
}

#[must_use]
pub fn format_currency(cost: f64) -> String {
    format!("${cost:.2}")
}

/// Duration in hours, as the completed table shows it.
#[must_use]
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        format!("{:.0} min", hours * 60.0)
    } else {
        format!("{hours:.1} h")
    }
}

/// Five-star rating string, e.g. `★★★☆☆`.
#[must_use]
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-03T14:30:00"), "Jun 03, 2025 14:30");
        assert_eq!(format_date("2025-06-03"), "Jun 03, 2025");
        // Unparseable values pass through so bad server data stays visible
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(120.5), "$120.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(2.5), "2.5 h");
        assert_eq!(format_duration(0.5), "30 min");
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(5), "★★★★★");
        // Out-of-range values clamp instead of panicking
        assert_eq!(rating_stars(9), "★★★★★");
    }
}
