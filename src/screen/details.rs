//! Read-only record details overlay shared by both dashboards.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::Theme;
use crate::actions::{Action, allowed_actions};
use crate::model::{ServiceRecord, UserRole};
use crate::screen::view::{format_currency, format_date, format_duration, rating_stars};

pub struct RecordDetails {
    record: ServiceRecord,
    actions: Vec<Action>,
}

impl RecordDetails {
    /// Build the overlay for `record` as seen by `role`; the action row
    /// reflects what that role may do with the record right now.
    #[must_use]
    pub fn new(record: ServiceRecord, role: UserRole) -> Self {
        let actions = allowed_actions(&record, role);
        Self { record, actions }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup = area.centered(Constraint::Percentage(60), Constraint::Percentage(60));
        frame.render_widget(Clear, popup);

        let r = &self.record;
        let label = Style::default().fg(theme.subtext1);
        let value = Style::default().fg(theme.text);
        let row = |name: &str, text: String| {
            Line::from(vec![
                Span::styled(format!("{name:<12}"), label),
                Span::styled(text, value),
            ])
        };

        let mut lines = vec![
            row("Status", r.status.label().to_string()),
            row("Type", r.service_type.clone()),
            row("Priority", r.priority.label().to_string()),
            Line::from(""),
            row("Description", r.description.clone()),
            Line::from(""),
            row("Requested", format_date(&r.created_at)),
        ];
        if let Some(homeowner) = &r.homeowner {
            lines.push(row("Homeowner", homeowner.clone()));
        }
        if let Some(provider) = &r.service_provider {
            lines.push(row("Provider", provider.clone()));
        }
        if let Some(preferred) = &r.preferred_date {
            lines.push(row("Preferred", format_date(preferred)));
        }
        if let Some(start) = &r.start_date {
            lines.push(row("Started", format_date(start)));
        }
        if let Some(updated) = &r.updated_at {
            lines.push(row("Updated", format_date(updated)));
        }
        if let Some(cost) = r.cost {
            lines.push(row("Cost", format_currency(cost)));
        }
        if let Some(duration) = r.duration {
            lines.push(row("Duration", format_duration(duration)));
        }
        if let Some(rating) = r.rating {
            lines.push(row("Rating", rating_stars(rating)));
        }
        if !self.actions.is_empty() {
            let labels: Vec<&str> = self.actions.iter().map(|a| a.label()).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", "Actions"), label),
                Span::styled(labels.join(", "), Style::default().fg(theme.peach)),
            ]));
        }

        let block = Block::default()
            .title(format!(" {} ", r.display_name()))
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            popup,
        );
    }
}
