//! Homeowner dashboard: request tracking, creation, rescheduling, rating,
//! and CSV export.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::Theme;
use crate::actions::{NewRequest, validate_new_request, validate_rating, validate_reschedule};
use crate::api::ApiClient;
use crate::app::AppMsg;
use crate::classify::{Buckets, HomeownerStats, classify, homeowner_stats};
use crate::commands::Command;
use crate::config::{KeyResolver, NavAction, RequestsAction};
use crate::export::completed_to_csv;
use crate::model::{Priority, ServiceRecord, ServiceStatus, UserRole};
use crate::refresh::RefreshTracker;
use crate::screen::Screen;
use crate::screen::command::{
    CreateRequestCmd, DashMsg, ExportCsvCmd, FetchDashboardCmd, RateServiceCmd, RescheduleCmd,
};
use crate::screen::details::RecordDetails;
use crate::screen::view::{
    format_currency, format_date, priority_color, rating_stars, status_color,
};
use crate::search::Matcher;
use crate::ui::{
    ColumnDef, Component, EventResult, Keybinding, Spinner, Table, TableEvent, TableRow, TextInput,
    Toast,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Pending,
    Active,
    Completed,
}

impl Panel {
    const fn next(self) -> Self {
        match self {
            Self::Pending => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

/// Row for the pending and active panels.
#[derive(Clone)]
struct RequestRow {
    record: ServiceRecord,
}

impl TableRow for RequestRow {
    fn columns() -> &'static [ColumnDef] {
        static COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("Service", Constraint::Min(20)),
            ColumnDef::new("Type", Constraint::Length(12)),
            ColumnDef::new("Priority", Constraint::Length(8)),
            ColumnDef::new("Status", Constraint::Length(11)),
            ColumnDef::new("Provider", Constraint::Length(14)),
            ColumnDef::new("Preferred", Constraint::Length(18)),
        ];
        COLUMNS
    }

    fn key(&self) -> &str {
        &self.record.service_id
    }

    fn render_cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let r = &self.record;
        vec![
            Cell::from(r.display_name().to_string()),
            Cell::from(r.service_type.clone()),
            Cell::from(r.priority.label())
                .style(Style::default().fg(priority_color(theme, r.priority))),
            Cell::from(r.status.label())
                .style(Style::default().fg(status_color(theme, r.status))),
            Cell::from(r.service_provider.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(
                r.preferred_date
                    .as_deref()
                    .map_or_else(|| "flexible".to_string(), format_date),
            ),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let r = &self.record;
        Matcher::new().matches_any(
            [
                r.display_name(),
                &r.service_type,
                r.status.label(),
                r.service_provider.as_deref().unwrap_or(""),
            ],
            query,
        )
    }
}

/// Row for the completed panel.
#[derive(Clone)]
struct CompletedRow {
    record: ServiceRecord,
}

impl TableRow for CompletedRow {
    fn columns() -> &'static [ColumnDef] {
        static COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("Service", Constraint::Min(20)),
            ColumnDef::new("Provider", Constraint::Length(14)),
            ColumnDef::new("Completed", Constraint::Length(18)),
            ColumnDef::new("Cost", Constraint::Length(10)),
            ColumnDef::new("Rating", Constraint::Length(7)),
        ];
        COLUMNS
    }

    fn key(&self) -> &str {
        &self.record.service_id
    }

    fn render_cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let r = &self.record;
        vec![
            Cell::from(r.display_name().to_string()),
            Cell::from(r.service_provider.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(
                r.updated_at
                    .as_deref()
                    .map_or_else(|| "-".to_string(), format_date),
            ),
            Cell::from(r.cost.map_or_else(|| "-".to_string(), format_currency)),
            Cell::from(r.rating.map_or_else(|| "unrated".to_string(), rating_stars))
                .style(Style::default().fg(theme.yellow)),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let r = &self.record;
        Matcher::new().matches_any(
            [
                r.display_name(),
                &r.service_type,
                r.service_provider.as_deref().unwrap_or(""),
            ],
            query,
        )
    }
}

/// Create-request form overlay.
struct NewRequestForm {
    service_type: TextInput,
    priority: Priority,
    description: TextInput,
    date: TextInput,
    time: TextInput,
    focus: usize,
    error: Option<String>,
}

/// Field indices within [`NewRequestForm`]. Priority is a selector, not a
/// text input.
const FORM_TYPE: usize = 0;
const FORM_PRIORITY: usize = 1;
const FORM_DESCRIPTION: usize = 2;
const FORM_DATE: usize = 3;
const FORM_TIME: usize = 4;
const FORM_FIELDS: usize = 5;

impl NewRequestForm {
    fn new() -> Self {
        let mut service_type = TextInput::new("Service type").with_placeholder("plumbing");
        service_type.set_focused(true);
        Self {
            service_type,
            priority: Priority::Medium,
            description: TextInput::new("Description"),
            date: TextInput::new("Preferred date").with_placeholder("YYYY-MM-DD (optional)"),
            time: TextInput::new("Preferred time").with_placeholder("HH:MM (optional)"),
            focus: FORM_TYPE,
            error: None,
        }
    }

    fn move_focus(&mut self, offset: isize) {
        self.focus =
            (self.focus as isize + offset).rem_euclid(FORM_FIELDS as isize) as usize;
        self.service_type.set_focused(self.focus == FORM_TYPE);
        self.description.set_focused(self.focus == FORM_DESCRIPTION);
        self.date.set_focused(self.focus == FORM_DATE);
        self.time.set_focused(self.focus == FORM_TIME);
    }

    fn cycle_priority(&mut self) {
        self.priority = match self.priority {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        };
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FORM_TYPE => Some(&mut self.service_type),
            FORM_DESCRIPTION => Some(&mut self.description),
            FORM_DATE => Some(&mut self.date),
            FORM_TIME => Some(&mut self.time),
            _ => None,
        }
    }

    fn submit(&mut self) -> Option<NewRequest> {
        match validate_new_request(
            self.service_type.value(),
            Some(self.priority),
            self.description.value(),
            self.date.value(),
            self.time.value(),
        ) {
            Ok(request) => Some(request),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup = area.centered(Constraint::Length(56), Constraint::Length(19));
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" New service request ")
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::vertical([
            Constraint::Length(3), // type
            Constraint::Length(1), // priority
            Constraint::Length(3), // description
            Constraint::Length(3), // date
            Constraint::Length(3), // time
            Constraint::Length(1), // error
            Constraint::Length(1), // hint
        ])
        .split(inner);

        self.service_type.render(frame, chunks[0], theme);

        let priority_style = if self.focus == FORM_PRIORITY {
            Style::default()
                .fg(theme.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(priority_color(theme, self.priority))
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("  Priority: ", Style::default().fg(theme.subtext1)),
                Span::styled(format!("◀ {} ▶", self.priority), priority_style),
            ])),
            chunks[1],
        );

        self.description.render(frame, chunks[2], theme);
        self.date.render(frame, chunks[3], theme);
        self.time.render(frame, chunks[4], theme);

        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error.clone(), Style::default().fg(theme.red)))
                    .alignment(Alignment::Center),
                chunks[5],
            );
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter submit · Esc cancel · Tab next field",
                Style::default().fg(theme.overlay1),
            ))
            .alignment(Alignment::Center),
            chunks[6],
        );
    }
}

/// Reschedule form overlay for a single record.
struct RescheduleForm {
    record: ServiceRecord,
    date: TextInput,
    time: TextInput,
    focus: usize,
    error: Option<String>,
}

impl RescheduleForm {
    fn new(record: ServiceRecord) -> Self {
        let mut date = TextInput::new("New date").with_placeholder("YYYY-MM-DD");
        date.set_focused(true);
        Self {
            record,
            date,
            time: TextInput::new("New time").with_placeholder("HH:MM (optional)"),
            focus: 0,
            error: None,
        }
    }

    fn move_focus(&mut self) {
        self.focus = (self.focus + 1) % 2;
        self.date.set_focused(self.focus == 0);
        self.time.set_focused(self.focus == 1);
    }

    fn focused_input(&mut self) -> &mut TextInput {
        if self.focus == 0 {
            &mut self.date
        } else {
            &mut self.time
        }
    }

    fn submit(&mut self) -> Option<String> {
        match validate_reschedule(self.date.value(), self.time.value()) {
            Ok(date) => Some(date),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup = area.centered(Constraint::Length(48), Constraint::Length(11));
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" Reschedule {} ", self.record.display_name()))
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        self.date.render(frame, chunks[0], theme);
        self.time.render(frame, chunks[1], theme);
        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error.clone(), Style::default().fg(theme.red)))
                    .alignment(Alignment::Center),
                chunks[2],
            );
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter submit · Esc cancel",
                Style::default().fg(theme.overlay1),
            ))
            .alignment(Alignment::Center),
            chunks[3],
        );
    }
}

/// Star-picker overlay for rating a completed service.
struct RateForm {
    record: ServiceRecord,
    rating: u8,
}

impl RateForm {
    fn new(record: ServiceRecord) -> Self {
        let rating = record.rating.unwrap_or(5);
        Self { record, rating }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup = area.centered(Constraint::Length(44), Constraint::Length(7));
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" Rate {} ", self.record.display_name()))
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                rating_stars(self.rating),
                Style::default()
                    .fg(theme.yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "◀ ▶ or 1-5 · Enter submit · Esc cancel",
                Style::default().fg(theme.overlay1),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            popup,
        );
    }
}

enum Overlay {
    NewRequest(NewRequestForm),
    Reschedule(RescheduleForm),
    Rate(RateForm),
    Details(RecordDetails),
}

pub struct HomeownerDashboard {
    api: ApiClient,
    app_tx: UnboundedSender<AppMsg>,
    resolver: Arc<KeyResolver>,
    tracker: RefreshTracker,
    buckets: Buckets,
    stats: HomeownerStats,
    pending: Table<RequestRow>,
    active: Table<RequestRow>,
    completed: Table<CompletedRow>,
    focus: Panel,
    overlay: Option<Overlay>,
    loading: bool,
    spinner: Spinner,
    pending_commands: Vec<Box<dyn Command>>,
    msg_tx: UnboundedSender<DashMsg>,
    msg_rx: UnboundedReceiver<DashMsg>,
}

impl HomeownerDashboard {
    pub fn new(
        api: ApiClient,
        app_tx: UnboundedSender<AppMsg>,
        resolver: Arc<KeyResolver>,
        tracker: RefreshTracker,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mut pending =
            Table::new(vec![], Arc::clone(&resolver)).with_title(" Pending requests ");
        pending.set_focused(true);
        let mut spinner = Spinner::new();
        spinner.set_label("Loading your requests");
        Self {
            api,
            app_tx,
            resolver: Arc::clone(&resolver),
            tracker,
            buckets: Buckets::default(),
            stats: HomeownerStats::default(),
            pending,
            active: Table::new(vec![], Arc::clone(&resolver)).with_title(" Active "),
            completed: Table::new(vec![], resolver).with_title(" Completed "),
            focus: Panel::Pending,
            overlay: None,
            loading: true,
            spinner,
            pending_commands: Vec::new(),
            msg_tx,
            msg_rx,
        }
    }

    fn queue_refresh(&mut self, generation: u64) {
        self.pending_commands.push(Box::new(FetchDashboardCmd::new(
            self.api.clone(),
            UserRole::Homeowner,
            generation,
            self.msg_tx.clone(),
        )));
    }

    fn toast(&self, toast: Toast) {
        let _ = self.app_tx.send(AppMsg::Toast(toast));
    }

    fn set_focus(&mut self, panel: Panel) {
        self.focus = panel;
        self.pending.set_focused(panel == Panel::Pending);
        self.active.set_focused(panel == Panel::Active);
        self.completed.set_focused(panel == Panel::Completed);
    }

    fn selected_record(&self) -> Option<&ServiceRecord> {
        match self.focus {
            Panel::Pending => self.pending.selected_item().map(|row| &row.record),
            Panel::Active => self.active.selected_item().map(|row| &row.record),
            Panel::Completed => self.completed.selected_item().map(|row| &row.record),
        }
    }

    fn searching(&self) -> bool {
        match self.focus {
            Panel::Pending => self.pending.is_searching(),
            Panel::Active => self.active.is_searching(),
            Panel::Completed => self.completed.is_searching(),
        }
    }

    fn export_completed(&mut self) {
        let Some(csv) = completed_to_csv(&self.buckets.completed) else {
            self.toast(Toast::info("No completed services to export"));
            return;
        };
        let dir = dirs::download_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(std::env::temp_dir);
        let path: PathBuf = dir.join(format!(
            "fixitnow_services_{}.csv",
            chrono::Local::now().format("%Y-%m-%d")
        ));
        self.pending_commands
            .push(Box::new(ExportCsvCmd::new(csv, path, self.msg_tx.clone())));
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> color_eyre::Result<EventResult<()>> {
        let Some(overlay) = &mut self.overlay else {
            return Ok(EventResult::Ignored);
        };

        match overlay {
            Overlay::NewRequest(form) => match key.code {
                KeyCode::Esc => self.overlay = None,
                KeyCode::Tab | KeyCode::Down => form.move_focus(1),
                KeyCode::BackTab | KeyCode::Up => form.move_focus(-1),
                KeyCode::Enter => {
                    if let Some(request) = form.submit() {
                        self.pending_commands.push(Box::new(CreateRequestCmd::new(
                            self.api.clone(),
                            request,
                            self.msg_tx.clone(),
                        )));
                        self.overlay = None;
                    }
                }
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                    if form.focus == FORM_PRIORITY =>
                {
                    form.cycle_priority();
                }
                _ => {
                    if let Some(input) = form.focused_input() {
                        let _ = input.handle_key(key)?;
                    }
                }
            },
            Overlay::Reschedule(form) => match key.code {
                KeyCode::Esc => self.overlay = None,
                KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => form.move_focus(),
                KeyCode::Enter => {
                    if let Some(date) = form.submit() {
                        self.pending_commands.push(Box::new(RescheduleCmd::new(
                            self.api.clone(),
                            form.record.service_id.clone(),
                            date,
                            self.msg_tx.clone(),
                        )));
                        self.overlay = None;
                    }
                }
                _ => {
                    let _ = form.focused_input().handle_key(key)?;
                }
            },
            Overlay::Rate(form) => match key.code {
                KeyCode::Esc => self.overlay = None,
                KeyCode::Left => form.rating = form.rating.saturating_sub(1).max(1),
                KeyCode::Right => form.rating = (form.rating + 1).min(5),
                KeyCode::Char(c @ '1'..='5') => {
                    form.rating = c.to_digit(10).unwrap_or(1) as u8;
                }
                KeyCode::Enter => {
                    if let Ok(rating) = validate_rating(form.rating) {
                        self.pending_commands.push(Box::new(RateServiceCmd::new(
                            self.api.clone(),
                            form.record.service_id.clone(),
                            rating,
                            self.msg_tx.clone(),
                        )));
                        self.overlay = None;
                    }
                }
                _ => {}
            },
            Overlay::Details(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.overlay = None;
                }
            }
        }
        Ok(EventResult::Consumed)
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let s = &self.stats;
        let sep = Span::styled(" │ ", Style::default().fg(theme.overlay0));
        let pair = |name: &str, count: usize, color| {
            vec![
                Span::styled(format!("{name} "), Style::default().fg(theme.subtext1)),
                Span::styled(
                    count.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]
        };

        let mut spans = pair("Total", s.total, theme.text);
        spans.push(sep.clone());
        spans.extend(pair("Scheduled", s.scheduled, theme.sky));
        spans.push(sep.clone());
        spans.extend(pair("In Progress", s.in_progress, theme.blue));
        spans.push(sep);
        spans.extend(pair("Completed", s.completed, theme.green));
        if self.tracker.in_flight() {
            spans.push(Span::styled(
                "  refreshing…",
                Style::default().fg(theme.overlay1),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Screen for HomeownerDashboard {
    fn init(&mut self) {
        if let Some(generation) = self.tracker.begin() {
            self.queue_refresh(generation);
        }
    }

    fn handle_tick(&mut self) {
        if self.loading || self.tracker.in_flight() {
            self.spinner.handle_tick();
        }
        if self.tracker.is_due(Instant::now())
            && let Some(generation) = self.tracker.begin()
        {
            self.queue_refresh(generation);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> color_eyre::Result<EventResult<()>> {
        if self.overlay.is_some() {
            return self.handle_overlay_key(key);
        }

        // While a search prompt is open the table gets every key first so
        // action shortcuts can be typed into the query.
        if !self.searching() {
            if self.resolver.matches_nav(&key, NavAction::NextPanel) {
                self.set_focus(self.focus.next());
                return Ok(EventResult::Consumed);
            }
            if self.resolver.matches_requests(&key, RequestsAction::Refresh) {
                let generation = self.tracker.force_begin();
                self.queue_refresh(generation);
                return Ok(EventResult::Consumed);
            }
            if self.resolver.matches_requests(&key, RequestsAction::New) {
                self.overlay = Some(Overlay::NewRequest(NewRequestForm::new()));
                return Ok(EventResult::Consumed);
            }
            if self.resolver.matches_requests(&key, RequestsAction::Export) {
                self.export_completed();
                return Ok(EventResult::Consumed);
            }
            if self.resolver.matches_requests(&key, RequestsAction::View) {
                if let Some(record) = self.selected_record().cloned() {
                    self.overlay = Some(Overlay::Details(RecordDetails::new(record, UserRole::Homeowner)));
                }
                return Ok(EventResult::Consumed);
            }
            if self.resolver.matches_requests(&key, RequestsAction::Reschedule) {
                match self.selected_record().cloned() {
                    Some(record) if !record.status.is_terminal() => {
                        self.overlay = Some(Overlay::Reschedule(RescheduleForm::new(record)));
                    }
                    Some(_) => self.toast(Toast::info("Completed requests can't be rescheduled")),
                    None => {}
                }
                return Ok(EventResult::Consumed);
            }
            if self.resolver.matches_requests(&key, RequestsAction::Rate) {
                match self.selected_record().cloned() {
                    Some(record) if record.status == ServiceStatus::Completed => {
                        self.overlay = Some(Overlay::Rate(RateForm::new(record)));
                    }
                    Some(_) => self.toast(Toast::info("Only completed services can be rated")),
                    None => {}
                }
                return Ok(EventResult::Consumed);
            }
        }

        let result = match self.focus {
            Panel::Pending => match self.pending.handle_key(key)? {
                EventResult::Event(TableEvent::Activated(row)) => {
                    EventResult::Event(row.record)
                }
                EventResult::Consumed => EventResult::Consumed,
                EventResult::Ignored => EventResult::Ignored,
            },
            Panel::Active => match self.active.handle_key(key)? {
                EventResult::Event(TableEvent::Activated(row)) => {
                    EventResult::Event(row.record)
                }
                EventResult::Consumed => EventResult::Consumed,
                EventResult::Ignored => EventResult::Ignored,
            },
            Panel::Completed => match self.completed.handle_key(key)? {
                EventResult::Event(TableEvent::Activated(row)) => {
                    EventResult::Event(row.record)
                }
                EventResult::Consumed => EventResult::Consumed,
                EventResult::Ignored => EventResult::Ignored,
            },
        };
        Ok(match result {
            EventResult::Event(record) => {
                self.overlay = Some(Overlay::Details(RecordDetails::new(record, UserRole::Homeowner)));
                EventResult::Consumed
            }
            EventResult::Consumed => EventResult::Consumed,
            EventResult::Ignored => EventResult::Ignored,
        })
    }

    fn update(&mut self) -> color_eyre::Result<Vec<Box<dyn Command>>> {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                DashMsg::Loaded {
                    generation,
                    services,
                    ..
                } => {
                    if !self.tracker.complete(generation, Instant::now()) {
                        continue;
                    }
                    self.loading = false;
                    self.stats = homeowner_stats(&services);
                    self.buckets = classify(&services, None);
                    self.pending.set_items(
                        self.buckets
                            .pending
                            .iter()
                            .map(|record| RequestRow {
                                record: record.clone(),
                            })
                            .collect(),
                    );
                    self.active.set_items(
                        self.buckets
                            .active
                            .iter()
                            .map(|record| RequestRow {
                                record: record.clone(),
                            })
                            .collect(),
                    );
                    self.completed.set_items(
                        self.buckets
                            .completed
                            .iter()
                            .map(|record| CompletedRow {
                                record: record.clone(),
                            })
                            .collect(),
                    );
                }
                DashMsg::LoadFailed { generation, error } => {
                    // Keep showing the last good data.
                    if self.tracker.complete(generation, Instant::now()) {
                        self.loading = false;
                        self.toast(Toast::error(format!("Refresh failed: {error}")));
                    }
                }
                DashMsg::ActionDone(message) => {
                    self.toast(Toast::success(message));
                    let generation = self.tracker.force_begin();
                    self.queue_refresh(generation);
                }
                DashMsg::ActionFailed(error) => self.toast(Toast::error(error)),
                DashMsg::Exported(path) => {
                    self.toast(Toast::success(format!("Exported to {}", path.display())));
                }
                DashMsg::ExportFailed(error) => {
                    self.toast(Toast::error(format!("Export failed: {error}")));
                }
            }
        }
        Ok(std::mem::take(&mut self.pending_commands))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.loading {
            self.spinner.render(frame, area, theme);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        self.render_stats(frame, chunks[0], theme);
        self.pending.render(frame, chunks[1], theme);
        self.active.render(frame, chunks[2], theme);
        self.completed.render(frame, chunks[3], theme);

        match &mut self.overlay {
            Some(Overlay::NewRequest(form)) => form.render(frame, area, theme),
            Some(Overlay::Reschedule(form)) => form.render(frame, area, theme),
            Some(Overlay::Rate(form)) => form.render(frame, area, theme),
            Some(Overlay::Details(view)) => view.render(frame, area, theme),
            None => {}
        }
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::new(
                self.resolver.display_requests(RequestsAction::New),
                "New request",
            ),
            Keybinding::new(
                self.resolver.display_requests(RequestsAction::Reschedule),
                "Reschedule",
            ),
            Keybinding::new(self.resolver.display_requests(RequestsAction::Rate), "Rate"),
            Keybinding::new(self.resolver.display_requests(RequestsAction::View), "View"),
            Keybinding::new(
                self.resolver.display_requests(RequestsAction::Export),
                "Export CSV",
            ),
            Keybinding::new(
                self.resolver.display_requests(RequestsAction::Refresh),
                "Refresh",
            ),
        ]
    }
}
