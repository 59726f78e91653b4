//! Provider dashboard: claiming open requests and working jobs through
//! their lifecycle.

use std::collections::HashSet;
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
use crate::actions::validate_cost;
use crate::api::ApiClient;
use crate::app::AppMsg;
use crate::classify::{Buckets, PROVIDER_COMPLETED_CAP, ProviderStats, classify, provider_stats};
use crate::commands::Command;
use crate::config::{JobsAction, KeyResolver, NavAction};
use crate::model::{ServiceRecord, ServiceStatus, UserRole};
use crate::refresh::RefreshTracker;
use crate::screen::Screen;
use crate::screen::command::{
    AcceptRequestCmd, CompleteJobCmd, DashMsg, FetchDashboardCmd, StartJobCmd,
};
use crate::screen::details::RecordDetails;
use crate::screen::view::{
    format_currency, format_date, format_duration, priority_color, status_color,
};
use crate::search::Matcher;
use crate::ui::{
    ColumnDef, Component, ConfirmDialog, ConfirmEvent, EventResult, Keybinding, Spinner, Table,
    TableEvent, TableRow, TextInput, Toast,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Available,
    Jobs,
    Completed,
}

impl Panel {
    const fn next(self) -> Self {
        match self {
            Self::Available => Self::Jobs,
            Self::Jobs => Self::Completed,
            Self::Completed => Self::Available,
        }
    }
}

/// Row in the available-requests panel. Skipped rows stay in place but are
/// dimmed until the next refresh clears the flag.
#[derive(Clone)]
struct AvailableRow {
    record: ServiceRecord,
    skipped: bool,
}

impl TableRow for AvailableRow {
    fn columns() -> &'static [ColumnDef] {
        static COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("Service", Constraint::Min(20)),
            ColumnDef::new("Type", Constraint::Length(12)),
            ColumnDef::new("Priority", Constraint::Length(8)),
            ColumnDef::new("Homeowner", Constraint::Length(14)),
            ColumnDef::new("Preferred", Constraint::Length(18)),
        ];
        COLUMNS
    }

    fn key(&self) -> &str {
        &self.record.service_id
    }

    fn render_cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let r = &self.record;
        let priority_cell = if self.skipped {
            Cell::from(r.priority.label())
        } else {
            Cell::from(r.priority.label())
                .style(Style::default().fg(priority_color(theme, r.priority)))
        };
        vec![
            Cell::from(r.display_name().to_string()),
            Cell::from(r.service_type.clone()),
            priority_cell,
            Cell::from(r.homeowner.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(
                r.preferred_date
                    .as_deref()
                    .map_or_else(|| "flexible".to_string(), format_date),
            ),
        ]
    }

    fn row_style(&self, theme: &Theme) -> Style {
        if self.skipped {
            Style::default().fg(theme.overlay0)
        } else {
            Style::default().fg(theme.text)
        }
    }

    fn matches(&self, query: &str) -> bool {
        let r = &self.record;
        Matcher::new().matches_any(
            [
                r.display_name(),
                &r.service_type,
                r.homeowner.as_deref().unwrap_or(""),
            ],
            query,
        )
    }
}

/// Row in the active-jobs panel.
#[derive(Clone)]
struct JobRow {
    record: ServiceRecord,
}

impl TableRow for JobRow {
    fn columns() -> &'static [ColumnDef] {
        static COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("Service", Constraint::Min(20)),
            ColumnDef::new("Homeowner", Constraint::Length(14)),
            ColumnDef::new("Status", Constraint::Length(11)),
            ColumnDef::new("Priority", Constraint::Length(8)),
            ColumnDef::new("Date", Constraint::Length(18)),
        ];
        COLUMNS
    }

    fn key(&self) -> &str {
        &self.record.service_id
    }

    fn render_cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let r = &self.record;
        // In-progress jobs show their start time, scheduled ones the
        // homeowner's preferred date.
        let date = r
            .start_date
            .as_deref()
            .or(r.preferred_date.as_deref())
            .map_or_else(|| "-".to_string(), format_date);
        vec![
            Cell::from(r.display_name().to_string()),
            Cell::from(r.homeowner.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(r.status.label())
                .style(Style::default().fg(status_color(theme, r.status))),
            Cell::from(r.priority.label())
                .style(Style::default().fg(priority_color(theme, r.priority))),
            Cell::from(date),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let r = &self.record;
        Matcher::new().matches_any(
            [
                r.display_name(),
                &r.service_type,
                r.status.label(),
                r.homeowner.as_deref().unwrap_or(""),
            ],
            query,
        )
    }
}

/// Row in the completed-history panel.
#[derive(Clone)]
struct HistoryRow {
    record: ServiceRecord,
}

impl TableRow for HistoryRow {
    fn columns() -> &'static [ColumnDef] {
        static COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("Service", Constraint::Min(20)),
            ColumnDef::new("Homeowner", Constraint::Length(14)),
            ColumnDef::new("Completed", Constraint::Length(18)),
            ColumnDef::new("Duration", Constraint::Length(9)),
            ColumnDef::new("Cost", Constraint::Length(10)),
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
            Cell::from(r.homeowner.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(
                r.updated_at
                    .as_deref()
                    .map_or_else(|| "-".to_string(), format_date),
            ),
            Cell::from(
                r.duration
                    .map_or_else(|| "-".to_string(), format_duration),
            ),
            Cell::from(r.cost.map_or_else(|| "-".to_string(), format_currency))
                .style(Style::default().fg(theme.green)),
        ]
    }

    fn matches(&self, query: &str) -> bool {
        let r = &self.record;
        Matcher::new().matches_any(
            [
                r.display_name(),
                &r.service_type,
                r.homeowner.as_deref().unwrap_or(""),
            ],
            query,
        )
    }
}

/// Cost-and-notes form shown when completing a job.
struct CompleteForm {
    record: ServiceRecord,
    cost: TextInput,
    notes: TextInput,
    focus: usize,
    error: Option<String>,
}

impl CompleteForm {
    fn new(record: ServiceRecord) -> Self {
        let mut cost = TextInput::new("Final cost").with_placeholder("120.50");
        cost.set_focused(true);
        Self {
            record,
            cost,
            notes: TextInput::new("Notes").with_placeholder("optional"),
            focus: 0,
            error: None,
        }
    }

    fn move_focus(&mut self) {
        self.focus = (self.focus + 1) % 2;
        self.cost.set_focused(self.focus == 0);
        self.notes.set_focused(self.focus == 1);
    }

    fn focused_input(&mut self) -> &mut TextInput {
        if self.focus == 0 {
            &mut self.cost
        } else {
            &mut self.notes
        }
    }

    fn submit(&mut self) -> Option<f64> {
        match validate_cost(self.cost.value()) {
            Ok(cost) => Some(cost),
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
            .title(format!(" Complete {} ", self.record.display_name()))
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

        self.cost.render(frame, chunks[0], theme);
        self.notes.render(frame, chunks[1], theme);
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

enum Overlay {
    AcceptConfirm {
        record: ServiceRecord,
        dialog: ConfirmDialog,
    },
    StartConfirm {
        record: ServiceRecord,
        dialog: ConfirmDialog,
    },
    Complete(CompleteForm),
    Details(RecordDetails),
}

pub struct ProviderDashboard {
    api: ApiClient,
    app_tx: UnboundedSender<AppMsg>,
    resolver: Arc<KeyResolver>,
    tracker: RefreshTracker,
    buckets: Buckets,
    available_records: Vec<ServiceRecord>,
    skipped: HashSet<String>,
    stats: ProviderStats,
    available: Table<AvailableRow>,
    jobs: Table<JobRow>,
    completed: Table<HistoryRow>,
    focus: Panel,
    overlay: Option<Overlay>,
    loading: bool,
    spinner: Spinner,
    pending_commands: Vec<Box<dyn Command>>,
    msg_tx: UnboundedSender<DashMsg>,
    msg_rx: UnboundedReceiver<DashMsg>,
}

impl ProviderDashboard {
    pub fn new(
        api: ApiClient,
        app_tx: UnboundedSender<AppMsg>,
        resolver: Arc<KeyResolver>,
        tracker: RefreshTracker,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mut available =
            Table::new(vec![], Arc::clone(&resolver)).with_title(" Available requests ");
        available.set_focused(true);
        let mut spinner = Spinner::new();
        spinner.set_label("Loading your jobs");
        Self {
            api,
            app_tx,
            resolver: Arc::clone(&resolver),
            tracker,
            buckets: Buckets::default(),
            available_records: Vec::new(),
            skipped: HashSet::new(),
            stats: ProviderStats::default(),
            available,
            jobs: Table::new(vec![], Arc::clone(&resolver)).with_title(" My jobs "),
            completed: Table::new(vec![], resolver).with_title(" Recently completed "),
            focus: Panel::Available,
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
            UserRole::ServiceProvider,
            generation,
            self.msg_tx.clone(),
        )));
    }

    fn toast(&self, toast: Toast) {
        let _ = self.app_tx.send(AppMsg::Toast(toast));
    }

    fn set_focus(&mut self, panel: Panel) {
        self.focus = panel;
        self.available.set_focused(panel == Panel::Available);
        self.jobs.set_focused(panel == Panel::Jobs);
        self.completed.set_focused(panel == Panel::Completed);
    }

    fn selected_record(&self) -> Option<&ServiceRecord> {
        match self.focus {
            Panel::Available => self.available.selected_item().map(|row| &row.record),
            Panel::Jobs => self.jobs.selected_item().map(|row| &row.record),
            Panel::Completed => self.completed.selected_item().map(|row| &row.record),
        }
    }

    fn searching(&self) -> bool {
        match self.focus {
            Panel::Available => self.available.is_searching(),
            Panel::Jobs => self.jobs.is_searching(),
            Panel::Completed => self.completed.is_searching(),
        }
    }

    fn rebuild_available_rows(&mut self) {
        self.available.set_items(
            self.available_records
                .iter()
                .map(|record| AvailableRow {
                    record: record.clone(),
                    skipped: self.skipped.contains(&record.service_id),
                })
                .collect(),
        );
    }

    fn skip_selected(&mut self) {
        let Some(id) = self
            .available
            .selected_item()
            .map(|row| row.record.service_id.clone())
        else {
            return;
        };
        // Toggling back un-dims without waiting for the poller.
        if !self.skipped.remove(&id) {
            self.skipped.insert(id);
        }
        self.rebuild_available_rows();
    }

    fn toggle_auto_refresh(&mut self) {
        let enabled = !self.tracker.auto_refresh();
        self.tracker.set_auto_refresh(enabled);
        self.toast(Toast::info(if enabled {
            "Auto-refresh on"
        } else {
            "Auto-refresh paused"
        }));
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> color_eyre::Result<EventResult<()>> {
        let Some(overlay) = &mut self.overlay else {
            return Ok(EventResult::Ignored);
        };

        match overlay {
            Overlay::AcceptConfirm { record, dialog } => {
                match dialog.handle_key(key)? {
                    EventResult::Event(ConfirmEvent::Confirmed) => {
                        self.pending_commands.push(Box::new(AcceptRequestCmd::new(
                            self.api.clone(),
                            record.service_id.clone(),
                            self.msg_tx.clone(),
                        )));
                        self.overlay = None;
                    }
                    EventResult::Event(ConfirmEvent::Cancelled) => self.overlay = None,
                    _ => {}
                }
            }
            Overlay::StartConfirm { record, dialog } => match dialog.handle_key(key)? {
                EventResult::Event(ConfirmEvent::Confirmed) => {
                    self.pending_commands.push(Box::new(StartJobCmd::new(
                        self.api.clone(),
                        record.service_id.clone(),
                        self.msg_tx.clone(),
                    )));
                    self.overlay = None;
                }
                EventResult::Event(ConfirmEvent::Cancelled) => self.overlay = None,
                _ => {}
            },
            Overlay::Complete(form) => match key.code {
                KeyCode::Esc => self.overlay = None,
                KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => form.move_focus(),
                KeyCode::Enter => {
                    if let Some(cost) = form.submit() {
                        self.pending_commands.push(Box::new(CompleteJobCmd::new(
                            self.api.clone(),
                            form.record.service_id.clone(),
                            cost,
                            form.notes.value().to_string(),
                            self.msg_tx.clone(),
                        )));
                        self.overlay = None;
                    }
                }
                _ => {
                    let _ = form.focused_input().handle_key(key)?;
                }
            },
            Overlay::Details(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.overlay = None;
                }
            }
        }
        Ok(EventResult::Consumed)
    }

    fn handle_jobs_action(&mut self, key: KeyEvent) -> Option<EventResult<()>> {
        if self.resolver.matches_jobs(&key, JobsAction::Refresh) {
            let generation = self.tracker.force_begin();
            self.queue_refresh(generation);
            return Some(EventResult::Consumed);
        }
        if self
            .resolver
            .matches_jobs(&key, JobsAction::ToggleAutoRefresh)
        {
            self.toggle_auto_refresh();
            return Some(EventResult::Consumed);
        }
        if self.resolver.matches_jobs(&key, JobsAction::View) {
            if let Some(record) = self.selected_record().cloned() {
                self.overlay = Some(Overlay::Details(RecordDetails::new(record, UserRole::ServiceProvider)));
            }
            return Some(EventResult::Consumed);
        }
        if self.resolver.matches_jobs(&key, JobsAction::Accept) {
            if self.focus == Panel::Available
                && let Some(record) = self
                    .available
                    .selected_item()
                    .map(|row| row.record.clone())
            {
                let dialog = ConfirmDialog::new(
                    format!("Accept \"{}\"?", record.display_name()),
                    Arc::clone(&self.resolver),
                )
                .with_confirm_text("Accept");
                self.overlay = Some(Overlay::AcceptConfirm { record, dialog });
            }
            return Some(EventResult::Consumed);
        }
        if self.resolver.matches_jobs(&key, JobsAction::Skip) {
            if self.focus == Panel::Available {
                self.skip_selected();
            }
            return Some(EventResult::Consumed);
        }
        if self.resolver.matches_jobs(&key, JobsAction::Start) {
            if self.focus == Panel::Jobs {
                match self.jobs.selected_item().map(|row| row.record.clone()) {
                    Some(record) if record.status == ServiceStatus::Scheduled => {
                        let dialog = ConfirmDialog::new(
                            format!("Start \"{}\" now?", record.display_name()),
                            Arc::clone(&self.resolver),
                        )
                        .with_confirm_text("Start");
                        self.overlay = Some(Overlay::StartConfirm { record, dialog });
                    }
                    Some(_) => self.toast(Toast::info("Only scheduled jobs can be started")),
                    None => {}
                }
            }
            return Some(EventResult::Consumed);
        }
        if self.resolver.matches_jobs(&key, JobsAction::Complete) {
            if self.focus == Panel::Jobs {
                match self.jobs.selected_item().map(|row| row.record.clone()) {
                    Some(record) if record.status == ServiceStatus::InProgress => {
                        self.overlay = Some(Overlay::Complete(CompleteForm::new(record)));
                    }
                    Some(_) => {
                        self.toast(Toast::info("Only in-progress jobs can be completed"));
                    }
                    None => {}
                }
            }
            return Some(EventResult::Consumed);
        }
        None
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let s = &self.stats;
        let sep = Span::styled(" │ ", Style::default().fg(theme.overlay0));
        let pair = |name: &str, text: String, color| {
            vec![
                Span::styled(format!("{name} "), Style::default().fg(theme.subtext1)),
                Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]
        };

        let mut spans = pair("Open", s.pending.to_string(), theme.yellow);
        spans.push(sep.clone());
        spans.extend(pair("In Progress", s.in_progress.to_string(), theme.blue));
        spans.push(sep.clone());
        spans.extend(pair("Completed", s.completed.to_string(), theme.green));
        spans.push(sep);
        spans.extend(pair(
            "Earnings",
            format_currency(s.total_earnings),
            theme.green,
        ));
        if !self.tracker.auto_refresh() {
            spans.push(Span::styled(
                "  auto-refresh paused",
                Style::default().fg(theme.peach),
            ));
        } else if self.tracker.in_flight() {
            spans.push(Span::styled(
                "  refreshing…",
                Style::default().fg(theme.overlay1),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Screen for ProviderDashboard {
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

        if !self.searching() {
            if self.resolver.matches_nav(&key, NavAction::NextPanel) {
                self.set_focus(self.focus.next());
                return Ok(EventResult::Consumed);
            }
            if let Some(result) = self.handle_jobs_action(key) {
                return Ok(result);
            }
        }

        let result = match self.focus {
            Panel::Available => match self.available.handle_key(key)? {
                EventResult::Event(TableEvent::Activated(row)) => EventResult::Event(row.record),
                EventResult::Consumed => EventResult::Consumed,
                EventResult::Ignored => EventResult::Ignored,
            },
            Panel::Jobs => match self.jobs.handle_key(key)? {
                EventResult::Event(TableEvent::Activated(row)) => EventResult::Event(row.record),
                EventResult::Consumed => EventResult::Consumed,
                EventResult::Ignored => EventResult::Ignored,
            },
            Panel::Completed => match self.completed.handle_key(key)? {
                EventResult::Event(TableEvent::Activated(row)) => EventResult::Event(row.record),
                EventResult::Consumed => EventResult::Consumed,
                EventResult::Ignored => EventResult::Ignored,
            },
        };
        Ok(match result {
            EventResult::Event(record) => {
                self.overlay = Some(Overlay::Details(RecordDetails::new(record, UserRole::ServiceProvider)));
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
                    available,
                } => {
                    if !self.tracker.complete(generation, Instant::now()) {
                        continue;
                    }
                    self.loading = false;
                    // Skips are cosmetic and reset with every fresh data set.
                    self.skipped.clear();
                    self.stats = provider_stats(&services);
                    self.buckets = classify(&services, Some(PROVIDER_COMPLETED_CAP));
                    self.available_records = available;
                    self.rebuild_available_rows();
                    self.jobs.set_items(
                        self.buckets
                            .active
                            .iter()
                            .map(|record| JobRow {
                                record: record.clone(),
                            })
                            .collect(),
                    );
                    self.completed.set_items(
                        self.buckets
                            .completed
                            .iter()
                            .map(|record| HistoryRow {
                                record: record.clone(),
                            })
                            .collect(),
                    );
                }
                DashMsg::LoadFailed { generation, error } => {
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
                DashMsg::Exported(_) | DashMsg::ExportFailed(_) => {}
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
        self.available.render(frame, chunks[1], theme);
        self.jobs.render(frame, chunks[2], theme);
        self.completed.render(frame, chunks[3], theme);

        match &mut self.overlay {
            Some(
                Overlay::AcceptConfirm { dialog, .. } | Overlay::StartConfirm { dialog, .. },
            ) => dialog.render(frame, area, theme),
            Some(Overlay::Complete(form)) => form.render(frame, area, theme),
            Some(Overlay::Details(view)) => view.render(frame, area, theme),
            None => {}
        }
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::new(self.resolver.display_jobs(JobsAction::Accept), "Accept"),
            Keybinding::new(self.resolver.display_jobs(JobsAction::Skip), "Skip"),
            Keybinding::new(self.resolver.display_jobs(JobsAction::Start), "Start"),
            Keybinding::new(self.resolver.display_jobs(JobsAction::Complete), "Complete"),
            Keybinding::new(self.resolver.display_jobs(JobsAction::View), "View"),
            Keybinding::new(
                self.resolver.display_jobs(JobsAction::ToggleAutoRefresh),
                "Pause refresh",
            ),
        ]
    }
}
