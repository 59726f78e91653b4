use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Table as TableWidget, TableState,
};

use crate::Theme;
use crate::config::{KeyResolver, NavAction, SearchAction};
use crate::ui::{Component, EventResult, Result};

pub enum TableEvent<T> {
    /// Selection confirmed with Enter.
    Activated(T),
}

pub struct ColumnDef {
    pub header: &'static str,
    pub constraint: Constraint,
}

impl ColumnDef {
    #[must_use]
    pub const fn new(header: &'static str, constraint: Constraint) -> Self {
        Self { header, constraint }
    }
}

pub trait TableRow {
    fn columns() -> &'static [ColumnDef];

    /// Stable identity, used to keep the selection across refreshes.
    fn key(&self) -> &str;

    fn render_cells(&self, theme: &Theme) -> Vec<Cell<'static>>;

    /// Per-row base style. Override for de-emphasized rows.
    fn row_style(&self, theme: &Theme) -> Style {
        Style::default().fg(theme.text)
    }

    /// True if this row matches the search query for local filtering.
    fn matches(&self, query: &str) -> bool;
}

/// Selectable table with fuzzy search filtering.
///
/// Dashboards replace the item set on every refresh; the selection follows
/// the selected row's key when it survives the refresh.
pub struct Table<T: TableRow + Clone> {
    items: Vec<T>,
    filtered_indices: Vec<usize>,
    state: TableState,
    title: Option<String>,
    focused: bool,
    searching: bool,
    query: String,
    resolver: Arc<KeyResolver>,
}

impl<T: TableRow + Clone> Table<T> {
    pub fn new(items: Vec<T>, resolver: Arc<KeyResolver>) -> Self {
        let filtered_indices: Vec<usize> = (0..items.len()).collect();
        let mut state = TableState::default();
        if !filtered_indices.is_empty() {
            state.select(Some(0));
        }
        Self {
            items,
            filtered_indices,
            state,
            title: None,
            focused: false,
            searching: false,
            query: String::new(),
            resolver,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.searching = false;
        }
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn selected_item(&self) -> Option<&T> {
        let selected = self.state.selected()?;
        let &idx = self.filtered_indices.get(selected)?;
        self.items.get(idx)
    }

    /// Replace all items, keeping the selection on the same record when its
    /// key is still present after the refresh.
    pub fn set_items(&mut self, items: Vec<T>) {
        let selected_key = self.selected_item().map(|item| item.key().to_string());
        self.items = items;
        self.update_filter();

        if let Some(key) = selected_key {
            let position = self
                .filtered_indices
                .iter()
                .position(|&idx| self.items[idx].key() == key);
            if let Some(pos) = position {
                self.state.select(Some(pos));
            }
        }
    }

    fn update_filter(&mut self) {
        self.filtered_indices = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.query.is_empty() || item.matches(&self.query))
            .map(|(i, _)| i)
            .collect();

        if self.filtered_indices.is_empty() {
            self.state.select(None);
        } else if self
            .state
            .selected()
            .is_none_or(|i| i >= self.filtered_indices.len())
        {
            self.state.select(Some(0));
        }
    }

    fn select_offset(&mut self, offset: isize) {
        if self.filtered_indices.is_empty() {
            return;
        }
        let last = self.filtered_indices.len() - 1;
        let next = match self.state.selected() {
            Some(i) => i
                .saturating_add_signed(offset)
                .min(last),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Result<EventResult<TableEvent<T>>> {
        if self.resolver.matches_search(&key, SearchAction::Exit) {
            self.searching = false;
            self.query.clear();
            self.update_filter();
            return Ok(EventResult::Consumed);
        }

        // Enter leaves search mode but keeps the filter applied
        if self.resolver.matches_nav(&key, NavAction::Select) {
            self.searching = false;
            return Ok(EventResult::Consumed);
        }

        match key.code {
            KeyCode::Backspace => {
                self.query.pop();
                self.update_filter();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.update_filter();
            }
            _ => {}
        }
        Ok(EventResult::Consumed)
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Result<EventResult<TableEvent<T>>> {
        if self.resolver.matches_nav(&key, NavAction::Down) {
            self.select_offset(1);
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Up) {
            self.select_offset(-1);
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::PageDown) {
            self.select_offset(10);
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::PageUp) {
            self.select_offset(-10);
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Home) {
            if !self.filtered_indices.is_empty() {
                self.state.select(Some(0));
            }
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::End) {
            if !self.filtered_indices.is_empty() {
                self.state.select(Some(self.filtered_indices.len() - 1));
            }
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Select) {
            return Ok(self.selected_item().cloned().map_or(
                EventResult::Ignored,
                |item| TableEvent::Activated(item).into(),
            ));
        }
        if self.resolver.matches_search(&key, SearchAction::Toggle) {
            self.searching = true;
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_search(&key, SearchAction::Exit) && !self.query.is_empty() {
            self.query.clear();
            self.update_filter();
            return Ok(EventResult::Consumed);
        }

        Ok(EventResult::Ignored)
    }
}

impl<T: TableRow + Clone> Component for Table<T> {
    type Output = TableEvent<T>;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if self.searching {
            self.handle_search_key(key)
        } else {
            self.handle_navigation_key(key)
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let has_search_bar = self.searching || !self.query.is_empty();
        let (table_area, search_area) = if has_search_bar {
            let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let columns = T::columns();

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                Cell::from(c.header).style(
                    Style::default()
                        .fg(theme.header())
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        let header = Row::new(header_cells)
            .height(1)
            .style(Style::default().bg(theme.surface0));

        let rows: Vec<Row> = self
            .filtered_indices
            .iter()
            .map(|&idx| {
                let item = &self.items[idx];
                Row::new(item.render_cells(theme)).style(item.row_style(theme))
            })
            .collect();

        let widths: Vec<Constraint> = columns.iter().map(|c| c.constraint).collect();

        let border_color = if self.focused {
            theme.border_focused()
        } else {
            theme.border()
        };

        let mut table = TableWidget::new(rows, widths)
            .header(header)
            .row_highlight_style(
                Style::default()
                    .bg(theme.selection_bg())
                    .fg(theme.lavender)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        if let Some(title) = &self.title {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(title.as_str())
                .title_style(
                    Style::default()
                        .fg(theme.mauve)
                        .add_modifier(Modifier::BOLD),
                );
            table = table.block(block);
        }

        frame.render_stateful_widget(table, table_area, &mut self.state);

        if let Some(search_area) = search_area {
            let search_text = if self.searching {
                format!("/{}_", self.query)
            } else {
                format!("/{} ({} matches)", self.query, self.filtered_indices.len())
            };
            let search_style = if self.searching {
                Style::default().fg(theme.yellow)
            } else {
                Style::default().fg(theme.subtext0)
            };
            frame.render_widget(Paragraph::new(search_text).style(search_style), search_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeybindingsConfig;
    use crossterm::event::KeyModifiers;

    #[derive(Clone)]
    struct Item {
        id: String,
        name: String,
    }

    impl TableRow for Item {
        fn columns() -> &'static [ColumnDef] {
            static COLUMNS: &[ColumnDef] = &[ColumnDef::new("Name", Constraint::Min(10))];
            COLUMNS
        }

        fn key(&self) -> &str {
            &self.id
        }

        fn render_cells(&self, _theme: &Theme) -> Vec<Cell<'static>> {
            vec![Cell::from(self.name.clone())]
        }

        fn matches(&self, query: &str) -> bool {
            self.name.contains(query)
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn resolver() -> Arc<KeyResolver> {
        Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())))
    }

    fn press(table: &mut Table<Item>, code: KeyCode) {
        let _ = table.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_selection_survives_refresh() {
        let mut table = Table::new(
            vec![item("a", "first"), item("b", "second"), item("c", "third")],
            resolver(),
        );
        press(&mut table, KeyCode::Down);
        assert_eq!(table.selected_item().unwrap().id, "b");

        // Refresh with "a" removed; "b" is still the selection.
        table.set_items(vec![item("b", "second"), item("c", "third")]);
        assert_eq!(table.selected_item().unwrap().id, "b");
    }

    #[test]
    fn test_selection_resets_when_row_disappears() {
        let mut table = Table::new(vec![item("a", "first"), item("b", "second")], resolver());
        press(&mut table, KeyCode::Down);
        table.set_items(vec![item("c", "third")]);
        assert_eq!(table.selected_item().unwrap().id, "c");
    }

    #[test]
    fn test_search_filters_rows() {
        let mut table = Table::new(
            vec![item("a", "plumbing"), item("b", "electrical")],
            resolver(),
        );
        press(&mut table, KeyCode::Char('/'));
        assert!(table.is_searching());
        press(&mut table, KeyCode::Char('e'));
        press(&mut table, KeyCode::Char('l'));
        assert_eq!(table.selected_item().unwrap().id, "b");

        // Esc clears the filter
        press(&mut table, KeyCode::Esc);
        assert!(!table.is_searching());
        assert_eq!(table.filtered_indices.len(), 2);
    }

    #[test]
    fn test_empty_table_has_no_selection() {
        let mut table: Table<Item> = Table::new(vec![], resolver());
        assert!(table.selected_item().is_none());
        press(&mut table, KeyCode::Down);
        assert!(table.selected_item().is_none());
    }
}
