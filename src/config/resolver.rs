use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::{
    DialogAction, GlobalAction, JobsAction, NavAction, RequestsAction, SearchAction,
};
use crate::config::keybindings::KeybindingsConfig;

/// Resolves key events against the configured bindings.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    #[must_use]
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    #[must_use]
    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.matches(event),
            GlobalAction::SignOut => kb.sign_out.matches(event),
            GlobalAction::Back => kb.back.matches(event),
        }
    }

    #[must_use]
    pub fn display_global(&self, action: GlobalAction) -> String {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.display(),
            GlobalAction::SignOut => kb.sign_out.display(),
            GlobalAction::Back => kb.back.display(),
        }
    }

    #[must_use]
    pub fn matches_nav(&self, event: &KeyEvent, action: NavAction) -> bool {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.matches(event),
            NavAction::Down => kb.down.matches(event),
            NavAction::PageUp => kb.page_up.matches(event),
            NavAction::PageDown => kb.page_down.matches(event),
            NavAction::Home => kb.home.matches(event),
            NavAction::End => kb.end.matches(event),
            NavAction::Select => kb.select.matches(event),
            NavAction::NextPanel => kb.next_panel.matches(event),
        }
    }

    #[must_use]
    pub fn display_nav(&self, action: NavAction) -> String {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.display(),
            NavAction::Down => kb.down.display(),
            NavAction::PageUp => kb.page_up.display(),
            NavAction::PageDown => kb.page_down.display(),
            NavAction::Home => kb.home.display(),
            NavAction::End => kb.end.display(),
            NavAction::Select => kb.select.display(),
            NavAction::NextPanel => kb.next_panel.display(),
        }
    }

    #[must_use]
    pub fn matches_search(&self, event: &KeyEvent, action: SearchAction) -> bool {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => kb.toggle.matches(event),
            SearchAction::Exit => kb.exit.matches(event),
        }
    }

    #[must_use]
    pub fn matches_requests(&self, event: &KeyEvent, action: RequestsAction) -> bool {
        let kb = &self.keybindings.requests;
        match action {
            RequestsAction::New => kb.new.matches(event),
            RequestsAction::Reschedule => kb.reschedule.matches(event),
            RequestsAction::Rate => kb.rate.matches(event),
            RequestsAction::View => kb.view.matches(event),
            RequestsAction::Export => kb.export.matches(event),
            RequestsAction::Refresh => kb.refresh.matches(event),
        }
    }

    #[must_use]
    pub fn display_requests(&self, action: RequestsAction) -> String {
        let kb = &self.keybindings.requests;
        match action {
            RequestsAction::New => kb.new.display(),
            RequestsAction::Reschedule => kb.reschedule.display(),
            RequestsAction::Rate => kb.rate.display(),
            RequestsAction::View => kb.view.display(),
            RequestsAction::Export => kb.export.display(),
            RequestsAction::Refresh => kb.refresh.display(),
        }
    }

    #[must_use]
    pub fn matches_jobs(&self, event: &KeyEvent, action: JobsAction) -> bool {
        let kb = &self.keybindings.jobs;
        match action {
            JobsAction::Accept => kb.accept.matches(event),
            JobsAction::Skip => kb.skip.matches(event),
            JobsAction::Start => kb.start.matches(event),
            JobsAction::Complete => kb.complete.matches(event),
            JobsAction::View => kb.view.matches(event),
            JobsAction::Refresh => kb.refresh.matches(event),
            JobsAction::ToggleAutoRefresh => kb.toggle_auto_refresh.matches(event),
        }
    }

    #[must_use]
    pub fn display_jobs(&self, action: JobsAction) -> String {
        let kb = &self.keybindings.jobs;
        match action {
            JobsAction::Accept => kb.accept.display(),
            JobsAction::Skip => kb.skip.display(),
            JobsAction::Start => kb.start.display(),
            JobsAction::Complete => kb.complete.display(),
            JobsAction::View => kb.view.display(),
            JobsAction::Refresh => kb.refresh.display(),
            JobsAction::ToggleAutoRefresh => kb.toggle_auto_refresh.display(),
        }
    }

    #[must_use]
    pub fn matches_dialog(&self, event: &KeyEvent, action: DialogAction) -> bool {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Confirm => kb.confirm.matches(event),
            DialogAction::Cancel => kb.cancel.matches(event),
            DialogAction::Dismiss => kb.dismiss.matches(event),
        }
    }
}
