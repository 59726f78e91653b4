#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
    SignOut,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    NextPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Toggle,
    Exit,
}

/// Homeowner dashboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestsAction {
    New,
    Reschedule,
    Rate,
    View,
    Export,
    Refresh,
}

/// Provider dashboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsAction {
    Accept,
    Skip,
    Start,
    Complete,
    View,
    Refresh,
    ToggleAutoRefresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
    Dismiss,
}
