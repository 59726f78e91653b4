mod confirm_dialog;
mod error_dialog;
mod spinner;
mod status_bar;
mod table;
mod text_input;
mod toast;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

pub use color_eyre::Result;

pub use confirm_dialog::{ConfirmDialog, ConfirmEvent};
pub use error_dialog::{ErrorDialog, ErrorDialogEvent};
pub use spinner::Spinner;
pub use status_bar::StatusBar;
pub use table::{ColumnDef, Table, TableEvent, TableRow};
pub use text_input::{TextInput, TextInputEvent};
pub use toast::{Toast, ToastManager, ToastType};

use crate::Theme;

/// Result of handling an input event.
///
/// - `Ignored` - the handler didn't recognize this input, propagate it
/// - `Consumed` - handled, no output, stop propagation
/// - `Event(E)` - handled with an output, stop propagation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult<E> {
    Ignored,
    Consumed,
    Event(E),
}

impl<E> EventResult<E> {
    /// Whether the input was consumed, with or without an event.
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl<E> From<E> for EventResult<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Interactive UI building block.
///
/// Components handle input events and emit generic outputs; they know
/// nothing about the service domain.
pub trait Component {
    /// The output type produced by this component.
    type Output;

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        _ = key;
        Ok(EventResult::Ignored)
    }

    /// Called on each tick for animations and time-based updates.
    fn handle_tick(&mut self) {}

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// A label/description pair shown in the status bar hint area.
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub description: &'static str,
}

impl Keybinding {
    #[must_use]
    pub const fn new(key: String, description: &'static str) -> Self {
        Self { key, description }
    }
}
