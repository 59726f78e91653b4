//! Full-page screens and their async commands.

pub mod command;
mod details;
mod homeowner;
mod provider;
mod signin;
pub mod view;

use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

pub use homeowner::HomeownerDashboard;
pub use provider::ProviderDashboard;
pub use signin::SignInScreen;

use crate::Theme;
use crate::commands::Command;
use crate::ui::{EventResult, Keybinding};

/// A full-page view owning its state and message queue.
///
/// The App drives screens in this order:
///
/// 1. `init()` once when the screen becomes active
/// 2. for each event: `handle_tick()` or `handle_key()`
/// 3. `update()` after every event batch to drain queued messages;
///    returned commands are spawned by the App
pub trait Screen {
    /// Queue startup messages.
    fn init(&mut self) {}

    /// Tick for animations and the poll timer.
    fn handle_tick(&mut self) {}

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<()>>;

    /// Drain queued messages; returns commands for the App to spawn.
    ///
    /// # Errors
    /// Message processing failures surface as an app-level error dialog.
    fn update(&mut self) -> Result<Vec<Box<dyn Command>>>;

    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Keybinding hints for the status bar.
    fn keybindings(&self) -> Vec<Keybinding> {
        vec![]
    }
}
