//! Async command pattern for side effects.
//!
//! Commands are the only place network calls happen. Screens return commands
//! from their update step, the App spawns them, and results flow back to the
//! owning screen through its message channel.

use async_trait::async_trait;
use color_eyre::Result;

/// An async operation that runs outside the main event loop.
///
/// Commands typically hold a clone of the [`crate::api::ApiClient`] and an
/// `UnboundedSender` for the owning screen's message type.
#[async_trait]
pub trait Command: Send + 'static {
    /// Human-readable name, used for logging.
    fn name(&self) -> String;

    /// Execute the command.
    async fn execute(self: Box<Self>) -> Result<()>;
}
