//! Application shell: session routing, the event loop, and global chrome
//! (status bar, toasts, error dialog).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::Theme;
use crate::api::ApiClient;
use crate::commands::Command;
use crate::config::{AppConfig, GlobalAction, KeyResolver, RefreshConfig};
use crate::model::{CurrentUser, UserRole};
use crate::refresh::RefreshTracker;
use crate::screen::{HomeownerDashboard, ProviderDashboard, Screen, SignInScreen};
use crate::tui::{Event, Tui};
use crate::ui::{
    Component, ConfirmDialog, ConfirmEvent, ErrorDialog, ErrorDialogEvent, EventResult, StatusBar,
    Toast, ToastManager,
};

const FRAME_RATE: f64 = 30.0;
const TICK_RATE: f64 = 4.0;

/// Messages screens and commands send up to the shell.
pub enum AppMsg {
    Toast(Toast),
    SignedIn(CurrentUser),
    SignedOut,
}

enum Route {
    SignIn(SignInScreen),
    Homeowner(HomeownerDashboard),
    Provider(ProviderDashboard),
}

impl Route {
    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::SignIn(screen) => screen,
            Self::Homeowner(screen) => screen,
            Self::Provider(screen) => screen,
        }
    }
}

pub struct App {
    api: ApiClient,
    config: AppConfig,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    route: Route,
    status_bar: StatusBar,
    toasts: ToastManager,
    error_dialog: Option<ErrorDialog>,
    sign_out_confirm: Option<ConfirmDialog>,
    app_tx: UnboundedSender<AppMsg>,
    app_rx: UnboundedReceiver<AppMsg>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        api: ApiClient,
        config: AppConfig,
        resolver: Arc<KeyResolver>,
        theme: Theme,
        prefill_username: Option<String>,
    ) -> Self {
        let (app_tx, app_rx) = mpsc::unbounded_channel();
        let status_bar = StatusBar::new(config.server.base_url.clone(), Arc::clone(&resolver));
        let route = Route::SignIn(SignInScreen::new(api.clone(), app_tx.clone(), prefill_username));
        Self {
            api,
            config,
            resolver,
            theme,
            route,
            status_bar,
            toasts: ToastManager::new(),
            error_dialog: None,
            sign_out_confirm: None,
            app_tx,
            app_rx,
            should_quit: false,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        while let Some(event) = tui.next_event().await {
            match event {
                Event::Init => {
                    self.spawn(Box::new(SessionProbeCmd {
                        api: self.api.clone(),
                        tx: self.app_tx.clone(),
                    }));
                    self.route.screen_mut().init();
                }
                Event::Quit => self.should_quit = true,
                Event::Error(message) => {
                    error!(%message, "terminal event error");
                    self.error_dialog =
                        Some(ErrorDialog::new(message, Arc::clone(&self.resolver)));
                }
                Event::Tick => {
                    self.toasts.handle_tick();
                    self.route.screen_mut().handle_tick();
                }
                Event::Render => {
                    tui.draw(|frame| self.render(frame))?;
                }
                Event::Key(key) => self.handle_key(key)?,
                Event::Resize(_, _) => {}
            }

            self.drain_messages();
            for command in self.route.screen_mut().update()? {
                self.spawn(command);
            }

            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(dialog) = &mut self.error_dialog {
            if let EventResult::Event(ErrorDialogEvent::Dismissed) = dialog.handle_key(key)? {
                self.error_dialog = None;
            }
            return Ok(());
        }

        if let Some(dialog) = &mut self.sign_out_confirm {
            match dialog.handle_key(key)? {
                EventResult::Event(ConfirmEvent::Confirmed) => {
                    self.sign_out_confirm = None;
                    self.spawn(Box::new(SignOutCmd {
                        api: self.api.clone(),
                        tx: self.app_tx.clone(),
                    }));
                }
                EventResult::Event(ConfirmEvent::Cancelled) => self.sign_out_confirm = None,
                _ => {}
            }
            return Ok(());
        }

        if self.route.screen_mut().handle_key(key)?.is_consumed() {
            return Ok(());
        }

        if self.resolver.matches_global(&key, GlobalAction::Quit) {
            self.should_quit = true;
        } else if self.resolver.matches_global(&key, GlobalAction::SignOut)
            && !matches!(self.route, Route::SignIn(_))
        {
            self.sign_out_confirm = Some(
                ConfirmDialog::new("Sign out of FixitNow?", Arc::clone(&self.resolver))
                    .with_title(" Sign out ")
                    .with_confirm_text("Sign out"),
            );
        }
        Ok(())
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.app_rx.try_recv() {
            match msg {
                AppMsg::Toast(toast) => self.toasts.show(toast),
                AppMsg::SignedIn(user) => self.sign_in(user),
                AppMsg::SignedOut => {
                    info!("signed out");
                    self.status_bar.set_user(None);
                    self.route = Route::SignIn(SignInScreen::new(
                        self.api.clone(),
                        self.app_tx.clone(),
                        None,
                    ));
                    self.toasts.show(Toast::info("Signed out"));
                }
            }
        }
    }

    fn sign_in(&mut self, user: CurrentUser) {
        info!(username = %user.username, role = %user.user_type, "session established");
        self.status_bar.set_user(Some(user.clone()));

        let tracker = tracker_for(user.user_type, &self.config.refresh);

        self.route = match user.user_type {
            UserRole::Homeowner => Route::Homeowner(HomeownerDashboard::new(
                self.api.clone(),
                self.app_tx.clone(),
                Arc::clone(&self.resolver),
                tracker,
            )),
            UserRole::ServiceProvider => Route::Provider(ProviderDashboard::new(
                self.api.clone(),
                self.app_tx.clone(),
                Arc::clone(&self.resolver),
                tracker,
            )),
        };
        self.route.screen_mut().init();
    }

    fn spawn(&self, command: Box<dyn Command>) {
        let name = command.name();
        debug!(command = %name, "spawning command");
        let app_tx = self.app_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = command.execute().await {
                error!(command = %name, error = %e, "command failed");
                let _ = app_tx.send(AppMsg::Toast(Toast::error(e.to_string())));
            }
        });
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Min(0), Constraint::Length(8)]).split(frame.area());

        let keybindings = match &self.route {
            Route::SignIn(screen) => screen.keybindings(),
            Route::Homeowner(screen) => screen.keybindings(),
            Route::Provider(screen) => screen.keybindings(),
        };
        self.route.screen_mut().render(frame, chunks[0], &self.theme);
        self.status_bar
            .render_with_keybindings(frame, chunks[1], &self.theme, &keybindings);

        self.toasts.render(frame, chunks[0], &self.theme);

        if let Some(dialog) = &mut self.sign_out_confirm {
            dialog.render(frame, frame.area(), &self.theme);
        }
        if let Some(dialog) = &mut self.error_dialog {
            dialog.render(frame, frame.area(), &self.theme);
        }
    }
}

/// Build the poll tracker for a freshly routed dashboard. The pause flag
/// only applies to providers; the homeowner poller always runs.
fn tracker_for(role: UserRole, config: &RefreshConfig) -> RefreshTracker {
    let mut tracker = RefreshTracker::new(Duration::from_secs(config.interval_secs));
    if role == UserRole::ServiceProvider {
        tracker.set_auto_refresh(config.auto_refresh);
    }
    tracker
}

/// Startup probe: resume an existing server session if the cookie jar still
/// holds one.
struct SessionProbeCmd {
    api: ApiClient,
    tx: UnboundedSender<AppMsg>,
}

#[async_trait]
impl Command for SessionProbeCmd {
    fn name(&self) -> String {
        "Probing session".to_string()
    }

    async fn execute(self: Box<Self>) -> Result<()> {
        if let Some(user) = self.api.current_user().await {
            let _ = self.tx.send(AppMsg::SignedIn(user));
        }
        Ok(())
    }
}

struct SignOutCmd {
    api: ApiClient,
    tx: UnboundedSender<AppMsg>,
}

#[async_trait]
impl Command for SignOutCmd {
    fn name(&self) -> String {
        "Signing out".to_string()
    }

    async fn execute(self: Box<Self>) -> Result<()> {
        if let Err(e) = self.api.sign_out().await {
            let _ = self
                .tx
                .send(AppMsg::Toast(Toast::error(format!("Sign out failed: {e}"))));
        }
        let _ = self.tx.send(AppMsg::SignedOut);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homeowner_poller_cannot_be_paused_by_config() {
        let config = RefreshConfig {
            interval_secs: 30,
            auto_refresh: false,
        };

        let tracker = tracker_for(UserRole::Homeowner, &config);
        assert!(tracker.auto_refresh());

        let tracker = tracker_for(UserRole::ServiceProvider, &config);
        assert!(!tracker.auto_refresh());
    }
}
