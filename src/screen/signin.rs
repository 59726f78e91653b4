use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::Theme;
use crate::actions::validate_signup;
use crate::api::ApiClient;
use crate::app::AppMsg;
use crate::commands::Command;
use crate::model::{CurrentUser, UserRole};
use crate::screen::Screen;
use crate::ui::{Component, EventResult, Keybinding, Spinner, TextInput};

enum Mode {
    SignIn,
    SignUp,
}

enum SignInMsg {
    SignedIn(CurrentUser),
    Failed(String),
}

/// Field order within each form. The role selector only exists in sign-up
/// mode and is not a text input.
const SIGN_IN_FIELDS: usize = 2;
const SIGN_UP_FIELDS: usize = 4;

/// Sign-in / sign-up screen shown while no session is active.
pub struct SignInScreen {
    api: ApiClient,
    app_tx: UnboundedSender<AppMsg>,
    mode: Mode,
    username: TextInput,
    password: TextInput,
    confirm_password: TextInput,
    role: UserRole,
    focus: usize,
    error: Option<String>,
    busy: bool,
    spinner: Spinner,
    msg_tx: UnboundedSender<SignInMsg>,
    msg_rx: UnboundedReceiver<SignInMsg>,
    pending_commands: Vec<Box<dyn Command>>,
}

impl SignInScreen {
    pub fn new(
        api: ApiClient,
        app_tx: UnboundedSender<AppMsg>,
        prefill_username: Option<String>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mut username =
            TextInput::new("Username").with_value(prefill_username.unwrap_or_default());
        username.set_focused(true);
        Self {
            api,
            app_tx,
            mode: Mode::SignIn,
            username,
            password: TextInput::new("Password").masked(),
            confirm_password: TextInput::new("Confirm password").masked(),
            role: UserRole::Homeowner,
            focus: 0,
            error: None,
            busy: false,
            spinner: Spinner::new(),
            msg_tx,
            msg_rx,
            pending_commands: Vec::new(),
        }
    }

    const fn field_count(&self) -> usize {
        match self.mode {
            Mode::SignIn => SIGN_IN_FIELDS,
            Mode::SignUp => SIGN_UP_FIELDS,
        }
    }

    fn move_focus(&mut self, offset: isize) {
        let count = self.field_count();
        self.focus = (self.focus as isize + offset).rem_euclid(count as isize) as usize;
        self.username.set_focused(self.focus == 0);
        self.password.set_focused(self.focus == 1);
        self.confirm_password
            .set_focused(matches!(self.mode, Mode::SignUp) && self.focus == 2);
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::SignIn => Mode::SignUp,
            Mode::SignUp => Mode::SignIn,
        };
        self.error = None;
        self.confirm_password.clear();
        self.focus = 0;
        self.move_focus(0);
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match (self.focus, &self.mode) {
            (0, _) => Some(&mut self.username),
            (1, _) => Some(&mut self.password),
            (2, Mode::SignUp) => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    fn submit(&mut self) -> Vec<Box<dyn Command>> {
        let username = self.username.value().trim().to_string();
        let password = self.password.value().to_string();

        match self.mode {
            Mode::SignIn => {
                if username.is_empty() || password.is_empty() {
                    self.error = Some("Username and password are required".to_string());
                    return vec![];
                }
                self.busy = true;
                self.error = None;
                vec![Box::new(SignInCmd {
                    api: self.api.clone(),
                    username,
                    password,
                    tx: self.msg_tx.clone(),
                })]
            }
            Mode::SignUp => {
                let confirm = self.confirm_password.value().to_string();
                if let Err(e) = validate_signup(&username, &password, &confirm, Some(self.role)) {
                    self.error = Some(e.to_string());
                    return vec![];
                }
                self.busy = true;
                self.error = None;
                vec![Box::new(SignUpCmd {
                    api: self.api.clone(),
                    username,
                    password,
                    confirm,
                    role: self.role,
                    tx: self.msg_tx.clone(),
                })]
            }
        }
    }
}

impl Screen for SignInScreen {
    fn handle_tick(&mut self) {
        if self.busy {
            self.spinner.handle_tick();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> color_eyre::Result<EventResult<()>> {
        if self.busy {
            return Ok(EventResult::Consumed);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                self.move_focus(1);
                return Ok(EventResult::Consumed);
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.move_focus(-1);
                return Ok(EventResult::Consumed);
            }
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
                self.toggle_mode();
                return Ok(EventResult::Consumed);
            }
            (KeyCode::Enter, _) => {
                // Commands are picked up by the next update() pass.
                let commands = self.submit();
                self.pending_commands.extend(commands);
                return Ok(EventResult::Consumed);
            }
            _ => {}
        }

        // Role selector in sign-up mode
        if matches!(self.mode, Mode::SignUp) && self.focus == 3 {
            if matches!(key.code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) {
                self.role = match self.role {
                    UserRole::Homeowner => UserRole::ServiceProvider,
                    UserRole::ServiceProvider => UserRole::Homeowner,
                };
                return Ok(EventResult::Consumed);
            }
            return Ok(EventResult::Ignored);
        }

        if let Some(input) = self.focused_input() {
            use crate::ui::TextInputEvent;
            return Ok(match input.handle_key(key)? {
                // Esc bubbles up so the app-level quit binding still works
                EventResult::Ignored | EventResult::Event(TextInputEvent::Cancelled) => {
                    EventResult::Ignored
                }
                _ => EventResult::Consumed,
            });
        }
        Ok(EventResult::Ignored)
    }

    fn update(&mut self) -> color_eyre::Result<Vec<Box<dyn Command>>> {
        let commands = std::mem::take(&mut self.pending_commands);

        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                SignInMsg::SignedIn(user) => {
                    self.busy = false;
                    let _ = self.app_tx.send(AppMsg::SignedIn(user));
                }
                SignInMsg::Failed(error) => {
                    self.busy = false;
                    self.error = Some(error);
                }
            }
        }
        Ok(commands)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let form_height = match self.mode {
            Mode::SignIn => 13,
            Mode::SignUp => 18,
        };
        let popup = area.centered(Constraint::Length(48), Constraint::Length(form_height));

        let title = match self.mode {
            Mode::SignIn => " Sign in to FixitNow ",
            Mode::SignUp => " Create a FixitNow account ",
        };
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut constraints = vec![
            Constraint::Length(3), // username
            Constraint::Length(3), // password
        ];
        if matches!(self.mode, Mode::SignUp) {
            constraints.push(Constraint::Length(3)); // confirm
            constraints.push(Constraint::Length(1)); // role
        }
        constraints.push(Constraint::Length(1)); // error / spinner
        constraints.push(Constraint::Length(1)); // hint
        let chunks = Layout::vertical(constraints).split(inner);

        self.username.render(frame, chunks[0], theme);
        self.password.render(frame, chunks[1], theme);

        let mut next = 2;
        if matches!(self.mode, Mode::SignUp) {
            self.confirm_password.render(frame, chunks[2], theme);

            let role_style = if self.focus == 3 {
                Style::default()
                    .fg(theme.lavender)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let role_line = Line::from(vec![
                Span::styled("  Role: ", Style::default().fg(theme.subtext1)),
                Span::styled(format!("◀ {} ▶", self.role), role_style),
            ]);
            frame.render_widget(Paragraph::new(role_line), chunks[3]);
            next = 4;
        }

        if self.busy {
            self.spinner.render(frame, chunks[next], theme);
        } else if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    error.clone(),
                    Style::default().fg(theme.red),
                ))
                .alignment(Alignment::Center),
                chunks[next],
            );
        }

        let hint = match self.mode {
            Mode::SignIn => "Enter sign in · ctrl+n create account · Tab next field",
            Mode::SignUp => "Enter create account · ctrl+n back to sign in",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(theme.overlay1)))
                .alignment(Alignment::Center),
            chunks[next + 1],
        );
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::new("Enter".to_string(), "Submit"),
            Keybinding::new("Tab".to_string(), "Next field"),
            Keybinding::new("ctrl+n".to_string(), "Switch mode"),
        ]
    }
}

struct SignInCmd {
    api: ApiClient,
    username: String,
    password: String,
    tx: UnboundedSender<SignInMsg>,
}

#[async_trait]
impl Command for SignInCmd {
    fn name(&self) -> String {
        format!("Signing in {}", self.username)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match self.api.sign_in(&self.username, &self.password).await {
            Ok(true) => match self.api.current_user().await {
                Some(user) => SignInMsg::SignedIn(user),
                None => SignInMsg::Failed("Signed in, but the session is unusable".to_string()),
            },
            Ok(false) => SignInMsg::Failed("Invalid username or password".to_string()),
            Err(e) => SignInMsg::Failed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

struct SignUpCmd {
    api: ApiClient,
    username: String,
    password: String,
    confirm: String,
    role: UserRole,
    tx: UnboundedSender<SignInMsg>,
}

#[async_trait]
impl Command for SignUpCmd {
    fn name(&self) -> String {
        format!("Creating account {}", self.username)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let result = self
            .api
            .sign_up(&self.username, &self.password, &self.confirm, self.role)
            .await;

        let msg = match result {
            // The sign-up response may or may not carry a session; a
            // follow-up sign-in settles it either way.
            Ok(()) => match self.api.current_user().await {
                Some(user) => SignInMsg::SignedIn(user),
                None => match self.api.sign_in(&self.username, &self.password).await {
                    Ok(true) => match self.api.current_user().await {
                        Some(user) => SignInMsg::SignedIn(user),
                        None => SignInMsg::Failed(
                            "Account created, but sign-in failed".to_string(),
                        ),
                    },
                    Ok(false) | Err(_) => {
                        SignInMsg::Failed("Account created, but sign-in failed".to_string())
                    }
                },
            },
            Err(e) => SignInMsg::Failed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}
