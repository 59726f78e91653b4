use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::key::{Key, KeyBinding};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalKeybindings {
    pub quit: KeyBinding,
    pub sign_out: KeyBinding,
    pub back: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationKeybindings {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub page_up: KeyBinding,
    pub page_down: KeyBinding,
    pub home: KeyBinding,
    pub end: KeyBinding,
    pub select: KeyBinding,
    pub next_panel: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchKeybindings {
    pub toggle: KeyBinding,
    pub exit: KeyBinding,
}

/// Keys for the homeowner request panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestsKeybindings {
    pub new: KeyBinding,
    pub reschedule: KeyBinding,
    pub rate: KeyBinding,
    pub view: KeyBinding,
    pub export: KeyBinding,
    pub refresh: KeyBinding,
}

/// Keys for the provider job panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsKeybindings {
    pub accept: KeyBinding,
    pub skip: KeyBinding,
    pub start: KeyBinding,
    pub complete: KeyBinding,
    pub view: KeyBinding,
    pub refresh: KeyBinding,
    pub toggle_auto_refresh: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogKeybindings {
    pub confirm: KeyBinding,
    pub cancel: KeyBinding,
    pub dismiss: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub global: GlobalKeybindings,
    #[serde(default)]
    pub navigation: NavigationKeybindings,
    #[serde(default)]
    pub search: SearchKeybindings,
    #[serde(default)]
    pub requests: RequestsKeybindings,
    #[serde(default)]
    pub jobs: JobsKeybindings,
    #[serde(default)]
    pub dialog: DialogKeybindings,
}

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            sign_out: Key::new(KeyCode::Char('L')).into(),
            back: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            up: KeyBinding::multiple(vec![Key::new(KeyCode::Char('k')), Key::new(KeyCode::Up)]),
            down: KeyBinding::multiple(vec![Key::new(KeyCode::Char('j')), Key::new(KeyCode::Down)]),
            page_up: Key::new(KeyCode::PageUp).into(),
            page_down: Key::new(KeyCode::PageDown).into(),
            home: KeyBinding::multiple(vec![Key::new(KeyCode::Char('g')), Key::new(KeyCode::Home)]),
            end: KeyBinding::multiple(vec![Key::new(KeyCode::Char('G')), Key::new(KeyCode::End)]),
            select: Key::new(KeyCode::Enter).into(),
            next_panel: Key::new(KeyCode::Tab).into(),
        }
    }
}

impl Default for SearchKeybindings {
    fn default() -> Self {
        Self {
            toggle: Key::new(KeyCode::Char('/')).into(),
            exit: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for RequestsKeybindings {
    fn default() -> Self {
        Self {
            new: Key::new(KeyCode::Char('n')).into(),
            reschedule: Key::new(KeyCode::Char('d')).into(),
            rate: Key::new(KeyCode::Char('t')).into(),
            view: Key::new(KeyCode::Char('v')).into(),
            export: Key::new(KeyCode::Char('x')).into(),
            refresh: Key::new(KeyCode::Char('r')).into(),
        }
    }
}

impl Default for JobsKeybindings {
    fn default() -> Self {
        Self {
            accept: Key::new(KeyCode::Char('a')).into(),
            skip: Key::new(KeyCode::Char('s')).into(),
            start: Key::new(KeyCode::Char('S')).into(),
            complete: Key::new(KeyCode::Char('c')).into(),
            view: Key::new(KeyCode::Char('v')).into(),
            refresh: Key::new(KeyCode::Char('r')).into(),
            toggle_auto_refresh: Key::new(KeyCode::Char('p')).into(),
        }
    }
}

impl Default for DialogKeybindings {
    fn default() -> Self {
        Self {
            confirm: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('y')),
                Key::new(KeyCode::Char('Y')),
                Key::new(KeyCode::Enter),
            ]),
            cancel: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('n')),
                Key::new(KeyCode::Char('N')),
                Key::new(KeyCode::Esc),
            ]),
            dismiss: KeyBinding::multiple(vec![
                Key::new(KeyCode::Enter),
                Key::new(KeyCode::Esc),
                Key::new(KeyCode::Char('q')),
            ]),
        }
    }
}
