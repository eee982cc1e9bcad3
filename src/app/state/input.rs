use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use super::{AppMode, AppState, InputMode};
use crate::app::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyCommand {
    Quit,
    OpenSearch,
    Locate,
    Refresh,
    ToggleUnits,
    DismissError,
    ToggleHelp,
}

impl AppState {
    pub(crate) fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_press(key, tx),
            Event::FocusGained | Event::FocusLost => self.handle_focus(&event),
            _ => {}
        }
    }

    pub(crate) fn handle_key_press(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        if matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.mode = AppMode::Quit;
            return;
        }
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key.code, tx),
            InputMode::Normal => {
                if let Some(command) = command_for(key.code) {
                    self.execute_key_command(command, tx);
                }
            }
        }
    }

    fn handle_search_key(&mut self, code: KeyCode, tx: &mpsc::Sender<AppEvent>) {
        match code {
            KeyCode::Enter => self.submit_search(tx),
            KeyCode::Esc => self.close_search(),
            KeyCode::Backspace => {
                self.search_input.pop();
                self.search_hint = None;
            }
            KeyCode::Char(ch) if is_city_char(ch) => {
                self.search_input.push(ch);
                self.search_hint = None;
            }
            _ => {}
        }
    }

    fn execute_key_command(&mut self, command: KeyCommand, tx: &mpsc::Sender<AppEvent>) {
        match command {
            KeyCommand::Quit => self.mode = AppMode::Quit,
            KeyCommand::OpenSearch => self.open_search(),
            KeyCommand::Locate => self.request_device_location(tx),
            KeyCommand::Refresh => self.refresh(tx),
            KeyCommand::ToggleUnits => self.toggle_units(tx),
            KeyCommand::DismissError => {
                if self.help_open {
                    self.help_open = false;
                } else {
                    self.dismiss_error();
                }
            }
            KeyCommand::ToggleHelp => self.help_open = !self.help_open,
        }
    }

    pub(crate) fn open_search(&mut self) {
        self.help_open = false;
        self.input_mode = InputMode::Search;
        self.search_input.clear();
        self.search_hint = None;
    }

    pub(crate) fn close_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
        self.search_hint = None;
    }
}

fn command_for(code: KeyCode) -> Option<KeyCommand> {
    const KEY_COMMANDS: [(char, KeyCommand); 8] = [
        ('q', KeyCommand::Quit),
        ('/', KeyCommand::OpenSearch),
        ('s', KeyCommand::OpenSearch),
        ('l', KeyCommand::Locate),
        ('r', KeyCommand::Refresh),
        ('u', KeyCommand::ToggleUnits),
        ('x', KeyCommand::DismissError),
        ('?', KeyCommand::ToggleHelp),
    ];

    match code {
        KeyCode::Esc => Some(KeyCommand::DismissError),
        KeyCode::F(1) => Some(KeyCommand::ToggleHelp),
        KeyCode::Char(ch) => {
            let ch = ch.to_ascii_lowercase();
            KEY_COMMANDS
                .iter()
                .find_map(|(target, command)| (*target == ch).then_some(*command))
        }
        _ => None,
    }
}

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}
