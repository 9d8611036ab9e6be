use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};


const OPTION_KEYS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// Select the option at this visible index.
    Select(usize),
    /// Submit, continue or play again, depending on the phase.
    Primary,
    ToggleReview,
    Restart,
    Quit,
}

/// Keyboard label of the option at `index`, if it has one.
pub fn option_key(index: usize) -> Option<char> {
    OPTION_KEYS.get(index).copied()
}

impl Command {
    pub fn from_key(key: &KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Primary),
            KeyCode::Char(c) if c.is_ascii_digit() => OPTION_KEYS
                .iter()
                .position(|k| *k == c)
                .map(Command::Select),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::ToggleReview),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Blocks until the next key press that maps to a command.
pub fn read_command() -> Result<Command> {
    loop {
        if let Event::Key(key) = event::read().context("Could not read terminal input")? {
            if let Some(command) = Command::from_key(&key) {
                return Ok(command);
            }
        }
    }
}
