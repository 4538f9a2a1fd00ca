use crate::device::MediaCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    TogglePlayback,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    Unrecognized,
}

impl KeyAction {
    /// Map a key name (`q`, `space`, `left`, ...) to its action. Case-insensitive.
    pub fn from_key_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "q" => KeyAction::Quit,
            "space" => KeyAction::TogglePlayback,
            "right" => KeyAction::NextTrack,
            "left" => KeyAction::PreviousTrack,
            "up" => KeyAction::VolumeUp,
            "down" => KeyAction::VolumeDown,
            _ => KeyAction::Unrecognized,
        }
    }

    /// The device command this action sends, if any.
    pub fn command(self) -> Option<MediaCommand> {
        match self {
            KeyAction::TogglePlayback => Some(MediaCommand::TogglePlayback),
            KeyAction::NextTrack => Some(MediaCommand::NextTrack),
            KeyAction::PreviousTrack => Some(MediaCommand::PreviousTrack),
            KeyAction::VolumeUp => Some(MediaCommand::VolumeUp),
            KeyAction::VolumeDown => Some(MediaCommand::VolumeDown),
            KeyAction::Quit | KeyAction::Unrecognized => None,
        }
    }
}

/// Name for a terminal key press, in the vocabulary `KeyAction` understands.
///
/// Releases and repeats are dropped so each physical press counts once.
pub fn key_name(event: &KeyEvent) -> Option<String> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let name = match event.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        _ => return None,
    };
    Some(name)
}

/// Ctrl+C arrives as a key event while the terminal is in raw mode.
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
        && event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
