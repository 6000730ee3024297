//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::HitTarget;

/// Direction to move the focused toggle cell
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FocusMove {
    Left,
    Right,
    Up,
    Down,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Bits
    ToggleBit { octet: usize, bit: usize },
    ToggleFocused,
    /// Toggle a bit of the focused octet by index (keys 1-8)
    ToggleFocusedBit(usize),
    ClearAll,

    // Focus
    MoveFocus(FocusMove),

    /// Window width in pixels
    Resize { width: u32 },

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('c') | KeyCode::Delete => Some(UiEvent::ClearAll),
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiEvent::ToggleFocused),
        KeyCode::Char(d @ '1'..='8') => {
            let index = d.to_digit(10)? as usize - 1;
            Some(UiEvent::ToggleFocusedBit(index))
        }
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::MoveFocus(FocusMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::MoveFocus(FocusMove::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveFocus(FocusMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveFocus(FocusMove::Down)),
        KeyCode::Tab => Some(UiEvent::MoveFocus(FocusMove::Down)),
        KeyCode::BackTab => Some(UiEvent::MoveFocus(FocusMove::Up)),
        _ => None,
    }
}

/// Convert a mouse event to a UiEvent given what lies under the pointer
pub fn mouse_to_ui_event(mouse: MouseEvent, target: Option<HitTarget>, show_help: bool) -> Option<UiEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match target? {
        HitTarget::Bit { octet, bit } => Some(UiEvent::ToggleBit { octet, bit }),
        HitTarget::Clear => Some(UiEvent::ClearAll),
    }
}
