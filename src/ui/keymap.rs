//! Key bindings
//!
//! Translation layer between crossterm input and `AppEvent`. Each screen has
//! its own bindings:
//! - Editing: type to edit, Up/Down or F1-F5 pick a preset, Enter starts,
//!   Ctrl-P previews, Ctrl-V pastes, Esc quits
//! - Preview: Up/Down or +/- change font size, Esc ends preview
//! - Fullscreen: any key or click taps; Enter on the overlay ends

use crate::app::{AppEvent, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

pub fn map_key(mode: AppMode, overlay_visible: bool, key: KeyEvent) -> AppEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Editing => map_editing_key(key, ctrl),
        AppMode::Preview => map_preview_key(key),
        AppMode::Fullscreen => match key.code {
            KeyCode::Enter if overlay_visible => AppEvent::EndFullscreen,
            _ => AppEvent::Tap,
        },
        AppMode::Quit => AppEvent::None,
    }
}

pub fn map_mouse(mode: AppMode, mouse: MouseEvent) -> AppEvent {
    match (mode, mouse.kind) {
        (AppMode::Fullscreen, MouseEventKind::Down(_)) => AppEvent::Tap,
        (AppMode::Preview, MouseEventKind::ScrollUp) => AppEvent::FontSizeUp,
        (AppMode::Preview, MouseEventKind::ScrollDown) => AppEvent::FontSizeDown,
        _ => AppEvent::None,
    }
}

fn map_editing_key(key: KeyEvent, ctrl: bool) -> AppEvent {
    match key.code {
        KeyCode::Esc => AppEvent::Quit,
        KeyCode::Enter => AppEvent::StartFullscreen,
        KeyCode::Up => AppEvent::PreviousPreset,
        KeyCode::Down => AppEvent::NextPreset,
        KeyCode::F(n) if n >= 1 => AppEvent::SelectPreset(usize::from(n - 1)),
        KeyCode::Backspace => AppEvent::DeleteBackward,
        KeyCode::Char('p') if ctrl => AppEvent::StartPreview,
        KeyCode::Char('v') if ctrl => AppEvent::PasteClipboard,
        KeyCode::Char(_) if ctrl => AppEvent::None,
        KeyCode::Char(c) => AppEvent::InsertChar(c),
        _ => AppEvent::None,
    }
}

fn map_preview_key(key: KeyEvent) -> AppEvent {
    match key.code {
        KeyCode::Esc => AppEvent::EndPreview,
        KeyCode::Up | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            AppEvent::FontSizeUp
        }
        KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => AppEvent::FontSizeDown,
        _ => AppEvent::None,
    }
}
