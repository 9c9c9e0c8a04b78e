use crate::ui::app::App;
use crate::ui::screen::{Field, ScreenIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Request text paste from the system clipboard.
    ClipboardPaste,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if app.screen().is_modal_open() {
        handle_dialog_key(app, key);
        return InputAction::None;
    }

    // Ctrl+V and Ctrl+Shift+V read the clipboard directly; terminals that
    // support bracketed paste deliver a paste event instead.
    if is_ctrl_char(key, 'v') || is_ctrl_shift_char(key, 'v') {
        return InputAction::ClipboardPaste;
    }
    if is_ctrl_char(key, 's') {
        app.submit();
        return InputAction::None;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch(ScreenIntent::ClearMessage);
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab => {
            app.dispatch(ScreenIntent::FocusNext);
            return InputAction::None;
        }
        KeyCode::BackTab => {
            app.dispatch(ScreenIntent::FocusPrev);
            return InputAction::None;
        }
        _ => {}
    }

    match app.screen().focus {
        Field::Model => handle_model_key(app, key),
        Field::Message => handle_message_key(app, key),
        Field::Submit => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.submit();
            }
        }
    }
    InputAction::None
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_dialog_button(),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
            app.dispatch(ScreenIntent::MoveAction { step: -1 })
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
            app.dispatch(ScreenIntent::MoveAction { step: 1 })
        }
        _ => {}
    }
}

fn handle_model_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Left => app.dispatch(ScreenIntent::CycleModel { step: -1 }),
        KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => {
            app.dispatch(ScreenIntent::CycleModel { step: 1 })
        }
        KeyCode::Enter => app.dispatch(ScreenIntent::FocusNext),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            let id = index
                .checked_sub(1)
                .and_then(|i| app.screen().models.get(i))
                .map(|m| m.id.clone());
            if let Some(id) = id {
                app.select_model(id);
            }
        }
        _ => {}
    }
}

fn handle_message_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(ScreenIntent::InsertChar(ch))
        }
        KeyCode::Enter => app.dispatch(ScreenIntent::InsertChar('\n')),
        KeyCode::Backspace => app.dispatch(ScreenIntent::DeleteChar),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_ctrl_shift_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.modifiers.contains(KeyModifiers::SHIFT)
}
