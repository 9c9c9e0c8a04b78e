//! Full session driven through key events.

mod common;

use common::{ctrl, make_app, press};
use crossterm::event::KeyCode;
use fraudshield::ui::input::{handle_key, InputAction};
use fraudshield::ui::screen::{Field, Modal};
use fraudshield::verdict::VerdictKind;

fn type_text(app: &mut fraudshield::ui::app::App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
}

#[test]
fn safe_session_with_feedback_accept() {
    let mut app = make_app();
    assert_eq!(app.screen().focus, Field::Message);

    type_text(&mut app, "okay");
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.screen().modal, Modal::Verdict);
    assert_eq!(app.screen().payload.kind, VerdictKind::Safe);

    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.screen().modal, Modal::Feedback);

    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.screen().action_cursor, 1);
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.screen().modal, Modal::Closed);
}

#[test]
fn fraud_session_closed_with_escape() {
    let mut app = make_app();
    type_text(&mut app, "urgent wire transfer now");
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.screen().payload.title, "FRAUD DETECTED!");

    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.screen().feedback_visible());
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.screen().is_modal_open());
    assert!(!app.should_quit());
}

#[test]
fn multiline_message_is_fraud() {
    let mut app = make_app();
    type_text(&mut app, "okay");
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.screen().message, "okay\n");
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.screen().payload.kind, VerdictKind::Fraud);
}

#[test]
fn backspace_fixes_typo() {
    let mut app = make_app();
    type_text(&mut app, "okey");
    handle_key(&mut app, press(KeyCode::Backspace));
    handle_key(&mut app, press(KeyCode::Backspace));
    type_text(&mut app, "ay");
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.screen().payload.kind, VerdictKind::Safe);
}

#[test]
fn model_dropdown_is_inert() {
    let mut app = make_app();
    type_text(&mut app, "okay");
    handle_key(&mut app, press(KeyCode::BackTab));
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.screen().selected_model.as_deref(), Some("model2"));
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.screen().payload.kind, VerdictKind::Safe);
}

#[test]
fn bracketed_paste_then_submit() {
    let mut app = make_app();
    app.on_paste("Your account is locked.\r\nVerify now!");
    assert_eq!(app.screen().message, "Your account is locked.\nVerify now!");
    handle_key(&mut app, ctrl('u'));
    assert!(app.screen().message.is_empty());
    app.on_paste("okay");
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.screen().payload.kind, VerdictKind::Safe);
}

#[test]
fn ctrl_v_is_not_handled_while_dialog_open() {
    let mut app = make_app();
    handle_key(&mut app, ctrl('s'));
    assert_eq!(handle_key(&mut app, ctrl('v')), InputAction::None);
}
