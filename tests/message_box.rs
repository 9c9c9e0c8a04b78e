mod common;

use common::{buffer_text, make_app, render_with_cursor};

// At 80x30 the message box interior starts at column 1 and spans rows 13..25.
const INNER_LEFT: u16 = 1;
const INNER_TOP: u16 = 13;
const INNER_BOTTOM: u16 = 24;

/// Row index and the column just past the first occurrence of `needle`.
fn locate(text: &str, needle: &str) -> Option<(u16, u16)> {
    text.lines().enumerate().find_map(|(y, row)| {
        row.find(needle).map(|byte| {
            let col = row[..byte].chars().count() + needle.chars().count();
            (y as u16, col as u16)
        })
    })
}

#[test]
fn empty_message_shows_placeholder_with_cursor_at_start() {
    let app = make_app();
    let (buffer, cursor) = render_with_cursor(&app, 80, 30);
    assert!(buffer_text(&buffer).contains("Enter Message Here..."));
    assert_eq!((cursor.x, cursor.y), (INNER_LEFT, INNER_TOP));
}

#[test]
fn long_line_wraps_and_keeps_its_tail_visible() {
    let mut app = make_app();
    app.update_message(format!("Dear customer your account {} TAILMARK", "x".repeat(120)));
    let (buffer, cursor) = render_with_cursor(&app, 80, 30);
    let text = buffer_text(&buffer);

    assert!(text.contains("Dear customer your account"));
    let (row, end) = locate(&text, "TAILMARK").expect("end of the line is drawn");
    assert_eq!((cursor.x, cursor.y), (end, row));
}

#[test]
fn very_tall_message_scrolls_to_its_last_line() {
    let mut app = make_app();
    let mut message: String = (0..65_540).map(|i| format!("line {i}\n")).collect();
    message.push_str("LASTLINE");
    app.update_message(message);

    let (buffer, cursor) = render_with_cursor(&app, 80, 30);
    let text = buffer_text(&buffer);

    let (row, end) = locate(&text, "LASTLINE").expect("last line is drawn");
    assert_eq!(row, INNER_BOTTOM);
    assert!(text.contains("line 65539"));
    assert!(!text.contains("line 65528"));
    assert_eq!((cursor.x, cursor.y), (end, row));
}

#[test]
fn cursor_follows_a_trailing_newline() {
    let mut app = make_app();
    app.update_message("first\n");
    let (_, cursor) = render_with_cursor(&app, 80, 30);
    assert_eq!((cursor.x, cursor.y), (INNER_LEFT, INNER_TOP + 1));
}

#[test]
fn cursor_counts_display_width_of_wide_characters() {
    let mut app = make_app();
    app.update_message("日本語");
    let (_, cursor) = render_with_cursor(&app, 80, 30);
    assert_eq!((cursor.x, cursor.y), (INNER_LEFT + 6, INNER_TOP));
}

#[test]
fn cursor_stays_after_trailing_spaces() {
    let mut app = make_app();
    app.update_message("okay  ");
    let (_, cursor) = render_with_cursor(&app, 80, 30);
    assert_eq!((cursor.x, cursor.y), (INNER_LEFT + 6, INNER_TOP));
}
