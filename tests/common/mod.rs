//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use fraudshield::config::Config;
use fraudshield::ui::app::App;
use fraudshield::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Color;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAFE_GREEN: Color = Color::Rgb(0x03, 0x98, 0x55);
pub const FRAUD_RED: Color = Color::Rgb(0xcd, 0x2f, 0x2e);

pub fn make_app() -> App {
    App::new(&Config::default()).expect("default config is valid")
}

pub fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn press(code: KeyCode) -> KeyEvent {
    key(code, KeyModifiers::empty())
}

pub fn ctrl(ch: char) -> KeyEvent {
    key(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Render the whole UI into an in-memory buffer.
pub fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

/// Render the whole UI and report where the terminal cursor was left.
pub fn render_with_cursor(app: &App, width: u16, height: u16) -> (Buffer, Position) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let cursor = terminal.get_cursor_position().expect("cursor position");
    (terminal.backend().buffer().clone(), cursor)
}

/// Buffer rows joined with newlines.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

pub fn has_fg(buffer: &Buffer, color: Color) -> bool {
    buffer.content().iter().any(|cell| cell.fg == color)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
