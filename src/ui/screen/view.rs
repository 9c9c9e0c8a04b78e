use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::assets::Asset;
use crate::ui::theme::{Palette, BUTTON_TEXT, FOCUS_BORDER, GLOBAL_BORDER, PLACEHOLDER_TEXT};

use super::state::{Field, ScreenState};

const SUBTITLE: &str = "Protecting users from financial fraud.";
const INTRO: &str = "Received a suspicious message? Stay calm and verify it instantly!";
const MODEL_LABEL: &str = "Select Fraud Detection Model";
const MODEL_PLACEHOLDER: &str = "Select a model";
const MESSAGE_LABEL: &str = "Paste or Type Suspicious Message Here";
const MESSAGE_PLACEHOLDER: &str = "Enter Message Here...";
const SUBMIT_LABEL: &str = "Check for Fraud";

/// Render the screen body: intro, model selector, message box and button.
pub fn render_screen(frame: &mut Frame, area: Rect, state: &ScreenState, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            SUBTITLE,
            Style::default()
                .fg(palette.subtitle)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Asset::FraudIllustration.glyph()).alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(INTRO, Style::default().add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center),
        rows[2],
    );

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(MODEL_LABEL, label_style)), rows[4]);
    render_model_selector(frame, rows[5], state, palette);
    frame.render_widget(Paragraph::new(Span::styled(MESSAGE_LABEL, label_style)), rows[6]);
    render_message_box(frame, rows[7], state, palette);
    render_submit_button(frame, rows[8], state, palette);
}

fn field_block(focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_model_selector(frame: &mut Frame, area: Rect, state: &ScreenState, palette: &Palette) {
    let focused = state.focus == Field::Model && !state.is_modal_open();
    let content = match state.selected_model_label() {
        Some(label) => Span::styled(label.to_string(), Style::default().fg(palette.black)),
        None => Span::styled(MODEL_PLACEHOLDER, Style::default().fg(PLACEHOLDER_TEXT)),
    };
    let position = match state.selected_index() {
        Some(index) => format!("{}/{}", index + 1, state.models.len()),
        None => format!("-/{}", state.models.len()),
    };
    let line = Line::from(vec![
        Span::raw(" ◂ "),
        content,
        Span::raw(" ▸  "),
        Span::styled(position, Style::default().fg(PLACEHOLDER_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .style(Style::default().bg(palette.input_background))
            .block(field_block(focused)),
        area,
    );
}

fn render_message_box(frame: &mut Frame, area: Rect, state: &ScreenState, palette: &Palette) {
    let focused = state.focus == Field::Message && !state.is_modal_open();
    let block = field_block(focused);
    let inner = block.inner(area);
    let background = Style::default().bg(palette.input_background);

    if state.message.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                MESSAGE_PLACEHOLDER,
                Style::default().fg(PLACEHOLDER_TEXT),
            ))
            .style(background)
            .block(block),
            area,
        );
        if focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let text_style = Style::default().fg(palette.black);
    let (lines, rows) = tail_lines(&state.message, inner.width, inner.height, text_style);
    let scroll = saturating_u16(rows.saturating_sub(usize::from(inner.height)));
    frame.render_widget(
        Paragraph::new(lines)
            .style(background)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        // The view is scrolled to the bottom, so the cursor sits on the last
        // drawn row, after its last glyph.
        let row = saturating_u16(rows.saturating_sub(1))
            .saturating_sub(scroll)
            .min(inner.height - 1);
        let y = inner.y + row;
        let trailing = state
            .message
            .rsplit('\n')
            .next()
            .map(|last| last.len() - last.trim_end_matches(' ').len())
            .unwrap_or(0);
        let x = row_end(frame, inner, y)
            .saturating_add(saturating_u16(trailing))
            .min(inner.right() - 1);
        frame.set_cursor_position(Position::new(x, y));
    }
}

/// Trailing lines of `message` that fill `height` rows once wrapped to
/// `width`, with their wrapped row count. A logical line longer than the
/// box can show is cut to its tail.
fn tail_lines(message: &str, width: u16, height: u16, style: Style) -> (Vec<Line<'static>>, usize) {
    let budget = usize::from(width.max(1)) * (usize::from(height) + 1);
    let mut lines = Vec::new();
    let mut rows = 0;
    for text in message.rsplit('\n') {
        let line = Line::styled(tail_chars(text, budget).to_string(), style);
        rows += Paragraph::new(line.clone())
            .wrap(Wrap { trim: false })
            .line_count(width)
            .max(1);
        lines.push(line);
        if rows >= usize::from(height) {
            break;
        }
    }
    lines.reverse();
    (lines, rows)
}

fn tail_chars(text: &str, max: usize) -> &str {
    match text.char_indices().rev().nth(max.saturating_sub(1)) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}

/// Column just past the last glyph drawn on row `y` of `inner`.
fn row_end(frame: &mut Frame, inner: Rect, y: u16) -> u16 {
    let buffer = frame.buffer_mut();
    (inner.left()..inner.right())
        .rev()
        .find_map(|x| {
            let symbol = buffer[(x, y)].symbol();
            (symbol != " ").then(|| x.saturating_add(saturating_u16(Span::raw(symbol).width())))
        })
        .unwrap_or(inner.x)
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn render_submit_button(frame: &mut Frame, area: Rect, state: &ScreenState, palette: &Palette) {
    let focused = state.focus == Field::Submit && !state.is_modal_open();
    let mut style = Style::default().fg(BUTTON_TEXT).bg(palette.brand);
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    frame.render_widget(
        Paragraph::new(Span::styled(format!("  {}  ", SUBMIT_LABEL), style))
            .alignment(Alignment::Right),
        area,
    );
}
