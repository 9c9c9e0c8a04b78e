//! Verdict / feedback dialog.
//!
//! A presentational component: everything it shows comes from its props
//! and the palette, and the only thing it reports back is `on_close`.
//! Visibility and the highlighted button are owned by the caller.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::assets::Asset;
use crate::ui::layout::{centered_rect_by_size, dialog_width};
use crate::ui::theme::{Palette, BUTTON_TEXT, ICON_BACKGROUND, POPUP_BORDER};
use crate::verdict::VerdictKind;

const DIALOG_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
const RATING_PROMPT: &str = "How did we do?";

const VERDICT_ACTIONS: &[DialogAction] = &[DialogAction::Okay];
const FEEDBACK_ACTIONS: &[DialogAction] = &[DialogAction::Skip, DialogAction::Accept];

/// A button of the dialog. Every action closes the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Okay,
    Skip,
    Accept,
}

impl DialogAction {
    pub fn label(self) -> &'static str {
        match self {
            DialogAction::Okay => "Okay",
            DialogAction::Skip => "No, Skip",
            DialogAction::Accept => "Yes, Use it!",
        }
    }
}

/// Inputs of a single render.
#[derive(Debug, Clone, Copy)]
pub struct DialogProps<'a> {
    pub kind: VerdictKind,
    pub visible: bool,
    pub title: &'a str,
    pub description: &'a str,
}

pub struct Dialog<'a> {
    props: DialogProps<'a>,
    palette: &'a Palette,
}

impl<'a> Dialog<'a> {
    pub fn new(props: DialogProps<'a>, palette: &'a Palette) -> Self {
        Self { props, palette }
    }

    pub fn is_visible(&self) -> bool {
        self.props.visible
    }

    pub fn icon(&self) -> Asset {
        match self.props.kind {
            VerdictKind::Safe => Asset::OkayIcon,
            VerdictKind::Fraud => Asset::WarningIcon,
            VerdictKind::Feedback => Asset::BotIcon,
        }
    }

    pub fn accent(&self) -> Color {
        self.palette.accent(self.props.kind)
    }

    pub fn actions(&self) -> &'static [DialogAction] {
        match self.props.kind {
            VerdictKind::Safe | VerdictKind::Fraud => VERDICT_ACTIONS,
            VerdictKind::Feedback => FEEDBACK_ACTIONS,
        }
    }

    /// The like/dislike row is only shown under a verdict.
    pub fn shows_rating_row(&self) -> bool {
        self.props.kind.is_verdict()
    }

    /// Activate the button at `index`. Calls `on_close` once and returns true,
    /// or returns false without calling it when hidden or out of range.
    pub fn press<F>(&self, index: usize, on_close: F) -> bool
    where
        F: FnOnce(DialogAction),
    {
        if !self.is_visible() {
            return false;
        }
        let Some(action) = self.actions().get(index).copied() else {
            return false;
        };
        on_close(action);
        true
    }

    /// Close request from outside the buttons (Escape). Treated as the first action.
    pub fn request_close<F>(&self, on_close: F) -> bool
    where
        F: FnOnce(DialogAction),
    {
        self.press(0, on_close)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, selected: usize) {
        if !self.is_visible() {
            return;
        }

        // Backdrop: everything behind the dialog is dimmed.
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));

        let width = dialog_width(area);
        let paragraph = Paragraph::new(self.lines(selected))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        let rows = paragraph.line_count(width.saturating_sub(4));
        let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
        let rect = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.props.title),
                Style::default().fg(self.palette.black),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(DIALOG_BACKGROUND));
        frame.render_widget(paragraph.block(block), rect);
    }

    fn lines(&self, selected: usize) -> Vec<Line<'static>> {
        let text_style = Style::default().fg(self.palette.black);
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {} ", self.icon().glyph()),
                Style::default().bg(ICON_BACKGROUND),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.props.title.to_string(),
                Style::default()
                    .fg(self.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        lines.push(Line::from(Span::styled(
            self.props.description.to_string(),
            text_style,
        )));

        if self.shows_rating_row() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(RATING_PROMPT, text_style),
                Span::raw("   "),
                Span::raw(Asset::LikeIcon.glyph()),
                Span::raw("   "),
                Span::raw(Asset::DislikeIcon.glyph()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(self.buttons(selected));
        lines
    }

    fn buttons(&self, selected: usize) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, action) in self.actions().iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("    "));
            }
            let style = if index == selected {
                Style::default()
                    .fg(BUTTON_TEXT)
                    .bg(self.palette.brand)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.palette.black).bg(ICON_BACKGROUND)
            };
            spans.push(Span::styled(format!(" {} ", action.label()), style));
        }
        Line::from(spans)
    }
}
