use crate::ui::assets::Asset;
use crate::ui::theme::{Palette, GLOBAL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const APP_TITLE: &str = "FraudShield";

/// Brand header: logo and app name.
pub struct Header<'a> {
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::raw(Asset::Logo.glyph()),
            Span::raw("  "),
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(self.palette.brand)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
