use crate::ui::theme::GLOBAL_BORDER;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SCREEN_HINTS: &str =
    " Tab: Next field │ ↑/↓: Model │ Ctrl+S: Check │ Ctrl+V: Paste │ Ctrl+U: Clear │ Ctrl+Q: Quit";
const DIALOG_HINTS: &str = " ←/→: Choose │ Enter: Confirm │ Esc: Close │ Ctrl+Q: Quit";

pub struct Footer {
    dialog_open: bool,
}

impl Footer {
    pub fn new(dialog_open: bool) -> Self {
        Self { dialog_open }
    }

    pub fn hints(&self) -> &'static str {
        if self.dialog_open {
            DIALOG_HINTS
        } else {
            SCREEN_HINTS
        }
    }

    /// Hints on the left, version on the right, inside a bordered band.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = Style::default().add_modifier(Modifier::DIM);
        let version = Line::styled(format!("v{} ", VERSION), dim);
        let [hints, version_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(saturating_u16(version.width())),
        ])
        .areas(inner);
        frame.render_widget(Paragraph::new(Line::styled(self.hints(), dim)), hints);
        frame.render_widget(Paragraph::new(version.right_aligned()), version_area);
    }
}

fn saturating_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
