use ratatui::style::Color;

use crate::verdict::VerdictKind;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const ICON_BACKGROUND: Color = Color::Rgb(0xe0, 0xe0, 0xe0);
pub const FOCUS_BORDER: Color = Color::Rgb(0x00, 0x4a, 0xad);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x9e, 0x9e, 0x9e);

/// Screen and dialog colors. Built once from config and passed by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub black: Color,
    pub brand: Color,
    pub safe: Color,
    pub fraud: Color,
    pub subtitle: Color,
    pub input_background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            black: Color::Rgb(0x00, 0x00, 0x00),
            brand: Color::Rgb(0x00, 0x4a, 0xad),
            safe: Color::Rgb(0x03, 0x98, 0x55),
            fraud: Color::Rgb(0xcd, 0x2f, 0x2e),
            subtitle: Color::Rgb(0x55, 0x55, 0x55),
            input_background: Color::Rgb(0xe3, 0xf2, 0xfd),
        }
    }
}

impl Palette {
    /// Accent color of a dialog variant.
    pub fn accent(&self, kind: VerdictKind) -> Color {
        match kind {
            VerdictKind::Safe => self.safe,
            VerdictKind::Fraud => self.fraud,
            VerdictKind::Feedback => self.brand,
        }
    }
}

/// Parse `#RRGGBB` (case-insensitive).
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
