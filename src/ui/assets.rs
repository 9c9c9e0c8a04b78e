//! Named image resources, rendered as terminal glyphs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Logo,
    FraudIllustration,
    OkayIcon,
    WarningIcon,
    BotIcon,
    LikeIcon,
    DislikeIcon,
}

impl Asset {
    pub fn glyph(self) -> &'static str {
        match self {
            Asset::Logo => "🛡",
            Asset::FraudIllustration => "🕵",
            Asset::OkayIcon => "✔",
            Asset::WarningIcon => "⚠",
            Asset::BotIcon => "🤖",
            Asset::LikeIcon => "👍",
            Asset::DislikeIcon => "👎",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_asset_has_a_glyph() {
        let all = [
            Asset::Logo,
            Asset::FraudIllustration,
            Asset::OkayIcon,
            Asset::WarningIcon,
            Asset::BotIcon,
            Asset::LikeIcon,
            Asset::DislikeIcon,
        ];
        for asset in all {
            assert!(!asset.glyph().is_empty());
        }
        assert_eq!(Asset::BotIcon.glyph(), "🤖");
    }
}
