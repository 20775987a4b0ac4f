use marquee_types::Color;
use serde::Deserialize;

/// Visual style of one drawable region.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectStyle {
    pub fg_color: Color,
    pub bg_color: Option<Color>,
    /// Font identifier, resolved to glyph metrics by the device side.
    pub font: String,
}

impl Default for ObjectStyle {
    fn default() -> Self {
        Self {
            fg_color: Color::WHITE,
            bg_color: None,
            font: "7x13.bdf".to_string(),
        }
    }
}
