use serde::{Deserialize, Serialize};

/// Horizontal anchor for a resolved box: which edge of the box the `x`
/// coordinate names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum HorizontalAnchor {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor for a resolved box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Alignment of static text inside its box, applied against the measured
/// text width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}
