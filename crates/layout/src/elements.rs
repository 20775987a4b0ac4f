use crate::node::Content;
use marquee_style::ObjectStyle;
use marquee_types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawableKind {
    Textbox,
    ScrollingTextbox,
    Image,
    Alert,
}

impl DrawableKind {
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            DrawableKind::Textbox | DrawableKind::ScrollingTextbox | DrawableKind::Alert
        )
    }
}

/// One flattened drawable region, in absolute device pixels.
///
/// Immutable after the layout pass. `index` is the position in flatten order
/// and doubles as both the stacking order and the identity key for all
/// per-object runtime state (scroll offsets, cached text metrics); reloading
/// the layout invalidates that state wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub index: usize,
    pub kind: DrawableKind,
    pub frame: Rect,
    pub style: ObjectStyle,
    pub content: Content,
}
