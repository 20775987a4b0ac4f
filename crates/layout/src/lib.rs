use marquee_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("Unsupported layout version: {0}")]
    UnsupportedVersion(String),
}

mod elements;
pub mod flatten;
pub mod node;

pub use self::elements::{Drawable, DrawableKind};
pub use self::flatten::flatten;
pub use self::node::{Content, Geometry, GroupNode, LayoutDocument, LayoutNode, LeafNode};

// Re-export geometry types used by the flattener to prevent type mismatches
pub use marquee_types::{Rect, Size};
