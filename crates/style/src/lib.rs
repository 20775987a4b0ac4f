pub mod anchor;
pub mod dimension;
pub mod object;

pub use anchor::{HorizontalAnchor, TextAlign, VerticalAnchor};
pub use dimension::{resolve, Dimension, StyleError};
pub use object::ObjectStyle;
