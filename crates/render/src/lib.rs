//! Device collaborator traits and pixel-level text drawing.
//!
//! The engine never assumes hardware vs. simulated backing. It draws through
//! two seams: a [`Surface`] it can set pixels on and a [`Display`] that swaps
//! completed frames, plus a [`Font`] abstraction exposing glyph metrics and
//! bitmaps. Everything above those seams (glyph loops, markup, clipping, the
//! debug overlay) is engine-side so that clipping applies to every pixel.

mod error;
pub mod clip;
pub mod debug;
pub mod font;
pub mod markup;
pub mod sim;
pub mod text;
mod traits;

pub use clip::ClippedSurface;
pub use error::RenderError;
pub use font::{FixedAdvanceFont, Font, FontLibrary, FontProvider, Glyph, InMemoryFontProvider};
pub use markup::{draw_markup, measure_markup, ColorCache, WidthCache, BG_PAD};
pub use sim::{SimDisplay, SimSurface};
pub use text::{draw_line, draw_rect_outline, draw_text, fill_rect, measure_text};
pub use traits::{Display, Surface};
