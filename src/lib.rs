//! # marquee
//!
//! Layout-driven scrolling text engine for LED pixel-matrix displays.
//!
//! A declarative layout document is flattened once into absolute drawables;
//! every frame then resolves live text through registered providers, renders
//! it with inline color markup, advances per-region scroll state, and paces
//! itself against a target frame rate, while a background loop keeps
//! provider content fresh without ever blocking a frame.
//!
//! The device (real matrix or simulator), layout validation, and data-source
//! fetching all live behind traits; see `marquee-render` and
//! `marquee-providers` for the seams.

pub mod config;
pub mod error;
pub mod pacer;
pub mod pipeline;
pub mod scroll;

pub use config::RuntimeConfig;
pub use error::PipelineError;
pub use pacer::FramePacer;
pub use pipeline::{DisplayPipeline, PipelineBuilder};
pub use scroll::ScrollAnimator;

// Re-export the pieces assemblies and tests routinely need.
pub use marquee_layout::{flatten, Drawable, DrawableKind, LayoutDocument, LayoutNode};
pub use marquee_providers::{ClockProvider, FeedItem, FeedProvider, ProviderError, RefreshSource};
pub use marquee_render::{
    Display, FixedAdvanceFont, Font, FontProvider, InMemoryFontProvider, SimDisplay, SimSurface,
    Surface,
};
pub use marquee_template::{ProviderRegistry, TemplateError};
pub use marquee_types::{Color, Rect, Size};
