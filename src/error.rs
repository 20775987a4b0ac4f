// src/error.rs
//! Defines the unified error type for pipeline assembly and the run loop.

use marquee_layout::LayoutError;
use marquee_render::RenderError;
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Other pipeline error: {0}")]
    Other(String),
}
