//! Text templates with embedded provider invocations.
//!
//! This crate is the integration point between the render pipeline and live
//! data. A template is ordinary text with `{provider:operation[:argument]}`
//! placeholders; each placeholder resolves against an explicit registration
//! table built once at startup.
//!
//! ## Key Abstractions
//!
//! - **`ProviderRegistry`**: the `(provider, operation) -> bound function` table
//! - **`substitute`**: resolve placeholders into a merged string
//! - **`trigger`**: resolve placeholders for side effect only (scroll-end hooks)

use thiserror::Error;

/// Errors surfaced by placeholder resolution.
///
/// Provider-side failures are never errors here: by convention an operation
/// returns a displayable fallback string instead, so a broken data source
/// degrades on screen rather than halting animation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown provider: '{0}'")]
    UnknownProvider(String),
    #[error("Unknown operation '{operation}' on provider '{provider}'")]
    UnknownOperation { provider: String, operation: String },
}

mod registry;
mod substitute;

pub use registry::{ProviderFn, ProviderRegistry};
