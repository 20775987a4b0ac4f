use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Font not found: {0}")]
    FontNotFound(String),
}
