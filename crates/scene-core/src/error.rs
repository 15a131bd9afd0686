use thiserror::Error;

/// Failures surfaced by the scene controller and its renderer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("viewport has zero size ({width}x{height})")]
    EmptyViewport { width: u32, height: u32 },
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
    #[error("render failed: {0}")]
    Render(String),
}
