//! Error types for the rv-cli driver.

/// Driver error type that wraps errors from the backend crates and
/// provides a unified interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Graph not found: {0}")]
    GraphNotFound(String),

    #[error("Route error: {0}")]
    Route(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rv-cli operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<rv_project::ProjectError> for AppError {
    fn from(err: rv_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<rv_render::RenderError> for AppError {
    fn from(err: rv_render::RenderError) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<rv_core::RvError> for AppError {
    fn from(err: rv_core::RvError) -> Self {
        AppError::Route(err.to_string())
    }
}
