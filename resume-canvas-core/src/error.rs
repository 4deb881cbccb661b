//! Error types for canvas operations.

use thiserror::Error;

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur in canvas operations.
///
/// Projection and gesture handling never fail; these variants only surface
/// from APIs that accept caller-supplied identifiers, names or documents.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Element not found in scene.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Template name outside the catalog (strict parsing only).
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Font identifier outside the catalog (strict parsing only).
    #[error("Unknown font: {0}")]
    UnknownFont(String),

    /// Canvas configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scene or document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
