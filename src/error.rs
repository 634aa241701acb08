//! Error types for hexagrid generation

use std::fmt;

/// Errors that can occur during grid generation
#[derive(Debug, Clone)]
pub enum GridError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Generation failed due to geometry issues
    GenerationFailed(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            GridError::GenerationFailed(msg) => write!(f, "generation failed: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

/// Result type alias for hexagrid operations
pub type Result<T> = std::result::Result<T, GridError>;
