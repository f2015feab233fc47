//! Platform error types

use thiserror::Error;

/// Errors surfaced by host document operations
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The overlay stylesheet could not be injected
    #[error("Stylesheet injection failed: {0}")]
    StylesheetInjection(String),

    /// An overlay widget subtree could not be created
    #[error("Widget creation failed: {0}")]
    WidgetCreation(String),

    /// A required capability is missing on this host
    #[error("Host capability unavailable: {0}")]
    Unsupported(String),

    /// Generic host error
    #[error("Host error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
