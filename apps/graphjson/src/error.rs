//! # Application Errors

use graphjson_core::ExportError;
use thiserror::Error;

/// Everything that can stop a CLI command.
#[derive(Debug, Error)]
pub enum AppError {
    /// The core exporter refused the graph or the sink failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path failed validation before it was opened.
    #[error("Invalid path: {0}")]
    Path(String),

    #[error("File size {size} bytes exceeds maximum allowed {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Invalid JSON description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML description: {0}")]
    Toml(#[from] toml::de::Error),

    /// The description parsed but does not describe a valid graph.
    #[error("Invalid graph description: {0}")]
    Description(String),
}
