//! Error types for lector-pdf

use std::path::PathBuf;
use thiserror::Error;

/// PDF extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("PDF not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read PDF: {0}")]
    Unreadable(String),
}
