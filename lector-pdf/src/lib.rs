//! lector-pdf: PDF text extraction for lector
//!
//! Extracts the text of every page of a PDF into a single string:
//! - Pluggable reading backends (lopdf primary, pdf-extract fallback)
//! - Per-page extraction with silent skipping of unreadable pages
//! - Typed errors so callers can tell "file missing" from "file unreadable"

pub mod backends;
pub mod error;
pub mod extractor;

pub use backends::{PageSet, PdfBackend};
pub use error::ExtractError;
pub use extractor::{Extraction, PdfExtractor};
