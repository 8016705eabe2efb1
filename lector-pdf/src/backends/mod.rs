//! PDF reading backend implementations

pub mod legacy;
pub mod structured;

use crate::error::ExtractError;

pub use legacy::PdfExtractBackend;
pub use structured::LopdfBackend;

/// Per-page text produced by one backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSet {
    /// One entry per page, in document order. Pages that failed extraction
    /// contribute an empty string.
    pub texts: Vec<String>,
    /// Number of pages that raised an extraction error and were skipped.
    pub skipped: usize,
}

/// Trait for PDF reading backends
pub trait PdfBackend: Send + Sync {
    /// Get backend name
    fn name(&self) -> &'static str;

    /// Parse the document and extract text page by page.
    ///
    /// A structural failure (corrupt, encrypted, unsupported format) is an
    /// error; a failure confined to a single page is not.
    fn extract_pages(&self, data: &[u8]) -> Result<PageSet, ExtractError>;
}
