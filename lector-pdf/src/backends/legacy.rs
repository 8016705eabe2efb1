//! Fallback backend: pdf-extract whole-document extraction

use crate::backends::{PageSet, PdfBackend};
use crate::error::ExtractError;

/// Fallback PDF backend built on pdf-extract.
///
/// Coarser than [`crate::backends::LopdfBackend`]: the crate extracts all
/// pages in one pass, so a mid-document failure aborts the whole call. Used
/// only when the primary backend cannot parse the document at all.
pub struct PdfExtractBackend;

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<PageSet, ExtractError> {
        let texts = pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| ExtractError::Unreadable(format!("pdf-extract: {}", e)))?;

        Ok(PageSet { texts, skipped: 0 })
    }
}
