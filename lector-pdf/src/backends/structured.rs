//! Primary backend: lopdf object-model parsing with per-page extraction

use crate::backends::{PageSet, PdfBackend};
use crate::error::ExtractError;
use lopdf::Document;
use tracing::debug;

/// Primary PDF backend built on lopdf.
///
/// Parses the full object model, then walks the page tree and extracts each
/// page independently. A page whose content stream cannot be decoded is
/// skipped and counted rather than failing the document.
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<PageSet, ExtractError> {
        let doc = Document::load_mem(data)
            .map_err(|e| ExtractError::Unreadable(format!("lopdf: {}", e)))?;

        let mut texts = Vec::new();
        let mut skipped = 0;
        for (page_number, _) in doc.get_pages() {
            match doc.extract_text(&[page_number]) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    debug!(page = page_number, error = %e, "skipping unreadable page");
                    texts.push(String::new());
                    skipped += 1;
                }
            }
        }

        Ok(PageSet { texts, skipped })
    }
}
