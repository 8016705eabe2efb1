//! Extraction pipeline: backend selection and page aggregation

use crate::backends::{LopdfBackend, PdfBackend, PdfExtractBackend};
use crate::error::ExtractError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Result of a successful extraction.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Per-page text, in document order. Skipped pages hold an empty string.
    pub pages: Vec<String>,
    /// Pages that raised an extraction error and contributed nothing.
    pub pages_skipped: usize,
    /// Name of the backend that produced this result.
    pub backend: &'static str,
}

impl Extraction {
    /// Page texts joined in document order with a single space.
    ///
    /// No trimming or normalization beyond what the backend produced; the
    /// result may be empty or whitespace-only.
    pub fn joined_text(&self) -> String {
        self.pages.join(" ")
    }

    /// True when no page yielded any usable text.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }
}

/// PDF text extractor trying a fixed sequence of backends.
pub struct PdfExtractor {
    backends: Vec<Box<dyn PdfBackend>>,
}

impl PdfExtractor {
    /// Create an extractor with the default backend order:
    /// lopdf first, pdf-extract as fallback.
    pub fn new() -> Self {
        Self::with_backends(vec![Box::new(LopdfBackend), Box::new(PdfExtractBackend)])
    }

    /// Create an extractor with an explicit backend sequence.
    pub fn with_backends(backends: Vec<Box<dyn PdfBackend>>) -> Self {
        Self { backends }
    }

    /// Extract the text of every page of the PDF at `path`.
    ///
    /// Backends are tried in order; the first one that parses the document
    /// wins. Fails with [`ExtractError::NotFound`] when `path` is not an
    /// existing regular file, and [`ExtractError::Unreadable`] when every
    /// backend rejects the document.
    pub fn extract(&self, path: &Path) -> Result<Extraction, ExtractError> {
        if !path.is_file() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;

        let mut last_error = None;
        for backend in &self.backends {
            match backend.extract_pages(&data) {
                Ok(pages) => {
                    debug!(
                        backend = backend.name(),
                        pages = pages.texts.len(),
                        skipped = pages.skipped,
                        "extracted PDF text"
                    );
                    return Ok(Extraction {
                        pages: pages.texts,
                        pages_skipped: pages.skipped,
                        backend: backend.name(),
                    });
                }
                Err(e) => {
                    warn!(backend = backend.name(), error = %e, "PDF backend failed");
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(ExtractError::Unreadable(msg)) => ExtractError::Unreadable(msg),
            Some(other) => other,
            None => ExtractError::Unreadable("no PDF backend configured".to_string()),
        })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::PageSet;

    struct FixedBackend {
        name: &'static str,
        result: Result<PageSet, String>,
    }

    impl PdfBackend for FixedBackend {
        fn name(&self) -> &'static str {
            self.name
        }

        fn extract_pages(&self, _data: &[u8]) -> Result<PageSet, ExtractError> {
            self.result
                .clone()
                .map_err(ExtractError::Unreadable)
        }
    }

    fn dummy_file() -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"%PDF-1.5 stub").unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_found() {
        let extractor = PdfExtractor::new();
        let err = extractor
            .extract(Path::new("/nonexistent/missing.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::NotFound(_)));
    }

    #[test]
    fn first_successful_backend_wins() {
        let file = dummy_file();
        let extractor = PdfExtractor::with_backends(vec![
            Box::new(FixedBackend {
                name: "first",
                result: Ok(PageSet {
                    texts: vec!["Hello".to_string(), "World".to_string()],
                    skipped: 0,
                }),
            }),
            Box::new(FixedBackend {
                name: "second",
                result: Ok(PageSet {
                    texts: vec!["unused".to_string()],
                    skipped: 0,
                }),
            }),
        ]);

        let extraction = extractor.extract(file.path()).unwrap();
        assert_eq!(extraction.backend, "first");
        assert_eq!(extraction.joined_text(), "Hello World");
    }

    #[test]
    fn fallback_runs_when_primary_fails() {
        let file = dummy_file();
        let extractor = PdfExtractor::with_backends(vec![
            Box::new(FixedBackend {
                name: "first",
                result: Err("bad xref".to_string()),
            }),
            Box::new(FixedBackend {
                name: "second",
                result: Ok(PageSet {
                    texts: vec!["recovered".to_string()],
                    skipped: 0,
                }),
            }),
        ]);

        let extraction = extractor.extract(file.path()).unwrap();
        assert_eq!(extraction.backend, "second");
        assert_eq!(extraction.joined_text(), "recovered");
    }

    #[test]
    fn all_backends_failing_is_unreadable() {
        let file = dummy_file();
        let extractor = PdfExtractor::with_backends(vec![
            Box::new(FixedBackend {
                name: "first",
                result: Err("bad xref".to_string()),
            }),
            Box::new(FixedBackend {
                name: "second",
                result: Err("still bad".to_string()),
            }),
        ]);

        let err = extractor.extract(file.path()).unwrap_err();
        match err {
            ExtractError::Unreadable(msg) => assert!(msg.contains("still bad")),
            other => panic!("expected Unreadable, got {:?}", other),
        }
    }

    #[test]
    fn skipped_pages_are_counted_and_contribute_empty_strings() {
        let file = dummy_file();
        let extractor = PdfExtractor::with_backends(vec![Box::new(FixedBackend {
            name: "first",
            result: Ok(PageSet {
                texts: vec!["one".to_string(), String::new(), "three".to_string()],
                skipped: 1,
            }),
        })]);

        let extraction = extractor.extract(file.path()).unwrap();
        assert_eq!(extraction.pages_skipped, 1);
        assert_eq!(extraction.joined_text(), "one  three");
        assert!(!extraction.is_empty());
    }

    #[test]
    fn whitespace_only_pages_count_as_empty() {
        let extraction = Extraction {
            pages: vec!["  ".to_string(), "\n".to_string()],
            pages_skipped: 0,
            backend: "test",
        };
        assert!(extraction.is_empty());
    }
}
