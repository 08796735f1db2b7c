use std::path::{Path, PathBuf};

use log::debug;
use lopdf::Document;

use crate::error::BackendError;

/// Opens PDF documents. The returned handle is owned by the caller and is
/// released when dropped.
pub trait PdfBackend {
    type Document: PdfDocument;

    fn open(&self, path: &Path) -> Result<Self::Document, BackendError>;
}

/// An open document: an ordered set of pages that each yield plain text.
pub trait PdfDocument {
    /// Page numbers in document order.
    fn page_numbers(&self) -> Vec<u32>;

    fn page_text(&self, page: u32) -> Result<String, BackendError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

pub struct LopdfDocument {
    doc: Document,
    path: PathBuf,
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;

    fn open(&self, path: &Path) -> Result<LopdfDocument, BackendError> {
        let doc = Document::load(path).map_err(|e| BackendError::Open(e.to_string()))?;
        debug!(
            "opened {} ({} pages, PDF {})",
            path.display(),
            doc.get_pages().len(),
            doc.version
        );
        Ok(LopdfDocument {
            doc,
            path: path.to_path_buf(),
        })
    }
}

impl PdfDocument for LopdfDocument {
    fn page_numbers(&self) -> Vec<u32> {
        // get_pages is keyed by page number, so iteration is already in order
        self.doc.get_pages().keys().copied().collect()
    }

    fn page_text(&self, page: u32) -> Result<String, BackendError> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| BackendError::Page {
                page,
                message: e.to_string(),
            })
    }
}

impl Drop for LopdfDocument {
    fn drop(&mut self) {
        debug!("released {}", self.path.display());
    }
}
