use std::io::Write;
use std::path::Path;

use log::{debug, trace};

use crate::backend::{PdfBackend, PdfDocument};
use crate::error::{BackendError, ExtractError};

/// Open `path` and concatenate the text of every page, each followed by a
/// single newline. All pages are visited in document order; the first
/// failure aborts the whole extraction and no partial text is returned.
///
/// The document handle lives only inside this function, so it is released
/// on every path once `open` has succeeded.
pub fn extract_text<B: PdfBackend>(backend: &B, path: &Path) -> Result<String, ExtractError> {
    let document = backend
        .open(path)
        .map_err(|cause| ExtractError::failed(path, cause))?;

    let mut text = String::new();
    for page in document.page_numbers() {
        let page_text = document
            .page_text(page)
            .map_err(|cause| ExtractError::failed(path, cause))?;
        trace!("page {page}: {} bytes", page_text.len());
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(text)
}

/// Extract `path` and print the text followed by one trailing newline.
pub fn print_text<B: PdfBackend, W: Write>(
    backend: &B,
    path: &Path,
    out: &mut W,
) -> Result<(), ExtractError> {
    let text = extract_text(backend, path).map_err(|err| {
        debug!("{err}");
        err
    })?;
    writeln!(out, "{text}")
        .and_then(|()| out.flush())
        .map_err(|e| ExtractError::failed(path, BackendError::Output(e)))
}
