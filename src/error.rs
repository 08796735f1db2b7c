use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a PDF backend while opening or reading a document.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text from page {page}: {message}")]
    Page { page: u32, message: String },
    #[error("failed to write extracted text: {0}")]
    Output(std::io::Error),
}

/// The only error kind surfaced to the user. Missing files, permission
/// problems and corrupt documents all end up here.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Error processing PDF file at {}: {cause}", path.display())]
    Failed { path: PathBuf, cause: BackendError },
}

impl ExtractError {
    pub fn failed(path: impl Into<PathBuf>, cause: BackendError) -> Self {
        ExtractError::Failed {
            path: path.into(),
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_starts_with_path_prefix() {
        let err = ExtractError::failed("missing.pdf", BackendError::Open("not found".into()));
        assert_eq!(
            err.to_string(),
            "Error processing PDF file at missing.pdf: failed to open PDF: not found"
        );
    }

    #[test]
    fn page_failure_names_the_page() {
        let err = ExtractError::failed(
            "doc.pdf",
            BackendError::Page {
                page: 3,
                message: "bad stream".into(),
            },
        );
        assert!(err.to_string().ends_with("page 3: bad stream"));
    }
}
