use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),

    #[error("Layout error: {0}")]
    Layout(String),
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_layout_error_display() {
        let error = FixtureError::Layout("cell taller than page".to_string());
        assert_eq!(error.to_string(), "Layout error: cell taller than page");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "missing directory");
        let error: FixtureError = io_error.into();
        assert!(matches!(error, FixtureError::Io(_)));
        assert!(error.to_string().contains("missing directory"));
    }

    #[test]
    fn test_pdf_error_conversion() {
        let pdf_error = oxidize_pdf::PdfError::InvalidStructure("bad xref".to_string());
        let error: FixtureError = pdf_error.into();
        assert!(matches!(error, FixtureError::Pdf(_)));
        assert_eq!(error.to_string(), "PDF error: Invalid PDF structure: bad xref");
    }
}
