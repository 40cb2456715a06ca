//! Fixture generators
//!
//! Each generator renders one business document with randomized field
//! values and writes it into the output directory under a name that encodes
//! its kind and an ordinal or date key. Generators return the filename on
//! success; [`attempt`] turns a failure into a printed line and `None` so a
//! batch can carry on.
//!
//! - [`baseline`]: invoices, contracts, reports, manuals, receipts
//! - [`extended`]: large documents, protected documents, forms, financial
//!   statements, presentations, legal documents
//! - [`dated`]: monthly, weekly, quarterly and annual series

pub mod baseline;
pub mod dated;
pub mod extended;

pub use dated::AnnualDocumentType;

use crate::error::Result;
use crate::layout::DocumentBuilder;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Every kind of fixture the generators produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    Invoice,
    Contract,
    Report,
    Manual,
    Receipt,
    LargeDocument,
    ProtectedDocument,
    Form,
    FinancialStatement,
    Presentation,
    LegalDocument,
    MonthlyReport,
    WeeklyStatus,
    QuarterlyReview,
    AnnualDocument,
}

impl FixtureKind {
    /// Name used in progress and error lines
    pub fn label(&self) -> &'static str {
        match self {
            FixtureKind::Invoice => "invoice",
            FixtureKind::Contract => "contract",
            FixtureKind::Report => "report",
            FixtureKind::Manual => "manual",
            FixtureKind::Receipt => "receipt",
            FixtureKind::LargeDocument => "large document",
            FixtureKind::ProtectedDocument => "protected document",
            FixtureKind::Form => "form",
            FixtureKind::FinancialStatement => "financial statement",
            FixtureKind::Presentation => "presentation",
            FixtureKind::LegalDocument => "legal document",
            FixtureKind::MonthlyReport => "monthly report",
            FixtureKind::WeeklyStatus => "weekly report",
            FixtureKind::QuarterlyReview => "quarterly review",
            FixtureKind::AnnualDocument => "annual document",
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders fixtures into one output directory.
///
/// The reference time drives every "days ago" computation and defaults to
/// the local wall clock; tests pin it with [`FixtureGenerator::at`].
pub struct FixtureGenerator<R = ThreadRng> {
    output_dir: PathBuf,
    now: NaiveDateTime,
    rng: R,
}

impl FixtureGenerator<ThreadRng> {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_rng(output_dir, rand::thread_rng())
    }
}

impl<R: Rng> FixtureGenerator<R> {
    pub fn with_rng(output_dir: impl Into<PathBuf>, rng: R) -> Self {
        Self {
            output_dir: output_dir.into(),
            now: Local::now().naive_local(),
            rng,
        }
    }

    /// Pins the reference time.
    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn finish(&self, doc: DocumentBuilder, filename: String) -> Result<String> {
        let path = self.output_dir.join(&filename);
        let pages = doc.page_count();
        doc.save(&path)?;
        tracing::debug!(file = %filename, pages, "fixture written");
        Ok(filename)
    }
}

/// Converts one generator outcome into the batch's view of it.
///
/// Failures are reported on `out` as `Error generating <kind> <key>: <error>`
/// and yield `Ok(None)`. Only a failed write to `out` is an error.
pub fn attempt<W: Write + ?Sized>(
    out: &mut W,
    kind: FixtureKind,
    key: impl fmt::Display,
    outcome: Result<String>,
) -> io::Result<Option<String>> {
    match outcome {
        Ok(filename) => Ok(Some(filename)),
        Err(error) => {
            tracing::error!(kind = %kind, key = %key, error = %error, "fixture generation failed");
            writeln!(out, "Error generating {kind} {key}: {error}")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attempt_passes_filename_through() {
        let mut out = Vec::new();
        let result = attempt(
            &mut out,
            FixtureKind::Invoice,
            1,
            Ok("invoice_0001.pdf".to_string()),
        )
        .unwrap();
        assert_eq!(result.as_deref(), Some("invoice_0001.pdf"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_attempt_reports_failure_with_key() {
        let mut out = Vec::new();
        let result = attempt(
            &mut out,
            FixtureKind::Manual,
            2,
            Err(FixtureError::Layout("boom".to_string())),
        )
        .unwrap();
        assert_eq!(result, None);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error generating manual 2: Layout error: boom\n"
        );
    }

    /// Sink that rejects every write.
    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_attempt_propagates_failed_error_line() {
        let result = attempt(
            &mut ClosedSink,
            FixtureKind::Receipt,
            4,
            Err(FixtureError::Layout("boom".to_string())),
        );
        let error = result.unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_attempt_success_does_not_touch_sink() {
        let result = attempt(
            &mut ClosedSink,
            FixtureKind::Receipt,
            4,
            Ok("receipt_000004.pdf".to_string()),
        );
        assert_eq!(result.unwrap().as_deref(), Some("receipt_000004.pdf"));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(FixtureKind::LargeDocument.to_string(), "large document");
        assert_eq!(FixtureKind::WeeklyStatus.label(), "weekly report");
    }
}
