//! # mock_pdfs
//!
//! Synthetic business PDFs for exercising document-management software.
//!
//! The crate renders invoices, contracts, reports, forms, financial
//! statements, presentations, legal documents and date-stamped report series
//! with [`oxidize_pdf`], writes them into a shared fixture directory and
//! summarizes whatever that directory currently holds.
//!
//! Document *structure* is fixed per kind; field *values* (amounts, company
//! names, statuses, dates within a look-back window) are drawn at random on
//! every run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mock_pdfs::{batch, output, FixtureGenerator, GenerationPlan};
//!
//! # fn main() -> std::io::Result<()> {
//! let dir = output::ensure_output_dir(output::default_output_dir())?;
//! let mut generator = FixtureGenerator::new(&dir);
//! let report = batch::run_baseline(&mut generator, &GenerationPlan::default(), &mut std::io::stdout())?;
//! assert!(report.produced() <= report.attempted() as usize);
//!
//! mock_pdfs::summary::summarize(&dir, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Filenames
//!
//! Every fixture name starts with a category prefix followed by a
//! zero-padded ordinal or a date token, e.g. `invoice_0001.pdf`,
//! `report_0002_Q1_2024.pdf`, `monthly_report_March_2024.pdf`. The
//! [`summary`] module classifies files by those prefixes.

pub mod batch;
pub mod content;
pub mod error;
pub mod generators;
pub mod layout;
pub mod output;
pub mod summary;

pub use batch::{run_baseline, run_dated, run_extended, BatchReport, GenerationPlan, KindTally};
pub use content::Quarter;
pub use error::{FixtureError, Result};
pub use generators::{attempt, AnnualDocumentType, FixtureGenerator, FixtureKind};
pub use summary::{Category, SizeStatistics, SummaryOutcome, SummaryReport};

/// Current version of mock-pdfs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
