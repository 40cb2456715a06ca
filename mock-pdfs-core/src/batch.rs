//! Batch drivers
//!
//! A driver walks each fixture category a fixed number of times, calls the
//! matching generator once per index, keeps the filenames that were
//! produced and prints one progress line per success. A failed fixture is
//! reported and skipped; nothing is retried or rolled back.

use crate::content::Quarter;
use crate::generators::{attempt, AnnualDocumentType, FixtureGenerator, FixtureKind};
use crate::error::Result;
use rand::Rng;
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

/// How many fixtures of each category a run asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub invoices: u32,
    pub contracts: u32,
    pub reports: u32,
    pub manuals: u32,
    pub receipts: u32,
    pub large_documents: u32,
    pub protected_documents: u32,
    pub forms: u32,
    pub financial_statements: u32,
    pub presentations: u32,
    pub legal_documents: u32,
    /// Monthly reports, one per 30-day step back from today
    pub monthly_reports: u32,
    /// Weekly status reports, one per week back from today
    pub weekly_reports: u32,
    /// Years of quarterly reviews, ending with the current year
    pub quarterly_years: u32,
    /// Years of annual documents, ending with the current year
    pub annual_years: u32,
}

impl Default for GenerationPlan {
    fn default() -> Self {
        Self {
            invoices: 5,
            contracts: 3,
            reports: 3,
            manuals: 2,
            receipts: 7,
            large_documents: 2,
            protected_documents: 3,
            forms: 3,
            financial_statements: 4,
            presentations: 2,
            legal_documents: 3,
            monthly_reports: 12,
            weekly_reports: 8,
            quarterly_years: 2,
            annual_years: 3,
        }
    }
}

impl GenerationPlan {
    /// Multiplies every index-numbered category by `factor`.
    ///
    /// Date-keyed series are left alone: their keys are calendar dates and
    /// more iterations would only reach further into the past.
    pub fn scaled(mut self, factor: u32) -> Self {
        for count in [
            &mut self.invoices,
            &mut self.contracts,
            &mut self.reports,
            &mut self.manuals,
            &mut self.receipts,
            &mut self.large_documents,
            &mut self.protected_documents,
            &mut self.forms,
            &mut self.financial_statements,
            &mut self.presentations,
            &mut self.legal_documents,
        ] {
            *count = count.saturating_mul(factor);
        }
        self
    }

    /// A plan that asks for nothing; handy as a base for targeted runs.
    pub fn empty() -> Self {
        Self {
            invoices: 0,
            contracts: 0,
            reports: 0,
            manuals: 0,
            receipts: 0,
            large_documents: 0,
            protected_documents: 0,
            forms: 0,
            financial_statements: 0,
            presentations: 0,
            legal_documents: 0,
            monthly_reports: 0,
            weekly_reports: 0,
            quarterly_years: 0,
            annual_years: 0,
        }
    }
}

/// Outcome of one category inside a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTally {
    pub kind: FixtureKind,
    pub attempted: u32,
    pub produced: Vec<String>,
}

impl KindTally {
    pub fn failed(&self) -> u32 {
        self.attempted
            .saturating_sub(self.produced.len() as u32)
    }
}

/// Result of a batch run, categories in the order they were generated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    tallies: Vec<KindTally>,
}

impl BatchReport {
    /// Every produced filename, in generation order.
    pub fn generated(&self) -> Vec<&str> {
        self.tallies
            .iter()
            .flat_map(|t| t.produced.iter().map(String::as_str))
            .collect()
    }

    pub fn attempted(&self) -> u32 {
        self.tallies.iter().map(|t| t.attempted).sum()
    }

    pub fn produced(&self) -> usize {
        self.tallies.iter().map(|t| t.produced.len()).sum()
    }

    pub fn failed(&self) -> u32 {
        self.tallies.iter().map(KindTally::failed).sum()
    }

    pub fn tally(&self, kind: FixtureKind) -> Option<&KindTally> {
        self.tallies.iter().find(|t| t.kind == kind)
    }

    pub fn tallies(&self) -> &[KindTally] {
        &self.tallies
    }

    /// Appends another report's categories after this one's.
    pub fn merge(&mut self, other: BatchReport) {
        self.tallies.extend(other.tallies);
    }

    fn run_series<W, K, F>(
        &mut self,
        out: &mut W,
        kind: FixtureKind,
        keys: impl IntoIterator<Item = K>,
        mut generate: F,
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        K: fmt::Display + Copy,
        F: FnMut(K) -> Result<String>,
    {
        let mut tally = KindTally {
            kind,
            attempted: 0,
            produced: Vec::new(),
        };
        for key in keys {
            tally.attempted += 1;
            if let Some(filename) = attempt(out, kind, key, generate(key))? {
                writeln!(out, "Generated: {filename}")?;
                tally.produced.push(filename);
            }
        }
        self.tallies.push(tally);
        Ok(())
    }
}

/// Error-line key for a quarterly review
#[derive(Debug, Clone, Copy)]
struct Period(Quarter, i32);

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// Error-line key for an annual document
#[derive(Debug, Clone, Copy)]
struct FiscalYear(AnnualDocumentType, i32);

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.0, self.1)
    }
}

/// The trailing `count` years, oldest first, ending with `current`.
fn trailing_years(current: i32, count: u32) -> impl Iterator<Item = i32> {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    (current.saturating_sub(count) + 1)..=current
}

/// Invoices, contracts, reports, manuals and receipts.
pub fn run_baseline<R: Rng, W: Write + ?Sized>(
    generator: &mut FixtureGenerator<R>,
    plan: &GenerationPlan,
    out: &mut W,
) -> io::Result<BatchReport> {
    let started = Instant::now();
    let dir = generator.output_dir().display().to_string();
    writeln!(out, "Creating mock PDFs in: {dir}")?;

    let mut report = BatchReport::default();
    report.run_series(out, FixtureKind::Invoice, 1..=plan.invoices, |i| {
        generator.invoice(i)
    })?;
    report.run_series(out, FixtureKind::Contract, 1..=plan.contracts, |i| {
        generator.contract(i)
    })?;
    report.run_series(out, FixtureKind::Report, 1..=plan.reports, |i| {
        generator.report(i)
    })?;
    report.run_series(out, FixtureKind::Manual, 1..=plan.manuals, |i| {
        generator.manual(i)
    })?;
    report.run_series(out, FixtureKind::Receipt, 1..=plan.receipts, |i| {
        generator.receipt(i)
    })?;

    writeln!(out)?;
    writeln!(out, "Total files generated: {}", report.produced())?;
    writeln!(out, "Output directory: {dir}")?;
    tracing::info!(
        produced = report.produced(),
        attempted = report.attempted(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "baseline batch finished"
    );
    Ok(report)
}

/// Large documents, protected documents, forms, financial statements,
/// presentations and legal documents.
pub fn run_extended<R: Rng, W: Write + ?Sized>(
    generator: &mut FixtureGenerator<R>,
    plan: &GenerationPlan,
    out: &mut W,
) -> io::Result<BatchReport> {
    let started = Instant::now();
    let dir = generator.output_dir().display().to_string();
    writeln!(out, "Creating additional mock PDFs in: {dir}")?;

    let mut report = BatchReport::default();
    report.run_series(
        out,
        FixtureKind::LargeDocument,
        1..=plan.large_documents,
        |i| generator.large_document(i),
    )?;
    report.run_series(
        out,
        FixtureKind::ProtectedDocument,
        1..=plan.protected_documents,
        |i| generator.protected_document(i),
    )?;
    report.run_series(out, FixtureKind::Form, 1..=plan.forms, |i| {
        generator.form(i)
    })?;
    report.run_series(
        out,
        FixtureKind::FinancialStatement,
        1..=plan.financial_statements,
        |i| generator.financial_statement(i),
    )?;
    report.run_series(
        out,
        FixtureKind::Presentation,
        1..=plan.presentations,
        |i| generator.presentation(i),
    )?;
    report.run_series(
        out,
        FixtureKind::LegalDocument,
        1..=plan.legal_documents,
        |i| generator.legal_document(i),
    )?;

    writeln!(out)?;
    writeln!(out, "Total additional files generated: {}", report.produced())?;
    writeln!(out, "Output directory: {dir}")?;
    tracing::info!(
        produced = report.produced(),
        attempted = report.attempted(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "extended batch finished"
    );
    Ok(report)
}

/// Monthly, weekly, quarterly and annual series anchored on the
/// generator's reference date.
pub fn run_dated<R: Rng, W: Write + ?Sized>(
    generator: &mut FixtureGenerator<R>,
    plan: &GenerationPlan,
    out: &mut W,
) -> io::Result<BatchReport> {
    let started = Instant::now();
    let dir = generator.output_dir().display().to_string();
    let current_year = generator.current_year();
    writeln!(out, "Creating dated mock PDFs in: {dir}")?;

    let mut report = BatchReport::default();

    writeln!(out, "\nGenerating monthly reports...")?;
    report.run_series(
        out,
        FixtureKind::MonthlyReport,
        0..plan.monthly_reports,
        |i| generator.monthly_report(i),
    )?;

    writeln!(out, "\nGenerating weekly status reports...")?;
    report.run_series(
        out,
        FixtureKind::WeeklyStatus,
        0..plan.weekly_reports,
        |i| generator.weekly_status(i),
    )?;

    writeln!(out, "\nGenerating quarterly reviews...")?;
    let periods: Vec<Period> = trailing_years(current_year, plan.quarterly_years)
        .flat_map(|year| Quarter::ALL.into_iter().map(move |q| Period(q, year)))
        .collect();
    report.run_series(out, FixtureKind::QuarterlyReview, periods, |p| {
        generator.quarterly_review(p.0, p.1)
    })?;

    writeln!(out, "\nGenerating annual documents...")?;
    let fiscal_years: Vec<FiscalYear> = trailing_years(current_year, plan.annual_years)
        .flat_map(|year| {
            AnnualDocumentType::ALL
                .into_iter()
                .map(move |kind| FiscalYear(kind, year))
        })
        .collect();
    report.run_series(out, FixtureKind::AnnualDocument, fiscal_years, |y| {
        generator.annual_document(y.0, y.1)
    })?;

    writeln!(out)?;
    writeln!(out, "Total dated files generated: {}", report.produced())?;
    writeln!(out, "Output directory: {dir}")?;

    writeln!(out, "\nSummary by document type:")?;
    for (label, kind) in [
        ("Monthly reports", FixtureKind::MonthlyReport),
        ("Weekly status reports", FixtureKind::WeeklyStatus),
        ("Quarterly reviews", FixtureKind::QuarterlyReview),
        ("Annual documents", FixtureKind::AnnualDocument),
    ] {
        let produced = report.tally(kind).map_or(0, |t| t.produced.len());
        writeln!(out, "- {label}: {produced}")?;
    }

    tracing::info!(
        produced = report.produced(),
        attempted = report.attempted(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "dated batch finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_plan_counts() {
        let plan = GenerationPlan::default();
        assert_eq!(plan.invoices, 5);
        assert_eq!(plan.receipts, 7);
        assert_eq!(plan.financial_statements, 4);
        assert_eq!(plan.monthly_reports, 12);
        assert_eq!(plan.weekly_reports, 8);
    }

    #[test]
    fn test_scaled_plan_leaves_date_series() {
        let plan = GenerationPlan::default().scaled(3);
        assert_eq!(plan.invoices, 15);
        assert_eq!(plan.legal_documents, 9);
        assert_eq!(plan.monthly_reports, 12);
        assert_eq!(plan.annual_years, 3);
    }

    #[test]
    fn test_trailing_years() {
        assert_eq!(trailing_years(2025, 3).collect::<Vec<_>>(), vec![2023, 2024, 2025]);
        assert_eq!(trailing_years(2025, 0).count(), 0);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Period(Quarter::Q4, 2024).to_string(), "Q4 2024");
        assert_eq!(
            FiscalYear(AnnualDocumentType::TaxSummary, 2023).to_string(),
            "tax_summary for 2023"
        );
    }

    #[test]
    fn test_report_counts_failures() {
        let mut report = BatchReport::default();
        let mut out = Vec::new();
        report
            .run_series(&mut out, FixtureKind::Manual, 1..=3u32, |i| {
                if i == 2 {
                    Err(crate::error::FixtureError::Layout("broken".to_string()))
                } else {
                    Ok(format!("manual_{i:04}.pdf"))
                }
            })
            .unwrap();

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.produced(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.generated(), vec!["manual_0001.pdf", "manual_0003.pdf"]);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "Generated: manual_0001.pdf\n\
             Error generating manual 2: Layout error: broken\n\
             Generated: manual_0003.pdf\n"
        );
    }

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
    fn test_closed_sink_stops_series_on_error_line() {
        let mut report = BatchReport::default();
        let mut calls = 0;
        let result = report.run_series(&mut ClosedSink, FixtureKind::Form, 1..=3u32, |_| {
            calls += 1;
            Err(crate::error::FixtureError::Layout("broken".to_string()))
        });

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(calls, 1);
    }
}
