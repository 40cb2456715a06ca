//! Integration tests for the batch drivers and the summary reporter
//!
//! Tests the full fixture workflow including:
//! - Filename patterns per category
//! - Printed totals versus produced files
//! - Overwrite behavior on re-runs
//! - Skip-and-continue on failed fixtures
//! - Classification of a generated directory

use chrono::{NaiveDate, NaiveDateTime};
use mock_pdfs::summary::{self, SummaryOutcome};
use mock_pdfs::{
    run_baseline, run_dated, run_extended, Category, FixtureGenerator, FixtureKind,
    GenerationPlan,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap()
}

fn generator(dir: &Path, seed: u64) -> FixtureGenerator<StdRng> {
    FixtureGenerator::with_rng(dir, StdRng::seed_from_u64(seed)).at(reference_time())
}

fn pdf_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".pdf"))
        .collect()
}

fn assert_valid_pdf(path: &Path) {
    let bytes = fs::read(path).unwrap();
    assert!(bytes.len() > 100, "{} is too small", path.display());
    assert!(bytes.starts_with(b"%PDF-"), "{} lacks a PDF header", path.display());
}

#[test]
fn test_five_invoices_are_reported_as_five() {
    let dir = tempdir().unwrap();
    let mut gen = generator(dir.path(), 1);
    let plan = GenerationPlan {
        invoices: 5,
        ..GenerationPlan::empty()
    };

    let mut out = Vec::new();
    let report = run_baseline(&mut gen, &plan, &mut out).unwrap();

    let expected: Vec<String> = (1..=5).map(|i| format!("invoice_{i:04}.pdf")).collect();
    assert_eq!(report.generated(), expected);
    for name in &expected {
        assert_valid_pdf(&dir.path().join(name));
    }

    let summary = match summary::build(dir.path()).unwrap() {
        SummaryOutcome::Report(report) => report,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(summary.count(Category::Invoices), 5);
    assert_eq!(summary.files.len(), 5);
}

#[test]
fn test_baseline_prints_progress_and_total() {
    let dir = tempdir().unwrap();
    let mut gen = generator(dir.path(), 2);
    let mut out = Vec::new();
    let report = run_baseline(&mut gen, &GenerationPlan::default(), &mut out).unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(report.attempted(), 20);
    assert_eq!(report.produced(), 20);
    assert_eq!(printed.matches("Generated: ").count(), 20);
    assert!(printed.starts_with(&format!(
        "Creating mock PDFs in: {}\n",
        dir.path().display()
    )));
    assert!(printed.contains("\nTotal files generated: 20\n"));
    assert!(printed.contains(&format!("Output directory: {}\n", dir.path().display())));

    let names = pdf_names(dir.path());
    assert_eq!(names.len(), 20);
    assert!(names.contains("contract_SA_0003.pdf"));
    assert!(names.contains("manual_0002.pdf"));
    assert!(names.contains("receipt_000007.pdf"));
    assert_eq!(names.iter().filter(|n| n.starts_with("report_0")).count(), 3);
}

#[test]
fn test_extended_batch_file_set() {
    let dir = tempdir().unwrap();
    let mut gen = generator(dir.path(), 3);
    let mut out = Vec::new();
    let report = run_extended(&mut gen, &GenerationPlan::default(), &mut out).unwrap();

    assert_eq!(report.produced(), 17);
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Total additional files generated: 17"));

    let names = pdf_names(dir.path());
    for expected in [
        "large_document_001.pdf",
        "large_document_002.pdf",
        "confidential_protected_003.pdf",
        "application_form_001.pdf",
        "presentation_002.pdf",
        "nda_0003.pdf",
    ] {
        assert!(names.contains(expected), "missing {expected}");
    }
    assert_eq!(
        names.iter().filter(|n| n.starts_with("financial_statement_")).count(),
        4
    );
}

#[test]
fn test_dated_batch_series() {
    let dir = tempdir().unwrap();
    let mut gen = generator(dir.path(), 4);
    let mut out = Vec::new();
    let report = run_dated(&mut gen, &GenerationPlan::default(), &mut out).unwrap();

    assert_eq!(report.tally(FixtureKind::MonthlyReport).unwrap().produced.len(), 12);
    assert_eq!(report.tally(FixtureKind::WeeklyStatus).unwrap().produced.len(), 8);
    assert_eq!(report.tally(FixtureKind::QuarterlyReview).unwrap().produced.len(), 8);
    assert_eq!(report.tally(FixtureKind::AnnualDocument).unwrap().produced.len(), 9);
    assert_eq!(report.produced(), 37);

    let names = pdf_names(dir.path());
    // No 30-day step from 2024-03-15 lands twice in the same month.
    assert_eq!(names.len(), 37);
    assert!(names.contains("monthly_report_March_2024.pdf"));
    assert!(names.contains("monthly_report_April_2023.pdf"));
    assert!(names.contains("weekly_status_Week_2024_01_26.pdf"));
    assert!(names.contains("quarterly_review_Q1_2023.pdf"));
    assert!(names.contains("quarterly_review_Q4_2024.pdf"));

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Total dated files generated: 37"));
    assert!(printed.contains("- Monthly reports: 12\n"));
    assert!(printed.contains("- Annual documents: 9\n"));
}

#[test]
fn test_monthly_steps_can_share_a_calendar_month() {
    let dir = tempdir().unwrap();
    let end_of_march = NaiveDate::from_ymd_opt(2024, 3, 31)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap();
    let mut gen =
        FixtureGenerator::with_rng(dir.path(), StdRng::seed_from_u64(8)).at(end_of_march);
    let plan = GenerationPlan {
        monthly_reports: 2,
        ..GenerationPlan::empty()
    };
    let mut out = Vec::new();
    let report = run_dated(&mut gen, &plan, &mut out).unwrap();

    // 2024-03-31 and 2024-03-01 both fall in March; the second write replaces the first.
    assert_eq!(
        report.generated(),
        vec!["monthly_report_March_2024.pdf", "monthly_report_March_2024.pdf"]
    );
    assert_eq!(report.produced(), 2);
    assert_eq!(
        pdf_names(dir.path()),
        BTreeSet::from(["monthly_report_March_2024.pdf".to_string()])
    );

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Total dated files generated: 2\n"));
    assert!(printed.contains("- Monthly reports: 2\n"));
}

#[test]
fn test_annual_documents_cover_three_years_and_types() {
    let dir = tempdir().unwrap();
    let mut gen = generator(dir.path(), 5);
    let plan = GenerationPlan {
        annual_years: 3,
        ..GenerationPlan::empty()
    };
    let mut out = Vec::new();
    run_dated(&mut gen, &plan, &mut out).unwrap();

    let expected: BTreeSet<String> = (2022..=2024)
        .flat_map(|year| {
            ["annual_report", "tax_summary", "compliance_review"]
                .into_iter()
                .map(move |kind| format!("{kind}_{year}.pdf"))
        })
        .collect();
    assert_eq!(pdf_names(dir.path()), expected);
}

#[test]
fn test_rerun_overwrites_instead_of_duplicating() {
    let dir = tempdir().unwrap();
    let plan = GenerationPlan {
        invoices: 3,
        receipts: 2,
        ..GenerationPlan::empty()
    };

    let mut out = Vec::new();
    run_baseline(&mut generator(dir.path(), 10), &plan, &mut out).unwrap();
    let first = pdf_names(dir.path());
    run_baseline(&mut generator(dir.path(), 11), &plan, &mut out).unwrap();
    let second = pdf_names(dir.path());

    assert_eq!(first, second);
    assert_eq!(second.len(), 5);
}

#[test]
fn test_failed_fixtures_are_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    // A plain file where the output directory should be makes every save fail.
    let blocked = dir.path().join("not_a_directory");
    fs::write(&blocked, b"occupied").unwrap();

    let mut gen = generator(&blocked, 6);
    let plan = GenerationPlan {
        invoices: 2,
        manuals: 1,
        ..GenerationPlan::empty()
    };
    let mut out = Vec::new();
    let report = run_baseline(&mut gen, &plan, &mut out).unwrap();

    assert_eq!(report.attempted(), 3);
    assert_eq!(report.produced(), 0);
    assert_eq!(report.failed(), 3);

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Error generating invoice 1: "));
    assert!(printed.contains("Error generating invoice 2: "));
    assert!(printed.contains("Error generating manual 1: "));
    assert!(printed.contains("Total files generated: 0\n"));
}

#[test]
fn test_full_corpus_classifies_every_file() {
    let dir = tempdir().unwrap();
    let mut gen = generator(dir.path(), 7);
    let plan = GenerationPlan::default();
    let mut out = Vec::new();
    run_baseline(&mut gen, &plan, &mut out).unwrap();
    run_extended(&mut gen, &plan, &mut out).unwrap();
    run_dated(&mut gen, &plan, &mut out).unwrap();

    let summary = match summary::build(dir.path()).unwrap() {
        SummaryOutcome::Report(report) => report,
        other => panic!("unexpected outcome: {other:?}"),
    };

    assert_eq!(summary.files.len(), 74);
    assert_eq!(summary.unclassified().count(), 0);
    assert_eq!(summary.non_empty_groups().count(), Category::ALL.len());
    assert_eq!(summary.count(Category::Reports), 3);
    assert_eq!(summary.count(Category::MonthlyReports), 12);
    assert_eq!(summary.count(Category::AnnualDocuments), 9);

    let grouped: usize = summary.groups.iter().map(|g| g.files.len()).sum();
    assert_eq!(grouped, summary.files.len());

    let sizes: Vec<u64> = summary.files.iter().map(|f| f.size).collect();
    assert_eq!(summary.statistics.total, sizes.iter().sum::<u64>());
    assert_eq!(summary.statistics.largest, *sizes.iter().max().unwrap());
    assert_eq!(summary.statistics.smallest, *sizes.iter().min().unwrap());
}

#[test]
fn test_summary_of_empty_directory() {
    let dir = tempdir().unwrap();
    let mut out = Vec::new();
    let outcome = summary::summarize(dir.path(), &mut out).unwrap();

    let report = match outcome {
        SummaryOutcome::Report(report) => report,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(report.statistics.average, 0.0);

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Total PDFs: 0\n"));
    assert!(printed.contains("Average Size: 0.0KB"));
}
