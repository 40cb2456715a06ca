//! Date-keyed series: monthly, weekly, quarterly and annual documents
//!
//! Each fixture derives its reference date by stepping back from "now" in
//! fixed increments (30-day months, 7-day weeks) or by calendar quarter and
//! year, and encodes that date in both its title and its filename.

use super::FixtureGenerator;
use crate::content::{
    dollars, pick, sample, title_case, Quarter, ACHIEVEMENTS, COMPLIANCE_AREAS,
    COMPLIANCE_STATUSES, PROJECTS, PROJECT_STATUSES,
};
use crate::error::Result;
use crate::layout::{DocumentBuilder, Style};
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use std::fmt;

const DAYS_PER_MONTH_STEP: i64 = 30;
const FEDERAL_TAX_RATE: f64 = 0.21;

/// The three year-end document series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnualDocumentType {
    AnnualReport,
    TaxSummary,
    ComplianceReview,
}

impl AnnualDocumentType {
    pub const ALL: [AnnualDocumentType; 3] = [
        AnnualDocumentType::AnnualReport,
        AnnualDocumentType::TaxSummary,
        AnnualDocumentType::ComplianceReview,
    ];

    /// Filename prefix
    pub fn slug(&self) -> &'static str {
        match self {
            AnnualDocumentType::AnnualReport => "annual_report",
            AnnualDocumentType::TaxSummary => "tax_summary",
            AnnualDocumentType::ComplianceReview => "compliance_review",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AnnualDocumentType::AnnualReport => "ANNUAL BUSINESS REPORT",
            AnnualDocumentType::TaxSummary => "ANNUAL TAX SUMMARY",
            AnnualDocumentType::ComplianceReview => "COMPLIANCE REVIEW REPORT",
        }
    }
}

impl fmt::Display for AnnualDocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl<R: Rng> FixtureGenerator<R> {
    /// Reference date `months_back` 30-day steps before today.
    pub fn monthly_date(&self, months_back: u32) -> NaiveDate {
        self.today() - Duration::days(DAYS_PER_MONTH_STEP * i64::from(months_back))
    }

    /// Reference date `weeks_back` weeks before today.
    pub fn weekly_date(&self, weeks_back: u32) -> NaiveDate {
        self.today() - Duration::weeks(i64::from(weeks_back))
    }

    /// `monthly_report_{Month}_{Year}.pdf`
    pub fn monthly_report(&mut self, months_back: u32) -> Result<String> {
        let report_date = self.monthly_date(months_back);
        let sales: i64 = self.rng.gen_range(50_000..=200_000);
        let growth: i32 = self.rng.gen_range(-10..=25);
        let customers: u32 = self.rng.gen_range(100..=500);

        let label = report_date.format("%B %Y").to_string();
        let mut doc = DocumentBuilder::new(&format!("Monthly Sales Report {label}"));
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, "MONTHLY SALES REPORT")?
            .centered(10.0, &label)?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0)
            .line(8.0, "PERFORMANCE SUMMARY")?;
        doc.set_font(Style::Regular, 10.0)
            .line(6.0, &format!("Total Sales: {}", dollars(sales)))?
            .line(6.0, &format!("Growth Rate: {growth}%"))?
            .line(6.0, &format!("New Customers: {customers}"))?
            .line(
                6.0,
                &format!("Report Generated: {}", self.now.format("%Y-%m-%d")),
            )?;

        self.finish(
            doc,
            format!("monthly_report_{}.pdf", report_date.format("%B_%Y")),
        )
    }

    /// `weekly_status_Week_{YYYY_MM_DD}.pdf`
    pub fn weekly_status(&mut self, weeks_back: u32) -> Result<String> {
        let report_date = self.weekly_date(weeks_back);

        let mut doc = DocumentBuilder::new("Weekly Status Report");
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, "WEEKLY STATUS REPORT")?
            .centered(
                10.0,
                &format!("Week ending {}", report_date.format("%B %d, %Y")),
            )?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "PROJECT UPDATES")?;
        doc.set_font(Style::Regular, 10.0);
        for project in sample(&mut self.rng, PROJECTS, 3) {
            let status = pick(&mut self.rng, PROJECT_STATUSES);
            doc.line(6.0, &format!("{project}: {status}"))?;
        }

        doc.ln(5.0);
        doc.set_font(Style::Bold, 12.0).line(8.0, "TEAM METRICS")?;
        doc.set_font(Style::Regular, 10.0)
            .line(
                6.0,
                &format!("Tasks Completed: {}", self.rng.gen_range(15..=45)),
            )?
            .line(
                6.0,
                &format!("Issues Resolved: {}", self.rng.gen_range(5..=20)),
            )?
            .line(
                6.0,
                &format!("Team Utilization: {}%", self.rng.gen_range(75..=95)),
            )?;

        self.finish(
            doc,
            format!("weekly_status_Week_{}.pdf", report_date.format("%Y_%m_%d")),
        )
    }

    /// `quarterly_review_{Quarter}_{Year}.pdf`
    pub fn quarterly_review(&mut self, quarter: Quarter, year: i32) -> Result<String> {
        let revenue: i64 = self.rng.gen_range(1_000_000..=5_000_000);
        let profit: i64 = self.rng.gen_range(100_000..=800_000);
        let growth: i32 = self.rng.gen_range(-5..=30);

        let mut doc = DocumentBuilder::new(&format!("{quarter} {year} Quarterly Review"));
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, &format!("{quarter} {year} QUARTERLY REVIEW"))?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "EXECUTIVE SUMMARY")?;
        doc.set_font(Style::Regular, 10.0)
            .line(6.0, &format!("Revenue: {}", dollars(revenue)))?
            .line(6.0, &format!("Net Profit: {}", dollars(profit)))?
            .line(6.0, &format!("YoY Growth: {growth}%"))?;
        doc.ln(8.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "KEY ACHIEVEMENTS")?;
        doc.set_font(Style::Regular, 10.0);
        for achievement in sample(&mut self.rng, ACHIEVEMENTS, 3) {
            doc.line(6.0, &format!("- {achievement}"))?;
        }

        self.finish(doc, format!("quarterly_review_{quarter}_{year}.pdf"))
    }

    /// `{annual_report|tax_summary|compliance_review}_{Year}.pdf`
    pub fn annual_document(&mut self, kind: AnnualDocumentType, year: i32) -> Result<String> {
        let mut doc = DocumentBuilder::new(&format!("{} {year}", title_case(kind.slug())));
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, &format!("{} {year}", kind.title()))?;
        doc.ln(10.0);

        doc.set_font(Style::Regular, 12.0)
            .line(8.0, &format!("Fiscal Year: {year}"))?
            .line(
                8.0,
                &format!("Document Type: {}", title_case(kind.slug())),
            )?
            .line(8.0, &format!("Generated: {}", self.now.format("%Y-%m-%d")))?;
        doc.ln(8.0);

        match kind {
            AnnualDocumentType::AnnualReport => {
                let revenue: i64 = self.rng.gen_range(5_000_000..=20_000_000);
                let employees: u32 = self.rng.gen_range(50..=300);
                let markets: u32 = self.rng.gen_range(3..=15);

                doc.set_font(Style::Bold, 12.0).line(8.0, "ANNUAL HIGHLIGHTS")?;
                doc.set_font(Style::Regular, 10.0)
                    .line(6.0, &format!("Total Annual Revenue: {}", dollars(revenue)))?
                    .line(6.0, &format!("Employee Count: {employees}"))?
                    .line(6.0, &format!("Markets Served: {markets}"))?;
            }
            AnnualDocumentType::TaxSummary => {
                let taxable_income: i64 = self.rng.gen_range(1_000_000..=8_000_000);
                let tax_paid = (taxable_income as f64 * FEDERAL_TAX_RATE) as i64;

                doc.set_font(Style::Bold, 12.0).line(8.0, "TAX INFORMATION")?;
                doc.set_font(Style::Regular, 10.0)
                    .line(6.0, &format!("Taxable Income: {}", dollars(taxable_income)))?
                    .line(6.0, &format!("Federal Tax Paid: {}", dollars(tax_paid)))?
                    .line(6.0, "Effective Tax Rate: 21%")?;
            }
            AnnualDocumentType::ComplianceReview => {
                doc.set_font(Style::Bold, 12.0).line(8.0, "COMPLIANCE STATUS")?;
                doc.set_font(Style::Regular, 10.0);
                for area in COMPLIANCE_AREAS {
                    let status = pick(&mut self.rng, COMPLIANCE_STATUSES);
                    doc.line(6.0, &format!("{area}: {status}"))?;
                }
            }
        }

        self.finish(doc, format!("{}_{year}.pdf", kind.slug()))
    }

    /// Current year, used to anchor the quarterly and annual series.
    pub fn current_year(&self) -> i32 {
        self.now.year()
    }
}
