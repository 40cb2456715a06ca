//! Documents with unusual shapes: long, multi-slide, form-like, tabular

use super::FixtureGenerator;
use crate::content::{dollars, pick, Quarter, ISSUER, STATEMENT_COMPANIES};
use crate::error::Result;
use crate::layout::{Align, Border, DocumentBuilder, Next, Style};
use chrono::{Datelike, Duration};
use rand::Rng;

pub const LARGE_DOCUMENT_PAGES: u32 = 51;
const LINES_PER_SECTION: u32 = 30;

const SENSITIVE_CONTENT: &[&str] = &[
    "Employee Records and Salary Information",
    "Strategic Business Plans for Q1-Q4",
    "Customer Database and Contact Information",
    "Financial Projections and Budget Allocations",
    "Proprietary Technology Specifications",
];

const APPLICANT_FIELDS: &[(&str, usize)] = &[
    ("Full Name:", 40),
    ("Email Address:", 40),
    ("Phone Number:", 25),
    ("Address:", 50),
    ("City, State, ZIP:", 35),
    ("Date of Birth:", 15),
    ("Social Security Number:", 15),
];

const AGENDA: &[&str] = &[
    "1. Executive Summary",
    "2. Financial Performance",
    "3. Market Analysis",
    "4. Operational Updates",
    "5. Strategic Initiatives",
    "6. Q&A Session",
];

const NDA_TERMS: &[&str] = &[
    "1. CONFIDENTIAL INFORMATION: For purposes of this Agreement, \"Confidential",
    "   Information\" means all non-public, proprietary information disclosed by the",
    "   Disclosing Party to the Receiving Party.",
    "",
    "2. OBLIGATIONS: The Receiving Party agrees to:",
    "   a) Hold all Confidential Information in strict confidence",
    "   b) Not disclose Confidential Information to third parties",
    "   c) Use Confidential Information solely for evaluation purposes",
    "",
    "3. TERM: This Agreement shall remain in effect for a period of two (2) years",
    "   from the date of execution.",
    "",
    "4. GOVERNING LAW: This Agreement shall be governed by the laws of [STATE].",
];

fn blank(width: usize) -> String {
    "_".repeat(width)
}

/// Indented label with a right-aligned amount.
fn ledger_line(doc: &mut DocumentBuilder, height: f64, label: &str, amount: i64) -> Result<()> {
    doc.cell(100.0, height, label, Border::None, Next::Right, Align::Left)?
        .cell(40.0, height, &dollars(amount), Border::None, Next::NewLine, Align::Right)?;
    Ok(())
}

fn framed_total(doc: &mut DocumentBuilder, label: &str, amount: i64) -> Result<()> {
    doc.cell(100.0, 8.0, label, Border::Frame, Next::Right, Align::Left)?
        .cell(40.0, 8.0, &dollars(amount), Border::Frame, Next::NewLine, Align::Right)?;
    Ok(())
}

impl<R: Rng> FixtureGenerator<R> {
    /// `large_document_{000}.pdf`, 51 pages of sectioned filler text.
    pub fn large_document(&mut self, number: u32) -> Result<String> {
        let mut doc = DocumentBuilder::new("Technical Specification Document");

        for page in 1..=LARGE_DOCUMENT_PAGES {
            doc.add_page();
            doc.set_font(Style::Bold, 16.0)
                .centered(15.0, "TECHNICAL SPECIFICATION DOCUMENT")?
                .centered(10.0, &format!("Page {page} of {LARGE_DOCUMENT_PAGES}"))?;
            doc.ln(10.0);

            doc.set_font(Style::Bold, 12.0)
                .line(8.0, &format!("Section {page}: Technical Requirements"))?;
            doc.set_font(Style::Regular, 10.0);

            for i in 0..LINES_PER_SECTION {
                if i % 5 == 0 {
                    doc.set_font(Style::Bold, 10.0)
                        .line(6.0, &format!("Subsection {page}.{}", i / 5 + 1))?;
                    doc.set_font(Style::Regular, 10.0);
                }
                doc.line(
                    5.0,
                    &format!(
                        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Page {page}, line {}.",
                        i + 1
                    ),
                )?;
            }
        }

        self.finish(doc, format!("large_document_{number:03}.pdf"))
    }

    /// `confidential_protected_{000}.pdf`
    ///
    /// Only the name and wording suggest protection; the file is a plain,
    /// unencrypted PDF.
    pub fn protected_document(&mut self, number: u32) -> Result<String> {
        let mut doc = DocumentBuilder::new("Confidential Document");
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, "CONFIDENTIAL DOCUMENT")?;
        doc.ln(10.0);

        doc.set_font(Style::Regular, 12.0)
            .line(8.0, "This document contains sensitive information.")?
            .line(8.0, "Access requires proper authorization.")?;
        doc.ln(5.0);

        doc.set_font(Style::Bold, 11.0)
            .line(8.0, "CLASSIFICATION: RESTRICTED")?;
        doc.set_font(Style::Regular, 10.0);
        for item in SENSITIVE_CONTENT {
            doc.line(6.0, &format!("- {item}"))?;
        }

        self.finish(doc, format!("confidential_protected_{number:03}.pdf"))
    }

    /// `application_form_{000}.pdf`
    pub fn form(&mut self, number: u32) -> Result<String> {
        let mut doc = DocumentBuilder::new("Employee Application Form");
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, "EMPLOYEE APPLICATION FORM")?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0)
            .line(8.0, "PERSONAL INFORMATION")?;
        doc.set_font(Style::Regular, 10.0);
        for &(label, width) in APPLICANT_FIELDS {
            doc.cell(60.0, 8.0, label, Border::None, Next::Right, Align::Left)?
                .line(8.0, &blank(width))?;
            doc.ln(2.0);
        }

        doc.ln(5.0);
        doc.set_font(Style::Bold, 12.0).line(8.0, "EMPLOYMENT HISTORY")?;
        doc.set_font(Style::Regular, 10.0);
        for employer in 1..=3 {
            doc.line(6.0, &format!("Previous Employer {employer}:"))?;
            for (left, right) in [
                (
                    format!("Company Name: {}", blank(25)),
                    format!("Position: {}", blank(20)),
                ),
                (
                    format!("Start Date: {}", blank(12)),
                    format!("End Date: {}", blank(12)),
                ),
            ] {
                doc.cell(20.0, 6.0, "", Border::None, Next::Right, Align::Left)?
                    .cell(50.0, 6.0, &left, Border::None, Next::Right, Align::Left)?
                    .cell(50.0, 6.0, &right, Border::None, Next::NewLine, Align::Left)?;
            }
            doc.ln(3.0);
        }

        doc.ln(10.0);
        doc.set_font(Style::Bold, 12.0)
            .line(8.0, "APPLICANT SIGNATURE")?;
        doc.set_font(Style::Regular, 10.0).ln(5.0);
        doc.cell(
            80.0,
            6.0,
            &format!("Signature: {}", blank(30)),
            Border::None,
            Next::Right,
            Align::Left,
        )?
        .cell(
            50.0,
            6.0,
            &format!("Date: {}", blank(15)),
            Border::None,
            Next::NewLine,
            Align::Left,
        )?;

        self.finish(doc, format!("application_form_{number:03}.pdf"))
    }

    /// `financial_statement_{000}_{Quarter}_{Year}.pdf`, a balance sheet.
    pub fn financial_statement(&mut self, number: u32) -> Result<String> {
        let company = pick(&mut self.rng, STATEMENT_COMPANIES);
        let statement_date = self.today() - Duration::days(self.rng.gen_range(30..=365));
        let quarter = Quarter::of(statement_date);
        let year = statement_date.year();

        let mut doc = DocumentBuilder::new(&format!("{company} Financial Statement"));
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, &company.to_uppercase())?
            .centered(10.0, "FINANCIAL STATEMENT")?
            .centered(8.0, &format!("For the period ending {quarter} {year}"))?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "ASSETS")?;
        doc.set_font(Style::Bold, 10.0)
            .cell(120.0, 6.0, "Current Assets", Border::None, Next::NewLine, Align::Left)?;
        doc.set_font(Style::Regular, 10.0);

        let current_assets: [(&str, i64); 4] = [
            ("Cash and Cash Equivalents", self.rng.gen_range(500_000..=2_000_000)),
            ("Accounts Receivable", self.rng.gen_range(300_000..=1_500_000)),
            ("Inventory", self.rng.gen_range(200_000..=800_000)),
            ("Prepaid Expenses", self.rng.gen_range(50_000..=200_000)),
        ];
        let mut total_current = 0;
        for (asset, amount) in current_assets {
            total_current += amount;
            ledger_line(&mut doc, 5.0, &format!("  {asset}"), amount)?;
        }
        doc.set_font(Style::Bold, 10.0);
        ledger_line(&mut doc, 6.0, "Total Current Assets", total_current)?;
        doc.ln(3.0);

        doc.cell(120.0, 6.0, "Fixed Assets", Border::None, Next::NewLine, Align::Left)?;
        doc.set_font(Style::Regular, 10.0);
        let fixed_assets: [(&str, i64); 3] = [
            ("Property, Plant & Equipment", self.rng.gen_range(1_000_000..=5_000_000)),
            ("Less: Accumulated Depreciation", -self.rng.gen_range(200_000..=800_000)),
            ("Intangible Assets", self.rng.gen_range(500_000..=2_000_000)),
        ];
        let mut total_fixed = 0;
        for (asset, amount) in fixed_assets {
            total_fixed += amount;
            ledger_line(&mut doc, 5.0, &format!("  {asset}"), amount)?;
        }
        doc.set_font(Style::Bold, 10.0);
        ledger_line(&mut doc, 6.0, "Total Fixed Assets", total_fixed)?;
        doc.ln(2.0);

        let total_assets = total_current + total_fixed;
        framed_total(&mut doc, "TOTAL ASSETS", total_assets)?;
        doc.ln(5.0);

        doc.set_font(Style::Bold, 12.0)
            .line(8.0, "LIABILITIES & EQUITY")?;
        doc.set_font(Style::Bold, 10.0).cell(
            120.0,
            6.0,
            "Current Liabilities",
            Border::None,
            Next::NewLine,
            Align::Left,
        )?;
        doc.set_font(Style::Regular, 10.0);
        let liabilities: [(&str, i64); 3] = [
            ("Accounts Payable", self.rng.gen_range(100_000..=500_000)),
            ("Short-term Debt", self.rng.gen_range(200_000..=800_000)),
            ("Accrued Expenses", self.rng.gen_range(50_000..=200_000)),
        ];
        let mut total_liabilities = 0;
        for (liability, amount) in liabilities {
            total_liabilities += amount;
            ledger_line(&mut doc, 5.0, &format!("  {liability}"), amount)?;
        }

        let equity = total_assets - total_liabilities;
        doc.ln(3.0);
        doc.set_font(Style::Bold, 10.0);
        ledger_line(&mut doc, 6.0, "Total Liabilities", total_liabilities)?;
        ledger_line(&mut doc, 6.0, "Shareholders Equity", equity)?;
        doc.ln(2.0);
        framed_total(&mut doc, "TOTAL LIABILITIES & EQUITY", total_liabilities + equity)?;

        self.finish(
            doc,
            format!("financial_statement_{number:03}_{quarter}_{year}.pdf"),
        )
    }

    /// `presentation_{000}.pdf`, three slide-like pages.
    pub fn presentation(&mut self, number: u32) -> Result<String> {
        let mut doc = DocumentBuilder::new("Quarterly Business Review");

        doc.add_page();
        doc.set_font(Style::Bold, 20.0).ln(40.0);
        doc.centered(20.0, "QUARTERLY BUSINESS REVIEW")?;
        doc.set_font(Style::Regular, 14.0)
            .centered(10.0, &format!("Presentation #{number}"))?
            .centered(10.0, &self.now.format("%B %Y").to_string())?;

        doc.add_page();
        doc.set_font(Style::Bold, 18.0).centered(15.0, "AGENDA")?;
        doc.ln(10.0);
        doc.set_font(Style::Regular, 12.0);
        for item in AGENDA {
            doc.line(8.0, item)?;
            doc.ln(2.0);
        }

        doc.add_page();
        doc.set_font(Style::Bold, 18.0)
            .centered(15.0, "FINANCIAL PERFORMANCE")?;
        doc.ln(10.0);
        doc.set_font(Style::Bold, 12.0).line(8.0, "Key Metrics:")?;
        doc.set_font(Style::Regular, 11.0);

        let metrics = [
            format!(
                "- Revenue: ${}M (+{}% YoY)",
                self.rng.gen_range(5..=50),
                self.rng.gen_range(5..=25)
            ),
            format!("- Gross Margin: {}%", self.rng.gen_range(35..=65)),
            format!("- Operating Income: ${}M", self.rng.gen_range(1..=10)),
            format!(
                "- Customer Growth: +{} new customers",
                self.rng.gen_range(100..=500)
            ),
        ];
        for metric in &metrics {
            doc.line(8.0, metric)?;
        }

        self.finish(doc, format!("presentation_{number:03}.pdf"))
    }

    /// `nda_{0000}.pdf`
    pub fn legal_document(&mut self, number: u32) -> Result<String> {
        let mut doc = DocumentBuilder::new(&format!("Non-Disclosure Agreement NDA-{number:04}"));
        doc.add_page();
        doc.set_font(Style::Bold, 14.0)
            .centered(15.0, "NON-DISCLOSURE AGREEMENT")?;
        doc.ln(5.0);

        doc.set_font(Style::Regular, 10.0)
            .line(6.0, &format!("Document #: NDA-{number:04}"))?
            .line(6.0, &format!("Date: {}", self.now.format("%B %d, %Y")))?;
        doc.ln(8.0);

        doc.set_font(Style::Bold, 11.0)
            .line(8.0, "PARTIES TO THIS AGREEMENT:")?;
        doc.set_font(Style::Regular, 10.0)
            .line(6.0, &format!("Disclosing Party: {ISSUER}"))?
            .line(6.0, "Receiving Party: [PARTY NAME]")?;
        doc.ln(8.0);

        doc.set_font(Style::Bold, 11.0)
            .line(8.0, "TERMS AND CONDITIONS:")?;
        doc.set_font(Style::Regular, 10.0)
            .paragraph(5.0, NDA_TERMS, 3.0)?;

        doc.ln(15.0);
        doc.set_font(Style::Bold, 10.0).line(8.0, "SIGNATURES:")?;
        doc.ln(8.0);

        let rule = blank(30);
        doc.set_font(Style::Regular, 9.0)
            .cell(90.0, 6.0, "Disclosing Party:", Border::None, Next::Right, Align::Left)?
            .cell(90.0, 6.0, "Receiving Party:", Border::None, Next::NewLine, Align::Left)?;
        doc.ln(12.0);
        for text in [rule.as_str(), "Signature"] {
            doc.cell(90.0, 6.0, text, Border::None, Next::Right, Align::Left)?
                .cell(90.0, 6.0, text, Border::None, Next::NewLine, Align::Left)?;
        }

        self.finish(doc, format!("nda_{number:04}.pdf"))
    }
}
