//! Everyday business documents: invoices, contracts, reports, manuals, receipts

use super::FixtureGenerator;
use crate::content::{
    cents, pick, Quarter, CONTRACT_CLIENTS, INVOICE_CUSTOMERS, ISSUER, ISSUER_CITY,
    ISSUER_PHONE, ISSUER_STREET, MANUAL_TITLES, METRIC_CHANGES, REPORT_TYPES, STORES,
};
use crate::error::Result;
use crate::layout::{Align, Border, DocumentBuilder, Next, Style};
use chrono::{Datelike, Duration};
use rand::Rng;

const TAX_RATE: f64 = 0.08;
const TERM_WRAP: usize = 90;

const CONTRACT_TERMS: &[&str] = &[
    "1. Services: Provider agrees to deliver software development and consulting services as outlined in the attached Statement of Work.",
    "2. Duration: This agreement shall remain in effect for a period of 12 months from the date of execution.",
    "3. Payment: Client agrees to pay the fees as specified in the payment schedule. Late payments may incur a 1.5% monthly service charge.",
    "4. Confidentiality: Both parties agree to maintain the confidentiality of proprietary information shared during the course of this agreement.",
    "5. Intellectual Property: All work products created under this agreement shall be owned by the Client upon full payment.",
    "6. Termination: Either party may terminate this agreement with 30 days written notice.",
];

const REPORT_SUMMARY: &[&str] = &[
    "This report provides a comprehensive overview of our business performance for the reporting period.",
    "Key highlights include strong revenue growth, improved operational efficiency, and successful",
    "completion of strategic initiatives. Our team has demonstrated exceptional performance across",
    "all major business units, positioning us well for continued growth in the upcoming quarters.",
];

const REPORT_CONCLUSION: &[&str] = &[
    "The results demonstrate strong business performance and operational excellence.",
    "Moving forward, we will continue to focus on sustainable growth, customer satisfaction,",
    "and strategic market expansion to maintain our competitive advantage.",
];

const MANUAL_INTRO: &[&str] = &[
    "Welcome to our comprehensive user guide. This document will help you get started",
    "with our software solution and make the most of its powerful features.",
    "",
    "Our platform is designed to streamline your workflow and increase productivity",
    "through intuitive design and robust functionality.",
];

const RECEIPT_ITEMS: &[(&str, u32, f64)] = &[
    ("Wireless Mouse", 1, 29.99),
    ("USB Cable", 2, 12.99),
    ("Notebook", 1, 8.50),
];

/// Splits `text` after `width` characters.
fn wrap_once(text: &str, width: usize) -> (&str, Option<&str>) {
    match text.char_indices().nth(width) {
        Some((split, _)) => (&text[..split], Some(&text[split..])),
        None => (text, None),
    }
}

/// Right-aligned `label value` pair after a blank `indent` cell.
fn total_row(
    doc: &mut DocumentBuilder,
    indent: f64,
    columns: (f64, f64),
    height: f64,
    label: &str,
    value: &str,
) -> Result<()> {
    doc.cell(indent, height, "", Border::None, Next::Right, Align::Left)?
        .cell(columns.0, height, label, Border::None, Next::Right, Align::Right)?
        .cell(columns.1, height, value, Border::None, Next::NewLine, Align::Right)?;
    Ok(())
}

impl<R: Rng> FixtureGenerator<R> {
    /// `invoice_{0000}.pdf`
    pub fn invoice(&mut self, number: u32) -> Result<String> {
        let invoice_date = self.today() - Duration::days(self.rng.gen_range(1..=90));
        let due_date = invoice_date + Duration::days(30);

        let mut doc = DocumentBuilder::new(&format!("Invoice #{number:04}"));
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(10.0, &format!("INVOICE #{number:04}"))?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, ISSUER)?;
        doc.set_font(Style::Regular, 10.0)
            .paragraph(6.0, &[ISSUER_STREET, ISSUER_CITY, ISSUER_PHONE], 0.0)?;
        doc.ln(10.0);

        doc.field(40.0, 6.0, "Invoice Date:", &invoice_date.format("%Y-%m-%d").to_string())?;
        doc.field(40.0, 6.0, "Due Date:", &due_date.format("%Y-%m-%d").to_string())?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "Bill To:")?;
        doc.set_font(Style::Regular, 10.0)
            .line(6.0, pick(&mut self.rng, INVOICE_CUSTOMERS))?;
        doc.line(6.0, &format!("{} Customer Ave", self.rng.gen_range(100..=999)))?;
        doc.line(6.0, &format!("City, State {}", self.rng.gen_range(10000..=99999)))?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 10.0).table_row(
            8.0,
            &[
                (80.0, "Description", Align::Center),
                (30.0, "Quantity", Align::Center),
                (30.0, "Unit Price", Align::Center),
                (30.0, "Total", Align::Center),
            ],
        )?;

        let items: [(&str, i64, i64); 3] = [
            (
                "Software License",
                self.rng.gen_range(1..=10),
                self.rng.gen_range(100..=500),
            ),
            (
                "Consulting Services",
                self.rng.gen_range(10..=50),
                self.rng.gen_range(50..=200),
            ),
            ("Support Package", 1, self.rng.gen_range(200..=1000)),
        ];

        doc.set_font(Style::Regular, 10.0);
        let mut subtotal = 0;
        for (item, quantity, price) in items {
            let total = quantity * price;
            subtotal += total;
            let (quantity, price, total) =
                (quantity.to_string(), cents(price as f64), cents(total as f64));
            doc.table_row(
                6.0,
                &[
                    (80.0, item, Align::Left),
                    (30.0, quantity.as_str(), Align::Center),
                    (30.0, price.as_str(), Align::Right),
                    (30.0, total.as_str(), Align::Right),
                ],
            )?;
        }

        doc.ln(5.0);
        let subtotal = subtotal as f64;
        let tax = subtotal * TAX_RATE;
        total_row(&mut doc, 140.0, (20.0, 20.0), 6.0, "Subtotal:", &cents(subtotal))?;
        total_row(&mut doc, 140.0, (20.0, 20.0), 6.0, "Tax (8%):", &cents(tax))?;
        doc.set_font(Style::Bold, 10.0);
        total_row(&mut doc, 140.0, (20.0, 20.0), 6.0, "Total:", &cents(subtotal + tax))?;

        self.finish(doc, format!("invoice_{number:04}.pdf"))
    }

    /// `contract_SA_{0000}.pdf`
    pub fn contract(&mut self, number: u32) -> Result<String> {
        let contract_date = self.today() - Duration::days(self.rng.gen_range(30..=365));

        let mut doc = DocumentBuilder::new(&format!("Service Agreement SA-{number:04}"));
        doc.add_page();
        doc.set_font(Style::Bold, 16.0).centered(15.0, "SERVICE AGREEMENT")?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0)
            .line(8.0, &format!("Contract #: SA-{number:04}"))?
            .line(8.0, &format!("Date: {}", contract_date.format("%B %d, %Y")))?;
        doc.ln(5.0);

        doc.set_font(Style::Bold, 11.0).line(8.0, "PARTIES:")?;
        doc.set_font(Style::Regular, 10.0)
            .line(6.0, &format!("Provider: {ISSUER}"))?
            .line(6.0, &format!("{ISSUER_STREET}, {ISSUER_CITY}"))?;
        doc.ln(3.0);

        let client = pick(&mut self.rng, CONTRACT_CLIENTS);
        doc.line(6.0, &format!("Client: {client}"))?;
        doc.line(
            6.0,
            &format!(
                "{} Client Boulevard, City, State {}",
                self.rng.gen_range(500..=999),
                self.rng.gen_range(10000..=99999)
            ),
        )?;
        doc.ln(8.0);

        doc.set_font(Style::Bold, 11.0).line(8.0, "TERMS AND CONDITIONS:")?;
        doc.set_font(Style::Regular, 10.0);
        for term in CONTRACT_TERMS {
            let (head, rest) = wrap_once(term, TERM_WRAP);
            doc.line(6.0, head)?;
            if let Some(rest) = rest {
                doc.cell(10.0, 6.0, "", Border::None, Next::Right, Align::Left)?
                    .line(6.0, rest)?;
            }
            doc.ln(2.0);
        }

        doc.ln(15.0);
        doc.set_font(Style::Bold, 11.0).line(8.0, "SIGNATURES:")?;
        doc.ln(10.0);

        let rule = "_".repeat(30);
        let signer = pick(&mut self.rng, CONTRACT_CLIENTS);
        doc.set_font(Style::Regular, 10.0)
            .cell(90.0, 6.0, "Provider:", Border::None, Next::Right, Align::Left)?
            .cell(90.0, 6.0, "Client:", Border::None, Next::NewLine, Align::Left)?;
        doc.ln(15.0);
        for (left, right) in [
            (rule.as_str(), rule.as_str()),
            ("John Smith, CEO", "Jane Doe, Director"),
            (ISSUER, signer),
        ] {
            doc.cell(90.0, 6.0, left, Border::None, Next::Right, Align::Left)?
                .cell(90.0, 6.0, right, Border::None, Next::NewLine, Align::Left)?;
        }

        self.finish(doc, format!("contract_SA_{number:04}.pdf"))
    }

    /// `report_{0000}_{Quarter}_{Year}.pdf`
    pub fn report(&mut self, number: u32) -> Result<String> {
        let title = pick(&mut self.rng, REPORT_TYPES);
        let report_date = self.today() - Duration::days(self.rng.gen_range(1..=180));
        let quarter = Quarter::of(report_date);
        let year = report_date.year();

        let mut doc = DocumentBuilder::new(title);
        doc.add_page();
        doc.set_font(Style::Bold, 16.0)
            .centered(15.0, &title.to_uppercase())?;
        doc.set_font(Style::Regular, 12.0)
            .centered(8.0, &format!("Period: {quarter} {year}"))?
            .centered(
                8.0,
                &format!("Report Date: {}", report_date.format("%B %d, %Y")),
            )?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "EXECUTIVE SUMMARY")?;
        doc.set_font(Style::Regular, 10.0)
            .paragraph(6.0, REPORT_SUMMARY, 0.0)?;
        doc.ln(8.0);

        doc.set_font(Style::Bold, 12.0)
            .line(8.0, "KEY PERFORMANCE METRICS")?;
        doc.set_font(Style::Bold, 10.0).table_row(
            8.0,
            &[
                (60.0, "Metric", Align::Center),
                (40.0, "Current Period", Align::Center),
                (40.0, "Previous Period", Align::Center),
                (30.0, "Change", Align::Center),
            ],
        )?;

        let metrics = [
            (
                "Revenue",
                format!("${}K", self.rng.gen_range(500..=2000)),
                format!("${}K", self.rng.gen_range(400..=1800)),
            ),
            (
                "Gross Margin",
                format!("{}%", self.rng.gen_range(35..=65)),
                format!("{}%", self.rng.gen_range(30..=60)),
            ),
            (
                "Customer Acquisition",
                self.rng.gen_range(50..=200).to_string(),
                self.rng.gen_range(40..=180).to_string(),
            ),
            (
                "Employee Satisfaction",
                format!("{}%", self.rng.gen_range(75..=95)),
                format!("{}%", self.rng.gen_range(70..=90)),
            ),
        ];

        doc.set_font(Style::Regular, 10.0);
        for (metric, current, previous) in &metrics {
            let change = pick(&mut self.rng, METRIC_CHANGES);
            doc.table_row(
                6.0,
                &[
                    (60.0, *metric, Align::Left),
                    (40.0, current.as_str(), Align::Center),
                    (40.0, previous.as_str(), Align::Center),
                    (30.0, change, Align::Center),
                ],
            )?;
        }
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "CONCLUSION")?;
        doc.set_font(Style::Regular, 10.0)
            .paragraph(6.0, REPORT_CONCLUSION, 0.0)?;

        self.finish(doc, format!("report_{number:04}_{quarter}_{year}.pdf"))
    }

    /// `manual_{0000}.pdf`
    pub fn manual(&mut self, number: u32) -> Result<String> {
        let title = pick(&mut self.rng, MANUAL_TITLES);
        let version = format!(
            "Version: {}.{}.{}",
            self.rng.gen_range(1..=5),
            self.rng.gen_range(0..=9),
            self.rng.gen_range(0..=9)
        );

        let mut doc = DocumentBuilder::new(title);
        doc.add_page();
        doc.set_font(Style::Bold, 18.0)
            .centered(15.0, &title.to_uppercase())?;
        doc.ln(10.0);

        doc.set_font(Style::Regular, 12.0)
            .line(8.0, &version)?
            .line(
                8.0,
                &format!("Last Updated: {}", self.now.format("%B %Y")),
            )?;
        doc.ln(10.0);

        doc.set_font(Style::Bold, 12.0).line(8.0, "1. INTRODUCTION")?;
        doc.set_font(Style::Regular, 10.0)
            .paragraph(6.0, MANUAL_INTRO, 3.0)?;

        self.finish(doc, format!("manual_{number:04}.pdf"))
    }

    /// `receipt_{000000}.pdf`
    pub fn receipt(&mut self, number: u32) -> Result<String> {
        let store = pick(&mut self.rng, STORES);
        let purchase_date = self.today() - Duration::days(self.rng.gen_range(1..=30));

        let mut doc = DocumentBuilder::new(&format!("Receipt R{number:06}"));
        doc.add_page();
        doc.set_font(Style::Bold, 14.0).centered(10.0, "PURCHASE RECEIPT")?;
        doc.ln(5.0);

        doc.set_font(Style::Bold, 12.0).centered(8.0, store)?;
        doc.set_font(Style::Regular, 10.0)
            .centered(
                6.0,
                &format!("{} Retail Street", self.rng.gen_range(100..=999)),
            )?
            .centered(
                6.0,
                &format!("City, State {}", self.rng.gen_range(10000..=99999)),
            )?;
        doc.ln(10.0);

        doc.field(40.0, 6.0, "Receipt #:", &format!("R{number:06}"))?;
        doc.field(40.0, 6.0, "Date:", &purchase_date.format("%Y-%m-%d").to_string())?;
        doc.ln(8.0);

        doc.set_font(Style::Bold, 10.0).table_row(
            6.0,
            &[
                (80.0, "Item", Align::Center),
                (20.0, "Qty", Align::Center),
                (30.0, "Price", Align::Center),
                (30.0, "Total", Align::Center),
            ],
        )?;

        doc.set_font(Style::Regular, 9.0);
        let mut subtotal = 0.0;
        for &(item, quantity, price) in RECEIPT_ITEMS {
            let total = f64::from(quantity) * price;
            subtotal += total;
            let (quantity, price, total) = (quantity.to_string(), cents(price), cents(total));
            doc.table_row(
                5.0,
                &[
                    (80.0, item, Align::Left),
                    (20.0, quantity.as_str(), Align::Center),
                    (30.0, price.as_str(), Align::Right),
                    (30.0, total.as_str(), Align::Right),
                ],
            )?;
        }

        doc.ln(3.0);
        let tax = subtotal * TAX_RATE;
        total_row(&mut doc, 100.0, (30.0, 30.0), 5.0, "Subtotal:", &cents(subtotal))?;
        total_row(&mut doc, 100.0, (30.0, 30.0), 5.0, "Tax (8%):", &cents(tax))?;
        doc.set_font(Style::Bold, 9.0);
        total_row(&mut doc, 100.0, (30.0, 30.0), 5.0, "Total:", &cents(subtotal + tax))?;

        self.finish(doc, format!("receipt_{number:06}.pdf"))
    }
}
