//! Vocabularies and value formatting shared by the fixture generators

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const ISSUER: &str = "Acme Corporation";
pub const ISSUER_STREET: &str = "123 Business Street";
pub const ISSUER_CITY: &str = "City, State 12345";
pub const ISSUER_PHONE: &str = "Phone: (555) 123-4567";

pub const INVOICE_CUSTOMERS: &[&str] = &[
    "Tech Solutions Inc",
    "Global Enterprises",
    "Innovation Labs",
    "Digital Partners",
];

pub const CONTRACT_CLIENTS: &[&str] = &[
    "TechStart Inc.",
    "Global Solutions LLC",
    "Innovation Partners",
    "Digital Dynamics Corp.",
];

pub const REPORT_TYPES: &[&str] = &[
    "Quarterly Business Report",
    "Annual Financial Summary",
    "Project Status Report",
    "Market Analysis Report",
];

pub const METRIC_CHANGES: &[&str] = &["+5%", "+12%", "+8%", "-2%", "+15%"];

pub const MANUAL_TITLES: &[&str] = &[
    "Software Installation Guide",
    "User Manual v2.1",
    "Quick Start Guide",
    "API Documentation",
];

pub const STORES: &[&str] = &[
    "TechMart Electronics",
    "Office Supplies Plus",
    "Digital Solutions Store",
    "Business Equipment Co.",
];

pub const STATEMENT_COMPANIES: &[&str] = &[
    "TechCorp Industries",
    "Global Solutions Ltd",
    "Innovation Partners Inc",
    "Digital Dynamics Corp",
];

pub const PROJECTS: &[&str] = &[
    "Alpha Project",
    "Beta Initiative",
    "Gamma System",
    "Delta Platform",
];

pub const PROJECT_STATUSES: &[&str] = &["On Track", "Behind Schedule", "Completed", "In Review"];

pub const ACHIEVEMENTS: &[&str] = &[
    "Successful product launch in new market",
    "Strategic partnership agreement signed",
    "Team expansion and talent acquisition",
    "Technology infrastructure improvements",
    "Customer satisfaction score improvement",
];

pub const COMPLIANCE_AREAS: &[&str] = &[
    "Financial Reporting",
    "Data Privacy",
    "Environmental",
    "Safety Standards",
];

pub const COMPLIANCE_STATUSES: &[&str] = &["Compliant", "Under Review", "Remediation Required"];

/// Picks one entry from a non-empty vocabulary.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, vocabulary: &[&'a str]) -> &'a str {
    vocabulary.choose(rng).copied().unwrap_or_default()
}

/// Picks `amount` distinct entries, in random order.
pub fn sample<'a, R: Rng + ?Sized>(rng: &mut R, vocabulary: &[&'a str], amount: usize) -> Vec<&'a str> {
    vocabulary.choose_multiple(rng, amount).copied().collect()
}

/// Calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Quarter containing `month` (1-12).
    pub fn from_month(month: u32) -> Self {
        match (month.clamp(1, 12) - 1) / 3 {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        };
        f.write_str(label)
    }
}

/// Groups digits in threes: `1234567` becomes `1,234,567`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-dollar amount with separators, e.g. `$1,500,000` or `$-250,000`.
pub fn dollars(value: i64) -> String {
    format!("${}", thousands(value))
}

/// Dollar amount with cents, e.g. `$129.90`.
pub fn cents(value: f64) -> String {
    format!("${value:.2}")
}

/// `annual_report` becomes `Annual Report`.
pub fn title_case(slug: &str) -> String {
    slug.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
