//! Filename-prefix classification
//!
//! Rules are evaluated top to bottom and the first match wins. Ordering
//! matters where prefixes overlap: the generic `report_` rule explicitly
//! excludes `monthly_report` and `annual_report` so those land in their own
//! categories.

use serde::{Serialize, Serializer};
use std::fmt;

/// Reporter bucket, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Invoices,
    Contracts,
    Reports,
    Manuals,
    Receipts,
    LargeDocuments,
    Confidential,
    Forms,
    FinancialStatements,
    Presentations,
    LegalDocuments,
    MonthlyReports,
    WeeklyStatus,
    QuarterlyReviews,
    AnnualDocuments,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Invoices,
        Category::Contracts,
        Category::Reports,
        Category::Manuals,
        Category::Receipts,
        Category::LargeDocuments,
        Category::Confidential,
        Category::Forms,
        Category::FinancialStatements,
        Category::Presentations,
        Category::LegalDocuments,
        Category::MonthlyReports,
        Category::WeeklyStatus,
        Category::QuarterlyReviews,
        Category::AnnualDocuments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Invoices => "Invoices",
            Category::Contracts => "Contracts",
            Category::Reports => "Reports",
            Category::Manuals => "Manuals",
            Category::Receipts => "Receipts",
            Category::LargeDocuments => "Large Documents",
            Category::Confidential => "Confidential",
            Category::Forms => "Forms",
            Category::FinancialStatements => "Financial Statements",
            Category::Presentations => "Presentations",
            Category::LegalDocuments => "Legal Documents",
            Category::MonthlyReports => "Monthly Reports",
            Category::WeeklyStatus => "Weekly Status",
            Category::QuarterlyReviews => "Quarterly Reviews",
            Category::AnnualDocuments => "Annual Documents",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Filename test of a single rule
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    Prefix(&'static str),
    AnyPrefix(&'static [&'static str]),
    /// Starts with the prefix and with none of the exclusions
    PrefixExcept(&'static str, &'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Prefix(prefix) => name.starts_with(prefix),
            Matcher::AnyPrefix(prefixes) => prefixes.iter().any(|p| name.starts_with(p)),
            Matcher::PrefixExcept(prefix, excluded) => {
                name.starts_with(prefix) && !excluded.iter().any(|e| name.starts_with(e))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub matcher: Matcher,
    pub category: Category,
}

pub const RULES: &[Rule] = &[
    Rule {
        matcher: Matcher::Prefix("invoice_"),
        category: Category::Invoices,
    },
    Rule {
        matcher: Matcher::Prefix("contract_"),
        category: Category::Contracts,
    },
    Rule {
        matcher: Matcher::PrefixExcept("report_", &["monthly_report", "annual_report"]),
        category: Category::Reports,
    },
    Rule {
        matcher: Matcher::Prefix("manual_"),
        category: Category::Manuals,
    },
    Rule {
        matcher: Matcher::Prefix("receipt_"),
        category: Category::Receipts,
    },
    Rule {
        matcher: Matcher::Prefix("large_document"),
        category: Category::LargeDocuments,
    },
    Rule {
        matcher: Matcher::Prefix("confidential_"),
        category: Category::Confidential,
    },
    Rule {
        matcher: Matcher::Prefix("application_form"),
        category: Category::Forms,
    },
    Rule {
        matcher: Matcher::Prefix("financial_statement"),
        category: Category::FinancialStatements,
    },
    Rule {
        matcher: Matcher::Prefix("presentation_"),
        category: Category::Presentations,
    },
    Rule {
        matcher: Matcher::Prefix("nda_"),
        category: Category::LegalDocuments,
    },
    Rule {
        matcher: Matcher::Prefix("monthly_report"),
        category: Category::MonthlyReports,
    },
    Rule {
        matcher: Matcher::Prefix("weekly_status"),
        category: Category::WeeklyStatus,
    },
    Rule {
        matcher: Matcher::Prefix("quarterly_review"),
        category: Category::QuarterlyReviews,
    },
    Rule {
        matcher: Matcher::AnyPrefix(&["annual_report", "tax_summary", "compliance_review"]),
        category: Category::AnnualDocuments,
    },
];

/// Category of `name`, or `None` when no rule matches.
pub fn classify(name: &str) -> Option<Category> {
    RULES
        .iter()
        .find(|rule| rule.matcher.matches(name))
        .map(|rule| rule.category)
}
