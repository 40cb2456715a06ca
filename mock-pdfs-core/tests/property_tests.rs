//! Property-based tests for classification and size statistics

use mock_pdfs::summary::{classify, RULES};
use mock_pdfs::{Category, SizeStatistics};
use proptest::prelude::*;

proptest! {
    #[test]
    fn dated_report_names_never_land_in_reports(
        prefix in prop::sample::select(vec!["monthly_report", "annual_report"]),
        suffix in "[A-Za-z0-9_]{0,20}",
    ) {
        let name = format!("{prefix}{suffix}.pdf");
        prop_assert_ne!(classify(&name), Some(Category::Reports));
    }

    #[test]
    fn classification_is_first_matching_rule(name in "[a-z_]{0,24}(\\.pdf)?") {
        let first = RULES.iter().find(|r| r.matcher.matches(&name)).map(|r| r.category);
        prop_assert_eq!(classify(&name), first);
    }

    #[test]
    fn ordinal_fixture_names_classify(
        idx in 0usize..5,
        n in 1u32..10_000,
    ) {
        let (name, expected) = [
            (format!("invoice_{n:04}.pdf"), Category::Invoices),
            (format!("contract_SA_{n:04}.pdf"), Category::Contracts),
            (format!("manual_{n:04}.pdf"), Category::Manuals),
            (format!("receipt_{n:06}.pdf"), Category::Receipts),
            (format!("nda_{n:04}.pdf"), Category::LegalDocuments),
        ][idx].clone();
        prop_assert_eq!(classify(&name), Some(expected));
    }

    #[test]
    fn statistics_are_consistent(sizes in prop::collection::vec(0u64..10_000_000, 0..50)) {
        let stats = SizeStatistics::from_sizes(sizes.iter().copied());

        prop_assert_eq!(stats.count, sizes.len());
        prop_assert_eq!(stats.total, sizes.iter().sum::<u64>());
        if sizes.is_empty() {
            prop_assert_eq!(stats.average, 0.0);
            prop_assert_eq!(stats.largest, 0);
            prop_assert_eq!(stats.smallest, 0);
        } else {
            prop_assert!(stats.smallest <= stats.largest);
            prop_assert!(stats.average >= stats.smallest as f64);
            prop_assert!(stats.average <= stats.largest as f64);
            prop_assert_eq!(stats.largest, *sizes.iter().max().unwrap());
            prop_assert_eq!(stats.smallest, *sizes.iter().min().unwrap());
        }
    }
}
