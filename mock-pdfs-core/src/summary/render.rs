//! Text rendering of a [`SummaryReport`]

use super::{SizeStatistics, SummaryReport};
use crate::content::thousands;
use std::io::{self, Write};

const SAMPLE_FILES: usize = 5;

pub const TESTING_CAPABILITIES: &[&str] = &[
    "Date-based filtering (monthly, weekly, quarterly, annual)",
    "Content search across varied document structures",
    "File size handling (1KB - 50KB range)",
    "Bulk processing scenarios",
    "Metadata extraction testing",
    "Performance benchmarking",
];

/// `{n} bytes` below 1 KiB, otherwise kilobytes to one decimal.
pub fn human_size(size: u64) -> String {
    if size < 1024 {
        format!("{} bytes", thousands(size as i64))
    } else {
        format!("{:.1}KB", size as f64 / 1024.0)
    }
}

fn kilobytes(bytes: f64) -> String {
    format!("{:.1}KB", bytes / 1024.0)
}

fn write_categories<W: Write + ?Sized>(report: &SummaryReport, out: &mut W) -> io::Result<()> {
    for group in report.non_empty_groups() {
        writeln!(out, "📁 {} ({} files)", group.category, group.files.len())?;
        writeln!(out, "   {}", "-".repeat(40))?;
        for file in group.files.iter().take(SAMPLE_FILES) {
            writeln!(out, "   • {:<35} ({})", file.name, human_size(file.size))?;
        }
        if group.files.len() > SAMPLE_FILES {
            writeln!(
                out,
                "   • ... and {} more files",
                group.files.len() - SAMPLE_FILES
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_statistics<W: Write + ?Sized>(stats: &SizeStatistics, out: &mut W) -> io::Result<()> {
    writeln!(out, "📊 File Size Statistics")?;
    writeln!(out, "   {}", "=".repeat(30))?;
    writeln!(out, "   Total Size: {}", kilobytes(stats.total as f64))?;
    writeln!(out, "   Average Size: {}", kilobytes(stats.average))?;
    writeln!(out, "   Largest File: {}", kilobytes(stats.largest as f64))?;
    writeln!(out, "   Smallest File: {}", kilobytes(stats.smallest as f64))?;
    writeln!(out)
}

fn write_capabilities<W: Write + ?Sized>(report: &SummaryReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "🧪 Testing Capabilities")?;
    writeln!(out, "   {}", "=".repeat(30))?;
    writeln!(
        out,
        "   ✓ Document type classification ({} types)",
        report.non_empty_groups().count()
    )?;
    for capability in TESTING_CAPABILITIES {
        writeln!(out, "   ✓ {capability}")?;
    }
    writeln!(out)
}

/// Prints the full human-readable summary.
pub fn write_report<W: Write + ?Sized>(report: &SummaryReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "📄 Mock PDF Test Documents Summary")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Directory: {}", report.directory.display())?;
    writeln!(out, "Total PDFs: {}", report.files.len())?;
    writeln!(out)?;

    write_categories(report, out)?;
    write_statistics(&report.statistics, out)?;
    write_capabilities(report, out)?;

    writeln!(out, "🚀 Ready for document management app testing!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::ScannedFile;
    use pretty_assertions::assert_eq;

    fn render(report: &SummaryReport) -> String {
        let mut out = Vec::new();
        write_report(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 bytes");
        assert_eq!(human_size(1000), "1,000 bytes");
        assert_eq!(human_size(1023), "1,023 bytes");
        assert_eq!(human_size(1024), "1.0KB");
        assert_eq!(human_size(2560), "2.5KB");
    }

    #[test]
    fn test_empty_report_has_zero_statistics() {
        let report = SummaryReport::from_files("/fixtures", Vec::new());
        let text = render(&report);

        assert!(text.contains("Total PDFs: 0\n"));
        assert!(!text.contains("📁"));
        assert!(text.contains("   Average Size: 0.0KB\n"));
        assert!(text.contains("   Smallest File: 0.0KB\n"));
        assert!(text.contains("Document type classification (0 types)"));
    }

    #[test]
    fn test_category_lists_at_most_five_samples() {
        let files = (1..=7)
            .map(|i| ScannedFile {
                name: format!("receipt_{i:06}.pdf"),
                size: 2048,
            })
            .collect();
        let report = SummaryReport::from_files("/fixtures", files);
        let text = render(&report);

        assert!(text.contains("📁 Receipts (7 files)\n"));
        assert!(text.contains("receipt_000005.pdf"));
        assert!(!text.contains("receipt_000006.pdf"));
        assert!(text.contains("   • ... and 2 more files\n"));
        assert!(text.contains("(2.0KB)"));
        assert!(text.contains("   Total Size: 14.0KB\n"));
    }

    #[test]
    fn test_sample_line_layout() {
        let report = SummaryReport::from_files(
            "/fixtures",
            vec![ScannedFile {
                name: "nda_0001.pdf".to_string(),
                size: 900,
            }],
        );
        let text = render(&report);
        let line = text
            .lines()
            .find(|l| l.contains("nda_0001.pdf"))
            .unwrap();
        assert_eq!(line, format!("   • {:<35} (900 bytes)", "nda_0001.pdf"));
    }
}
