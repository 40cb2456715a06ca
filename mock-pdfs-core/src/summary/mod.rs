//! Fixture directory summary
//!
//! Runs once per invocation as a straight pipeline: scan the directory for
//! PDFs, classify each name, group files per category and compute size
//! statistics over every scanned file.

pub mod classify;
pub mod render;

pub use classify::{classify, Category, Matcher, Rule, RULES};
pub use render::{human_size, write_report, TESTING_CAPABILITIES};

use serde::{Serialize, Serializer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A PDF found in the fixture directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedFile {
    pub name: String,
    pub size: u64,
}

/// Files of one category, in scan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub files: Vec<ScannedFile>,
}

/// Byte-size statistics over every scanned file
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeStatistics {
    pub count: usize,
    pub total: u64,
    pub average: f64,
    pub largest: u64,
    pub smallest: u64,
}

impl SizeStatistics {
    /// All fields are zero for an empty input.
    pub fn from_sizes(sizes: impl IntoIterator<Item = u64>) -> Self {
        let mut stats = SizeStatistics {
            count: 0,
            total: 0,
            average: 0.0,
            largest: 0,
            smallest: u64::MAX,
        };
        for size in sizes {
            stats.count += 1;
            stats.total += size;
            stats.largest = stats.largest.max(size);
            stats.smallest = stats.smallest.min(size);
        }
        if stats.count == 0 {
            stats.smallest = 0;
        } else {
            stats.average = stats.total as f64 / stats.count as f64;
        }
        stats
    }
}

/// Paths are written the way the text report prints them, so non-UTF-8
/// directories still serialize.
fn serialize_display<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&path.display())
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    #[serde(serialize_with = "serialize_display")]
    pub directory: PathBuf,
    pub files: Vec<ScannedFile>,
    pub groups: Vec<CategoryGroup>,
    pub statistics: SizeStatistics,
}

impl SummaryReport {
    pub fn from_files(directory: impl Into<PathBuf>, files: Vec<ScannedFile>) -> Self {
        let groups = aggregate(&files);
        let statistics = SizeStatistics::from_sizes(files.iter().map(|f| f.size));
        Self {
            directory: directory.into(),
            files,
            groups,
            statistics,
        }
    }

    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Number of files in `category`.
    pub fn count(&self, category: Category) -> usize {
        self.group(category).map_or(0, |g| g.files.len())
    }

    pub fn non_empty_groups(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter().filter(|g| !g.files.is_empty())
    }

    /// Files that matched no rule.
    pub fn unclassified(&self) -> impl Iterator<Item = &ScannedFile> {
        self.files.iter().filter(|f| classify(&f.name).is_none())
    }
}

#[derive(Debug, Clone)]
pub enum SummaryOutcome {
    /// The directory does not exist; nothing was scanned.
    MissingDirectory(PathBuf),
    Report(SummaryReport),
}

/// Regular files with a `pdf` extension, sorted by name.
pub fn scan(dir: &Path) -> io::Result<Vec<ScannedFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("pdf") {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        files.push(ScannedFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// One group per category, in display order; unmatched files are dropped.
pub fn aggregate(files: &[ScannedFile]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Category::ALL
        .iter()
        .map(|&category| CategoryGroup {
            category,
            files: Vec::new(),
        })
        .collect();

    for file in files {
        if let Some(category) = classify(&file.name) {
            if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
                group.files.push(file.clone());
            }
        } else {
            tracing::debug!(file = %file.name, "no category matches");
        }
    }
    groups
}

/// Scans `dir` and builds the report, or notes that the directory is absent.
pub fn build(dir: &Path) -> io::Result<SummaryOutcome> {
    if !dir.exists() {
        return Ok(SummaryOutcome::MissingDirectory(dir.to_path_buf()));
    }
    let files = scan(dir)?;
    tracing::debug!(dir = %dir.display(), files = files.len(), "fixture directory scanned");
    Ok(SummaryOutcome::Report(SummaryReport::from_files(dir, files)))
}

/// Builds the summary for `dir` and prints it to `out`.
pub fn summarize<W: Write + ?Sized>(dir: &Path, out: &mut W) -> io::Result<SummaryOutcome> {
    let outcome = build(dir)?;
    match &outcome {
        SummaryOutcome::MissingDirectory(_) => writeln!(out, "Mock PDFs directory not found!")?,
        SummaryOutcome::Report(report) => write_report(report, out)?,
    }
    Ok(outcome)
}
