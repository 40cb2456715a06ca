//! Location of the shared fixture directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory, relative to the workspace root, that all fixtures land in.
pub const FIXTURE_SUBDIR: [&str; 2] = ["testdata", "mock_pdfs"];

/// Root of the workspace this crate was built from.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// `testdata/mock_pdfs` under `root`.
pub fn fixture_dir_under(root: &Path) -> PathBuf {
    FIXTURE_SUBDIR.iter().fold(root.to_path_buf(), |dir, part| dir.join(part))
}

/// `testdata/mock_pdfs` under the workspace root.
pub fn default_output_dir() -> PathBuf {
    fixture_dir_under(&workspace_root())
}

/// Creates `dir` and any missing parents, returning it unchanged.
pub fn ensure_output_dir(dir: impl Into<PathBuf>) -> io::Result<PathBuf> {
    let dir = dir.into();
    fs::create_dir_all(&dir)?;
    tracing::debug!(dir = %dir.display(), "output directory ready");
    Ok(dir)
}
