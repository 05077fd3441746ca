//! Page discovery by filesystem walking.
//!
//! This module separates the discovery phase (finding files) from the building
//! phase (reading front matter). The Scanner only identifies files that could
//! form pages, returning lightweight references for `FsIndex` to process.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use shelf_index::IndexError;

use crate::source::{dir_path_to_slug, file_path_to_slug, is_content_file};

/// Reference to a page's source file.
///
/// Contains only the file location - no content is read at this stage.
#[derive(Debug, Clone)]
pub(crate) struct PageRef {
    /// Page slug (e.g., "", "graphs", "graphs/topics")
    pub slug: String,
    /// Path to the content file (.md / .mdx)
    pub path: PathBuf,
}

/// Everything discovered under the content root.
#[derive(Debug, Default)]
pub(crate) struct ScanResult {
    /// Candidate pages, in walk order.
    pub pages: Vec<PageRef>,
    /// Slugs of every visited directory, including the root (`""`).
    pub directories: Vec<String>,
}

/// Discovers page references by walking the filesystem.
///
/// The Scanner performs phase 1 of index loading:
/// 1. Walk the directory tree (hidden entries skipped)
/// 2. Identify content files not matched by an exclude pattern
/// 3. Return a `PageRef` for each page and the slug of each directory
///
/// Phase 2 (building pages) is handled by `FsIndex`.
pub(crate) struct Scanner<'a> {
    source_dir: &'a Path,
    exclude: &'a [Pattern],
}

impl<'a> Scanner<'a> {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Content root to scan
    /// * `exclude` - Glob patterns, relative to the root, of files to skip
    pub fn new(source_dir: &'a Path, exclude: &'a [Pattern]) -> Self {
        Self {
            source_dir,
            exclude,
        }
    }

    /// Scan the filesystem and return page references.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if a directory cannot be read.
    pub fn scan(&self) -> Result<ScanResult, IndexError> {
        let mut result = ScanResult::default();
        self.scan_directory(self.source_dir, &mut result)?;
        Ok(result)
    }

    fn scan_directory(&self, dir_path: &Path, result: &mut ScanResult) -> Result<(), IndexError> {
        let rel_dir = dir_path.strip_prefix(self.source_dir).unwrap_or(dir_path);
        result.directories.push(dir_path_to_slug(rel_dir));

        let entries =
            fs::read_dir(dir_path).map_err(|e| IndexError::io(e, Some(dir_path.to_path_buf())))?;

        for entry in entries {
            let entry = entry.map_err(|e| IndexError::io(e, Some(dir_path.to_path_buf())))?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                self.scan_directory(&path, result)?;
            } else if is_content_file(&path) {
                let rel_path = path.strip_prefix(self.source_dir).unwrap_or(&path);
                if self.is_excluded(rel_path) {
                    tracing::debug!(path = %rel_path.display(), "Excluded by pattern");
                    continue;
                }
                result.pages.push(PageRef {
                    slug: file_path_to_slug(rel_path),
                    path,
                });
            }
        }

        Ok(())
    }

    fn is_excluded(&self, rel_path: &Path) -> bool {
        self.exclude.iter().any(|p| p.matches_path(rel_path))
    }
}
