//! Filesystem content index for the Shelf sidebar resolver.
//!
//! This crate provides [`FsIndex`], a filesystem-based implementation of the
//! [`ContentIndex`](shelf_index::ContentIndex) trait. It handles:
//!
//! - Recursive directory scanning for `.md` / `.mdx` pages
//! - Label extraction from front matter, H1 headings or file names
//! - The sidebar ordering rule for auto-generated groups
//!
//! # Ordering
//!
//! Pages with a front matter `sidebar.order` come first, ascending. Pages
//! without an order (and ties) follow, sorted by slug. The order never
//! depends on directory iteration order or on scan parallelism.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use shelf_index::ContentIndex;
//! use shelf_index_fs::FsIndex;
//!
//! let index = FsIndex::scan(PathBuf::from("src/content/docs"), &[])?;
//! for page in index.list("graphs")? {
//!     println!("{}: {}", page.slug, page.label);
//! }
//! ```

mod frontmatter;
mod scanner;
mod source;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use glob::Pattern;
use rayon::prelude::*;
use regex::Regex;

use frontmatter::{parse_front_matter, split_front_matter};
use scanner::{PageRef, Scanner};
use shelf_index::{
    ContentIndex, ContentPage, IndexError, IndexErrorKind, PageMeta, is_within, normalize_path,
    validate_path,
};
use source::is_index_file;

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// A `# Heading` line.
static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[ \t]+(.+?)[ \t]*#*[ \t]*$").expect("H1 regex is valid"));

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(titlecase_from_slug("setup-guide"), "Setup Guide");
/// assert_eq!(titlecase_from_slug("my_page"), "My Page");
/// ```
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_first_into(word, &mut result);
    }
    result
}

/// Capitalize the first character of a word, appending to `buf`.
fn capitalize_first_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}

/// Generate a label from a page's file name.
///
/// Index pages take their directory's name; the root index is "Home".
fn derive_label_from_path(rel_path: &Path) -> String {
    let name = if is_index_file(rel_path) {
        rel_path.parent().and_then(Path::file_name)
    } else {
        rel_path.file_stem()
    };
    name.map(|s| titlecase_from_slug(&s.to_string_lossy().to_lowercase()))
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| "Home".to_owned())
}

/// Extract the first H1 heading from a page body.
///
/// Lines inside fenced code blocks (` ``` ` or `~~~`) are skipped, so a shell
/// comment in an example is never taken for the page title.
fn extract_h1(body: &str) -> Option<String> {
    let mut fence: Option<&str> = None;
    for line in body.lines() {
        let trimmed = line.trim_start();
        match fence {
            Some(marker) => {
                if trimmed.starts_with(marker) {
                    fence = None;
                }
            }
            None if trimmed.starts_with("```") => fence = Some("```"),
            None if trimmed.starts_with("~~~") => fence = Some("~~~"),
            None => {
                if let Some(caps) = H1_REGEX.captures(line) {
                    let title = caps[1].trim();
                    if !title.is_empty() {
                        return Some(title.to_owned());
                    }
                }
            }
        }
    }
    None
}

/// A page as held by the index.
#[derive(Debug, Clone)]
struct IndexedPage {
    slug: String,
    label: String,
    order: Option<i32>,
    hidden: bool,
    path: PathBuf,
}

impl IndexedPage {
    /// Sidebar ordering: explicit `order` ascending first, then slug.
    fn sidebar_cmp(&self, other: &Self) -> Ordering {
        self.order
            .is_none()
            .cmp(&other.order.is_none())
            .then(self.order.cmp(&other.order))
            .then_with(|| self.slug.cmp(&other.slug))
    }
}

/// Filesystem content index.
///
/// Scans a content root once and answers [`ContentIndex`] queries from
/// memory. Building the index reads every page's front matter in parallel;
/// the resulting order is fixed by the sidebar ordering rule.
#[derive(Debug)]
pub struct FsIndex {
    /// Content root directory.
    source_dir: PathBuf,
    /// Pages in sidebar order.
    pages: Vec<IndexedPage>,
    /// Slugs of all pages (hidden included).
    slugs: BTreeSet<String>,
    /// Slugs of all scanned directories.
    directories: BTreeSet<String>,
}

impl FsIndex {
    /// Scan a content root and build the index.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root directory containing content pages
    /// * `exclude` - Glob patterns, relative to the root, of files to skip
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if an exclude pattern is invalid, the root does
    /// not exist, or a directory or page cannot be read.
    pub fn scan(source_dir: PathBuf, exclude: &[String]) -> Result<Self, IndexError> {
        let patterns = compile_patterns(exclude)?;

        let scanned = Scanner::new(&source_dir, &patterns)
            .scan()
            .map_err(|e| e.with_backend(BACKEND))?;

        let mut pages = scanned
            .pages
            .par_iter()
            .map(|r| build_page(&source_dir, r))
            .collect::<Result<Vec<_>, _>>()?;

        pages.sort_by(|a, b| a.slug.cmp(&b.slug).then_with(|| a.path.cmp(&b.path)));
        pages.dedup_by(|dup, kept| {
            let same = dup.slug == kept.slug;
            if same {
                tracing::warn!(
                    slug = %dup.slug,
                    kept = %kept.path.display(),
                    skipped = %dup.path.display(),
                    "Two files publish the same slug, skipping one"
                );
            }
            same
        });
        pages.sort_by(IndexedPage::sidebar_cmp);

        let slugs = pages.iter().map(|p| p.slug.clone()).collect();
        let directories = scanned.directories.into_iter().collect();

        tracing::info!(
            source_dir = %source_dir.display(),
            pages = pages.len(),
            "Content index built"
        );

        Ok(Self {
            source_dir,
            pages,
            slugs,
            directories,
        })
    }

    /// Content root this index was built from.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Number of indexed pages (hidden included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the content root holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn directory_exists(&self, directory: &str) -> bool {
        self.directories.contains(directory) || self.slugs.contains(directory)
    }
}

impl ContentIndex for FsIndex {
    fn list(&self, directory: &str) -> Result<Vec<ContentPage>, IndexError> {
        validate_path(directory).map_err(|e| e.with_backend(BACKEND))?;
        let directory = normalize_path(directory);
        if !self.directory_exists(&directory) {
            return Err(IndexError::not_found(directory).with_backend(BACKEND));
        }

        Ok(self
            .pages
            .iter()
            .filter(|p| !p.hidden && is_within(&p.slug, &directory))
            .map(|p| ContentPage::new(p.slug.clone(), p.label.clone()))
            .collect())
    }

    fn exists(&self, slug: &str) -> bool {
        self.has_page(slug).unwrap_or(false)
    }

    fn has_page(&self, slug: &str) -> Result<bool, IndexError> {
        validate_path(slug).map_err(|e| e.with_backend(BACKEND))?;
        Ok(self.slugs.contains(&normalize_path(slug)))
    }
}

/// Compile exclude patterns.
fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, IndexError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                IndexError::new(IndexErrorKind::InvalidPattern)
                    .with_path(p)
                    .with_backend(BACKEND)
                    .with_source(e)
            })
        })
        .collect()
}

/// Build an indexed page from a scanned reference.
///
/// Label precedence: `sidebar.label` > `title` > first H1 > file name.
/// Malformed front matter is logged and ignored.
fn build_page(source_dir: &Path, page_ref: &PageRef) -> Result<IndexedPage, IndexError> {
    let content = fs::read_to_string(&page_ref.path)
        .map_err(|e| IndexError::io(e, Some(page_ref.path.clone())).with_backend(BACKEND))?;

    let (front_matter, body) = split_front_matter(&content);
    let meta = front_matter
        .map(parse_front_matter)
        .transpose()
        .inspect_err(|e| {
            tracing::warn!(
                path = %page_ref.path.display(),
                error = %e,
                "Failed to parse front matter, skipping"
            );
        })
        .ok()
        .flatten()
        .unwrap_or_default();

    let rel_path = page_ref
        .path
        .strip_prefix(source_dir)
        .unwrap_or(&page_ref.path);
    let label = label_for(&meta, body, rel_path);

    Ok(IndexedPage {
        slug: page_ref.slug.clone(),
        label,
        order: meta.sidebar.order,
        hidden: meta.sidebar.hidden,
        path: page_ref.path.clone(),
    })
}

fn label_for(meta: &PageMeta, body: &str, rel_path: &Path) -> String {
    meta.nav_label()
        .map(str::to_owned)
        .or_else(|| extract_h1(body))
        .unwrap_or_else(|| derive_label_from_path(rel_path))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(FsIndex: Send, Sync, ContentIndex);

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn scan(root: &Path) -> FsIndex {
        FsIndex::scan(root.to_path_buf(), &[]).unwrap()
    }

    fn slugs(pages: &[ContentPage]) -> Vec<&str> {
        pages.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_titlecase_from_slug() {
        assert_eq!(titlecase_from_slug("setup-guide"), "Setup Guide");
        assert_eq!(titlecase_from_slug("my_page"), "My Page");
        assert_eq!(titlecase_from_slug("web development"), "Web Development");
        assert_eq!(titlecase_from_slug(""), "");
    }

    #[test]
    fn test_extract_h1() {
        assert_eq!(extract_h1("# Topics\n\nBody"), Some("Topics".to_owned()));
        assert_eq!(extract_h1("Intro\n\n# Later  \n"), Some("Later".to_owned()));
        assert_eq!(extract_h1("# Closed ##\n"), Some("Closed".to_owned()));
        assert_eq!(extract_h1("## Only H2\n"), None);
        assert_eq!(extract_h1("No heading"), None);
        assert_eq!(extract_h1("# Windows\r\nBody"), Some("Windows".to_owned()));
    }

    #[test]
    fn test_extract_h1_skips_fenced_code() {
        let body = "```sh\n# install deps\nnpm ci\n```\n\n# Setup\n";
        assert_eq!(extract_h1(body), Some("Setup".to_owned()));

        let body = "~~~\n# not a title\n~~~\n# Real\n";
        assert_eq!(extract_h1(body), Some("Real".to_owned()));

        assert_eq!(extract_h1("```\n# unclosed fence\n"), None);
    }

    #[test]
    fn test_derive_label_from_path() {
        assert_eq!(derive_label_from_path(Path::new("setup-guide.md")), "Setup Guide");
        assert_eq!(derive_label_from_path(Path::new("graphs/index.md")), "Graphs");
        assert_eq!(derive_label_from_path(Path::new("index.md")), "Home");
    }

    #[test]
    fn test_scan_missing_root_is_not_found() {
        let err = FsIndex::scan(PathBuf::from("/nonexistent-shelf-root"), &[]).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_scan_invalid_exclude_pattern() {
        let temp_dir = create_test_dir();
        let err = FsIndex::scan(temp_dir.path().to_path_buf(), &["[".to_owned()]).unwrap_err();

        assert_eq!(err.kind, IndexErrorKind::InvalidPattern);
    }

    #[test]
    fn test_list_orders_by_slug_without_front_matter() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs/topics.md", "# Topics");
        write(temp_dir.path(), "graphs/bfs.md", "# BFS");
        write(temp_dir.path(), "graphs/representation.md", "# Representation");

        let index = scan(temp_dir.path());
        let pages = index.list("graphs").unwrap();

        assert_eq!(
            slugs(&pages),
            vec!["graphs/bfs", "graphs/representation", "graphs/topics"]
        );
    }

    #[test]
    fn test_list_orders_by_sidebar_order_first() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs/a.md", "# A");
        write(temp_dir.path(), "graphs/z.md", "---\nsidebar:\n  order: 1\n---\n# Z");
        write(temp_dir.path(), "graphs/m.md", "---\nsidebar:\n  order: 2\n---\n# M");
        write(temp_dir.path(), "graphs/b.md", "---\nsidebar:\n  order: 1\n---\n# B");

        let index = scan(temp_dir.path());
        let pages = index.list("graphs").unwrap();

        assert_eq!(
            slugs(&pages),
            vec!["graphs/b", "graphs/z", "graphs/m", "graphs/a"]
        );
    }

    #[test]
    fn test_list_includes_nested_pages_and_directory_index() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs/index.md", "# Graphs");
        write(temp_dir.path(), "graphs/trees/avl.md", "# AVL");
        write(temp_dir.path(), "graphs-extra/other.md", "# Other");

        let index = scan(temp_dir.path());
        let pages = index.list("graphs").unwrap();

        assert_eq!(slugs(&pages), vec!["graphs", "graphs/trees/avl"]);
    }

    #[test]
    fn test_list_label_precedence() {
        let temp_dir = create_test_dir();
        write(
            temp_dir.path(),
            "docs/labelled.md",
            "---\ntitle: Long Title\nsidebar:\n  label: Short\n---\n# Heading",
        );
        write(temp_dir.path(), "docs/titled.md", "---\ntitle: From Title\n---\n# Heading");
        write(temp_dir.path(), "docs/headed.md", "Intro\n\n# From Heading\n");
        write(temp_dir.path(), "docs/plain-file.md", "No heading here.");

        let index = scan(temp_dir.path());
        let pages = index.list("docs").unwrap();

        assert_eq!(
            pages,
            vec![
                ContentPage::new("docs/headed", "From Heading"),
                ContentPage::new("docs/labelled", "Short"),
                ContentPage::new("docs/plain-file", "Plain File"),
                ContentPage::new("docs/titled", "From Title"),
            ]
        );
    }

    #[test]
    fn test_blank_sidebar_label_uses_title() {
        let temp_dir = create_test_dir();
        write(
            temp_dir.path(),
            "a.md",
            "---\ntitle: Real Title\nsidebar:\n  label: \"  \"\n---\nBody",
        );

        let index = scan(temp_dir.path());

        assert_eq!(index.list("").unwrap(), vec![ContentPage::new("a", "Real Title")]);
    }

    #[test]
    fn test_malformed_front_matter_falls_back_to_heading() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "broken.md", "---\ntitle: [oops\n---\n# Recovered");

        let index = scan(temp_dir.path());
        let pages = index.list("").unwrap();

        assert_eq!(pages, vec![ContentPage::new("broken", "Recovered")]);
    }

    #[test]
    fn test_heading_inside_code_block_is_not_a_label() {
        let temp_dir = create_test_dir();
        write(
            temp_dir.path(),
            "setup.md",
            "Run:\n\n```bash\n# clone the repo\ngit clone x\n```\n",
        );

        let index = scan(temp_dir.path());

        assert_eq!(index.list("").unwrap(), vec![ContentPage::new("setup", "Setup")]);
    }

    #[test]
    fn test_hidden_pages_exist_but_are_not_listed() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs/topics.md", "# Topics");
        write(
            temp_dir.path(),
            "graphs/secret.md",
            "---\nsidebar:\n  hidden: true\n---\n# Secret",
        );

        let index = scan(temp_dir.path());

        assert!(index.exists("graphs/secret"));
        assert_eq!(slugs(&index.list("graphs").unwrap()), vec!["graphs/topics"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_directory_with_spaces_matches_slugified_config() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "web development/HTTP Basics.md", "# HTTP");

        let index = scan(temp_dir.path());

        let pages = index.list("web development").unwrap();
        assert_eq!(slugs(&pages), vec!["web-development/http-basics"]);
        assert!(index.exists("web-development/http-basics"));
        assert!(index.exists("web development/HTTP Basics"));
    }

    #[test]
    fn test_list_empty_directory_is_ok() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("drafts")).unwrap();

        let index = scan(temp_dir.path());

        assert!(index.list("drafts").unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_directory_is_not_found() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs/topics.md", "# Topics");

        let index = scan(temp_dir.path());
        let err = index.list("trees").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "[Fs] Not found (path: trees)");
    }

    #[test]
    fn test_parent_segments_are_rejected() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs/topics.md", "# Topics");

        let index = scan(temp_dir.path());

        let err = index.list("../etc").unwrap_err();
        assert_eq!(err.kind, IndexErrorKind::InvalidPath);
        assert!(!index.exists("graphs/../graphs/topics"));

        let err = index.has_page("graphs/../graphs/topics").unwrap_err();
        assert_eq!(err.kind, IndexErrorKind::InvalidPath);
        assert_eq!(err.backend, Some("Fs"));
        assert!(index.has_page("graphs/topics").unwrap());
    }

    #[test]
    fn test_exclude_patterns_remove_pages() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs/topics.md", "# Topics");
        write(temp_dir.path(), "graphs/_draft.md", "# Draft");

        let index =
            FsIndex::scan(temp_dir.path().to_path_buf(), &["**/_*.md".to_owned()]).unwrap();

        assert!(!index.exists("graphs/_draft"));
        assert_eq!(slugs(&index.list("graphs").unwrap()), vec!["graphs/topics"]);
    }

    #[test]
    fn test_duplicate_slugs_keep_one_page() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "graphs.md", "# Graphs File");
        write(temp_dir.path(), "graphs/index.md", "# Graphs Index");

        let index = scan(temp_dir.path());

        assert_eq!(index.len(), 1);
        assert!(index.exists("graphs"));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let temp_dir = create_test_dir();
        for name in ["d", "b", "a", "c", "e"] {
            write(temp_dir.path(), &format!("notes/{name}.md"), "text");
        }

        let first = scan(temp_dir.path()).list("notes").unwrap();
        let second = scan(temp_dir.path()).list("notes").unwrap();

        assert_eq!(first, second);
    }
}
