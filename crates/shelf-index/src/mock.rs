//! Mock content index for testing.
//!
//! Provides [`MockIndex`] for unit testing without filesystem access.

use std::collections::BTreeSet;

use crate::index::{ContentIndex, ContentPage, IndexError};
use crate::slug::{is_within, normalize_path, validate_path};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

#[derive(Debug)]
struct MockPage {
    page: ContentPage,
    hidden: bool,
}

/// Mock index for testing.
///
/// Stores pages in memory and lists them in insertion order. Every ancestor
/// directory of a registered page exists implicitly; empty directories are
/// added with [`with_directory`](Self::with_directory).
///
/// # Example
///
/// ```ignore
/// use shelf_index::{ContentIndex, MockIndex};
///
/// let index = MockIndex::new()
///     .with_page("graphs/topics", "Topics")
///     .with_page("graphs/representation", "Representation");
///
/// let pages = index.list("graphs").unwrap();
/// assert_eq!(pages.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockIndex {
    pages: Vec<MockPage>,
    directories: BTreeSet<String>,
}

impl MockIndex {
    /// Create a new empty mock index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible page with the given slug and label.
    #[must_use]
    pub fn with_page(self, slug: &str, label: impl Into<String>) -> Self {
        self.push(slug, label.into(), false)
    }

    /// Add a page that exists but is hidden from listings.
    #[must_use]
    pub fn with_hidden_page(self, slug: &str) -> Self {
        self.push(slug, String::new(), true)
    }

    /// Register a directory that may hold no pages.
    #[must_use]
    pub fn with_directory(mut self, directory: &str) -> Self {
        self.add_ancestors(&normalize_path(directory));
        self
    }

    fn push(mut self, slug: &str, label: String, hidden: bool) -> Self {
        let slug = normalize_path(slug);
        if let Some((parent, _)) = slug.rsplit_once('/') {
            self.add_ancestors(parent);
        }
        self.pages.push(MockPage {
            page: ContentPage::new(slug, label),
            hidden,
        });
        self
    }

    fn add_ancestors(&mut self, directory: &str) {
        let mut current = String::new();
        for segment in directory.split('/').filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            self.directories.insert(current.clone());
        }
    }

    fn directory_exists(&self, directory: &str) -> bool {
        directory.is_empty()
            || self.directories.contains(directory)
            || self.pages.iter().any(|p| p.page.slug == directory)
    }
}

impl ContentIndex for MockIndex {
    fn list(&self, directory: &str) -> Result<Vec<ContentPage>, IndexError> {
        validate_path(directory).map_err(|e| e.with_backend(BACKEND))?;
        let directory = normalize_path(directory);
        if !self.directory_exists(&directory) {
            return Err(IndexError::not_found(directory).with_backend(BACKEND));
        }
        Ok(self
            .pages
            .iter()
            .filter(|p| !p.hidden && is_within(&p.page.slug, &directory))
            .map(|p| p.page.clone())
            .collect())
    }

    fn exists(&self, slug: &str) -> bool {
        self.has_page(slug).unwrap_or(false)
    }

    fn has_page(&self, slug: &str) -> Result<bool, IndexError> {
        validate_path(slug).map_err(|e| e.with_backend(BACKEND))?;
        let slug = normalize_path(slug);
        Ok(self.pages.iter().any(|p| p.page.slug == slug))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::index::IndexErrorKind;

    #[test]
    fn test_list_preserves_insertion_order() {
        let index = MockIndex::new()
            .with_page("graphs/topics", "Topics")
            .with_page("graphs/representation", "Representation")
            .with_page("backend/http", "HTTP");

        let pages = index.list("graphs").unwrap();

        assert_eq!(
            pages,
            vec![
                ContentPage::new("graphs/topics", "Topics"),
                ContentPage::new("graphs/representation", "Representation"),
            ]
        );
    }

    #[test]
    fn test_list_unknown_directory_is_not_found() {
        let index = MockIndex::new().with_page("graphs/topics", "Topics");

        let err = index.list("trees").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.backend, Some("Mock"));
    }

    #[test]
    fn test_list_registered_empty_directory() {
        let index = MockIndex::new().with_directory("drafts");

        assert!(index.list("drafts").unwrap().is_empty());
    }

    #[test]
    fn test_list_root_returns_everything() {
        let index = MockIndex::new()
            .with_page("a", "A")
            .with_page("b/c", "C");

        assert_eq!(index.list("").unwrap().len(), 2);
    }

    #[test]
    fn test_hidden_pages_exist_but_are_not_listed() {
        let index = MockIndex::new()
            .with_page("graphs/topics", "Topics")
            .with_hidden_page("graphs/draft");

        assert!(index.exists("graphs/draft"));
        assert_eq!(index.list("graphs").unwrap().len(), 1);
    }

    #[test]
    fn test_exists_normalizes_input() {
        let index = MockIndex::new().with_page("web development/http", "HTTP");

        assert!(index.exists("/web-development/http/"));
        assert!(index.exists("Web Development/HTTP"));
        assert!(!index.exists("web-development"));
    }

    #[test]
    fn test_parent_segments_are_invalid() {
        let index = MockIndex::new().with_page("graphs/bfs", "BFS");

        assert!(!index.exists("../graphs/bfs"));
        let err = index.has_page("../graphs/bfs").unwrap_err();
        assert_eq!(err.kind, IndexErrorKind::InvalidPath);
        assert_eq!(err.backend, Some("Mock"));
        let err = index.list("graphs/..").unwrap_err();
        assert_eq!(err.kind, IndexErrorKind::InvalidPath);
    }
}
