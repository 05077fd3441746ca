//! Content index trait and error types.
//!
//! Provides the core [`ContentIndex`] trait consumed by the sidebar resolver,
//! along with [`IndexError`] for unified error handling across backends.
//!
//! # Slug Convention
//!
//! All path parameters are **slugs**, not file paths:
//! - `""` - content root (home page)
//! - `"graphs"` - directory, or the page built from `graphs/index.md`
//! - `"graphs/topics"` - nested page
//!
//! Implementations normalize incoming paths with [`normalize_path`](crate::normalize_path)
//! so configuration may spell directories the way they appear on disk.

use std::path::PathBuf;

use serde::Serialize;

use crate::slug::validate_path;

/// A content page as listed for navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentPage {
    /// Page slug (e.g., "graphs/topics").
    pub slug: String,
    /// Navigation label (resolved: sidebar label > title > H1 > filename).
    pub label: String,
}

impl ContentPage {
    /// Create a new content page.
    #[must_use]
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
        }
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndexErrorKind {
    /// Page or directory does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Invalid include/exclude pattern.
    InvalidPattern,
    /// Other/unknown error category.
    Other,
}

/// Index error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct IndexError {
    /// Semantic error category.
    pub kind: IndexErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl IndexError {
    /// Create a new index error.
    #[must_use]
    pub fn new(kind: IndexErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(IndexErrorKind::NotFound).with_path(path)
    }

    /// Whether this error reports a missing page or directory.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == IndexErrorKind::NotFound
    }

    /// Create an index error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => IndexErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => IndexErrorKind::PermissionDenied,
            _ => IndexErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            IndexErrorKind::NotFound => "Not found",
            IndexErrorKind::PermissionDenied => "Permission denied",
            IndexErrorKind::InvalidPath => "Invalid path",
            IndexErrorKind::InvalidPattern => "Invalid pattern",
            IndexErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only view over the content pages available to a site build.
///
/// This is the only interface the sidebar resolver needs from the
/// surrounding content system. Implementations must be deterministic: two
/// calls with the same argument on the same index return the same pages in
/// the same order.
pub trait ContentIndex: Send + Sync {
    /// List the pages at or beneath a directory, in sidebar order.
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory slug (e.g., "graphs", "" for the content root)
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] with [`IndexErrorKind::NotFound`] when the
    /// directory does not exist. A directory that exists but holds no visible
    /// pages yields `Ok(vec![])`.
    fn list(&self, directory: &str) -> Result<Vec<ContentPage>, IndexError>;

    /// Check if a page exists at the given slug.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, slug: &str) -> bool;

    /// Check if a page exists, reporting unusable slugs as errors.
    ///
    /// Unlike [`exists`](Self::exists), a slug with a `..` segment is an
    /// [`IndexErrorKind::InvalidPath`] error rather than `false`, so every
    /// backend rejects it the same way.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] when the slug is invalid or the backend fails.
    fn has_page(&self, slug: &str) -> Result<bool, IndexError> {
        validate_path(slug)?;
        Ok(self.exists(slug))
    }
}
