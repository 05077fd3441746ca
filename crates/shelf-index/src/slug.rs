//! Slug rules shared by every index backend.
//!
//! A slug is derived from a page's path relative to the content root. Each
//! segment is lowercased, whitespace becomes `-`, and any character other
//! than a letter, digit, `-` or `_` is dropped:
//!
//! - `graphs/Topics.md` -> `graphs/topics`
//! - `web development/HTTP Basics.md` -> `web-development/http-basics`
//! - `notes/C++ tips.md` -> `notes/c-tips`

use crate::index::{IndexError, IndexErrorKind};

/// Slugify a single path segment.
#[must_use]
pub fn slugify_segment(segment: &str) -> String {
    let mut slug = String::with_capacity(segment.len());
    for ch in segment.trim().chars() {
        if ch.is_whitespace() {
            slug.push('-');
        } else if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if ch == '-' || ch == '_' {
            slug.push(ch);
        }
    }
    slug
}

/// Normalize a configured page or directory path into a slug.
///
/// Leading `./`, surrounding slashes and empty segments are removed and every
/// remaining segment is slugified. `""`, `"/"` and `"."` all denote the
/// content root.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
    trimmed
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .map(slugify_segment)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Reject paths containing a `..` segment.
///
/// Normalization drops empty and `.` segments, so `..` is the only way a
/// configured path could point outside the content root.
///
/// # Errors
///
/// Returns [`IndexErrorKind::InvalidPath`] with the offending path.
pub fn validate_path(path: &str) -> Result<(), IndexError> {
    if path.split(['/', '\\']).any(|s| s.trim() == "..") {
        return Err(IndexError::new(IndexErrorKind::InvalidPath).with_path(path));
    }
    Ok(())
}

/// Check whether `slug` is `directory` itself or lies beneath it.
///
/// Both arguments must already be normalized.
#[must_use]
pub fn is_within(slug: &str, directory: &str) -> bool {
    if directory.is_empty() {
        return true;
    }
    slug.strip_prefix(directory)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
