//! Source file classification for page discovery.
//!
//! Maps files found during scanning to the slugs they publish under.

use std::path::Path;

use shelf_index::slugify_segment;

/// File extensions recognized as content pages.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Check whether a file name denotes a content page.
pub(crate) fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| CONTENT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Check whether a content file is a directory index (`index.md`, `index.mdx`).
pub(crate) fn is_index_file(path: &Path) -> bool {
    path.file_stem().is_some_and(|s| s == "index")
}

/// Convert a relative content file path to a page slug.
///
/// Strips the extension, maps index files to their directory and slugifies
/// every segment. Windows separators are normalized.
///
/// # Examples
///
/// - `index.md` -> `""`
/// - `graphs/index.mdx` -> `"graphs"`
/// - `graphs/Topics.md` -> `"graphs/topics"`
/// - `web development/HTTP.md` -> `"web-development/http"`
pub(crate) fn file_path_to_slug(rel_path: &Path) -> String {
    let parent = rel_path.parent().map(dir_path_to_slug).unwrap_or_default();
    if is_index_file(rel_path) {
        return parent;
    }

    let stem = rel_path
        .file_stem()
        .map(|s| slugify_segment(&s.to_string_lossy()))
        .unwrap_or_default();

    match (parent.is_empty(), stem.is_empty()) {
        (_, true) => parent,
        (true, false) => stem,
        (false, false) => format!("{parent}/{stem}"),
    }
}

/// Convert a relative directory path to a directory slug.
pub(crate) fn dir_path_to_slug(rel_path: &Path) -> String {
    rel_path
        .to_string_lossy()
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .map(slugify_segment)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
