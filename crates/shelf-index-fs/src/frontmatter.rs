//! YAML front matter parsing for content pages.
//!
//! Front matter is a YAML block opened by a `---` line at the very top of a
//! page and closed by the next `---` line.

use shelf_index::{MetadataError, PageMeta};

/// Split a page into its front matter (if any) and body.
///
/// Returns `(None, content)` when the page does not open with a `---` line
/// or the block is never closed.
pub(crate) fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Parse navigation metadata from front matter YAML.
///
/// Empty front matter yields a default instance.
///
/// # Errors
///
/// Returns an error if the YAML is malformed.
pub(crate) fn parse_front_matter(yaml: &str) -> Result<PageMeta, MetadataError> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(PageMeta::default());
    }

    serde_yaml::from_str(trimmed).map_err(|e| MetadataError::Parse(format!("Invalid YAML: {e}")))
}
