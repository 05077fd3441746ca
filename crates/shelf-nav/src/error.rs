//! Sidebar resolution errors.

use std::fmt;

use shelf_index::IndexError;

/// What a dangling reference pointed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A link target.
    Page,
    /// An auto-generated section's directory.
    Directory,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page => f.write_str("page"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// A sidebar configuration that cannot be turned into a navigation tree.
///
/// `location` is the breadcrumb of section labels leading to the offending
/// entry, such as `Guides > Graphs`, or `<root>` for top-level entries.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Dangling reference at {location}: '{label}' points to missing {kind} '{target}'")]
    DanglingReference {
        location: String,
        label: String,
        kind: ReferenceKind,
        target: String,
    },

    #[error("Duplicate label at {location}: '{label}' is used by more than one entry")]
    DuplicateLabel { location: String, label: String },

    #[error(
        "Empty auto-generated section at {location}: '{label}' found no pages in directory '{directory}'"
    )]
    EmptyAutoSection {
        location: String,
        label: String,
        directory: String,
    },

    #[error("Empty label at {location}: entry #{position} has no label")]
    EmptyLabel { location: String, position: usize },

    #[error("Content index error at {location} for '{label}': {source}")]
    Index {
        location: String,
        label: String,
        #[source]
        source: IndexError,
    },
}

impl ConfigError {
    /// Breadcrumb of the offending entry.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::DanglingReference { location, .. }
            | Self::DuplicateLabel { location, .. }
            | Self::EmptyAutoSection { location, .. }
            | Self::EmptyLabel { location, .. }
            | Self::Index { location, .. } => location,
        }
    }
}
