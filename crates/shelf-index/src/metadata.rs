//! Page metadata types for index backends.
//!
//! Provides the [`PageMeta`] struct describing the front matter fields that
//! affect navigation. This module contains only data types - parsing is
//! implemented by individual backends.
//!
//! # Metadata Fields
//!
//! - `title`: Page title (overrides H1 extraction)
//! - `sidebar.label`: Navigation label (overrides the title in the sidebar)
//! - `sidebar.order`: Position among auto-generated siblings
//! - `sidebar.hidden`: Exclude the page from auto-generated groups

use serde::{Deserialize, Serialize};

/// Page metadata loaded from front matter.
///
/// All fields are optional. Unknown front matter keys are ignored so pages
/// can carry fields meant for other tools.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title (overrides H1 extraction).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Sidebar-specific settings.
    #[serde(default, skip_serializing_if = "SidebarMeta::is_empty")]
    pub sidebar: SidebarMeta,
}

/// Sidebar settings from the `sidebar:` front matter block.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarMeta {
    /// Label shown in the sidebar instead of the page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Sort key among auto-generated siblings (lower first).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// Hide the page from auto-generated groups.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl SidebarMeta {
    /// Check if no sidebar setting is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.order.is_none() && !self.hidden
    }
}

impl PageMeta {
    /// Check if metadata has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.sidebar.is_empty()
    }

    /// Label to show in navigation, if the metadata decides it.
    #[must_use]
    pub fn nav_label(&self) -> Option<&str> {
        let non_blank = |l: &&str| !l.trim().is_empty();
        self.sidebar
            .label
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.title.as_deref().filter(non_blank))
    }
}

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Parsing error (format-specific).
    #[error("{0}")]
    Parse(String),
}
