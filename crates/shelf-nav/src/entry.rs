//! Declarative sidebar configuration.
//!
//! Entries deserialize from the same shapes the site configuration uses:
//!
//! ```toml
//! [[sidebar.items]]
//! label = "Topics"
//! items = [{ label = "Topics", slug = "topics/topics" }]
//!
//! [[sidebar.items]]
//! label = "Backend notes"
//! autogenerate = { directory = "backend" }
//! collapsed = true
//! ```
//!
//! Each shape rejects unknown keys, so a misspelled key fails loudly instead
//! of turning the entry into a different variant.

use serde::{Deserialize, Serialize};

/// A leaf pointing at one content page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkEntry {
    /// Display label.
    pub label: String,
    /// Page slug the link points at.
    #[serde(rename = "slug")]
    pub target: String,
}

/// A manually authored group of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionEntry {
    /// Display label.
    pub label: String,
    /// Child entries, in authored order.
    #[serde(rename = "items")]
    pub children: Vec<NavigationEntry>,
    /// Whether the group starts collapsed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
}

/// A group whose children are derived from a content directory at build time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AutoSectionRepr", into = "AutoSectionRepr")]
pub struct AutoSection {
    /// Display label.
    pub label: String,
    /// Directory whose pages become the children.
    pub directory: String,
    /// Whether the group starts collapsed.
    pub collapsed: bool,
}

/// On-disk shape of [`AutoSection`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AutoSectionRepr {
    label: String,
    autogenerate: Autogenerate,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    collapsed: bool,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Autogenerate {
    directory: String,
}

impl From<AutoSectionRepr> for AutoSection {
    fn from(repr: AutoSectionRepr) -> Self {
        Self {
            label: repr.label,
            directory: repr.autogenerate.directory,
            collapsed: repr.collapsed,
        }
    }
}

impl From<AutoSection> for AutoSectionRepr {
    fn from(section: AutoSection) -> Self {
        Self {
            label: section.label,
            autogenerate: Autogenerate {
                directory: section.directory,
            },
            collapsed: section.collapsed,
        }
    }
}

/// One entry of the sidebar configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavigationEntry {
    /// Leaf link to a page.
    Link(LinkEntry),
    /// Manually authored group.
    Section(SectionEntry),
    /// Group populated from a content directory.
    Auto(AutoSection),
}

impl NavigationEntry {
    /// Create a link entry.
    #[must_use]
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link(LinkEntry {
            label: label.into(),
            target: target.into(),
        })
    }

    /// Create an expanded manual section.
    #[must_use]
    pub fn section(label: impl Into<String>, children: Vec<NavigationEntry>) -> Self {
        Self::Section(SectionEntry {
            label: label.into(),
            children,
            collapsed: false,
        })
    }

    /// Create an expanded auto-generated section.
    #[must_use]
    pub fn auto(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self::Auto(AutoSection {
            label: label.into(),
            directory: directory.into(),
            collapsed: false,
        })
    }

    /// Set the collapsed flag. Links have no such flag and are returned unchanged.
    #[must_use]
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        match &mut self {
            Self::Link(_) => {}
            Self::Section(section) => section.collapsed = collapsed,
            Self::Auto(auto) => auto.collapsed = collapsed,
        }
        self
    }

    /// Display label of the entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Section(section) => &section.label,
            Self::Auto(auto) => &auto.label,
        }
    }
}

/// Ordered top-level sidebar entries for one build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationConfig {
    /// Top-level entries, in authored order.
    pub entries: Vec<NavigationEntry>,
}

impl NavigationConfig {
    /// Create a configuration from top-level entries.
    #[must_use]
    pub fn new(entries: Vec<NavigationEntry>) -> Self {
        Self { entries }
    }

    /// Whether the sidebar has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<NavigationEntry>> for NavigationConfig {
    fn from(entries: Vec<NavigationEntry>) -> Self {
        Self::new(entries)
    }
}
