//! Sidebar resolution.
//!
//! Resolution is a single top-down pass over the configuration. Every level
//! is validated before its children are visited, and the first violation
//! aborts the pass, so a failed resolution never yields a partial tree.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shelf_index::{ContentIndex, IndexError};

use crate::entry::{AutoSection, LinkEntry, NavigationConfig, NavigationEntry, SectionEntry};
use crate::error::{ConfigError, ReferenceKind};
use crate::tree::{ResolvedEntry, ResolvedSection, ResolvedTree};

/// What to do with an auto-generated section whose directory has no pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySectionPolicy {
    /// Fail with [`ConfigError::EmptyAutoSection`].
    #[default]
    Error,
    /// Drop the section from its parent.
    Hide,
}

impl fmt::Display for EmptySectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Hide => f.write_str("hide"),
        }
    }
}

impl FromStr for EmptySectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "hide" => Ok(Self::Hide),
            other => Err(format!(
                "unknown empty section policy '{other}' (expected 'error' or 'hide')"
            )),
        }
    }
}

/// Resolves sidebar configurations against a content index.
///
/// The resolver holds no state between calls; the same configuration and
/// index always produce the same tree.
///
/// # Example
///
/// ```ignore
/// use shelf_nav::{EmptySectionPolicy, Resolver};
///
/// let tree = Resolver::new(&index)
///     .with_empty_sections(EmptySectionPolicy::Hide)
///     .resolve(&config)?;
/// ```
#[derive(Debug)]
pub struct Resolver<'a, I: ?Sized> {
    index: &'a I,
    empty_sections: EmptySectionPolicy,
}

impl<'a, I: ContentIndex + ?Sized> Resolver<'a, I> {
    /// Create a resolver with the default [`EmptySectionPolicy::Error`].
    #[must_use]
    pub fn new(index: &'a I) -> Self {
        Self {
            index,
            empty_sections: EmptySectionPolicy::default(),
        }
    }

    /// Set the empty auto-section policy.
    #[must_use]
    pub fn with_empty_sections(mut self, policy: EmptySectionPolicy) -> Self {
        self.empty_sections = policy;
        self
    }

    /// Resolve a configuration into a navigation tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in display order.
    pub fn resolve(&self, config: &NavigationConfig) -> Result<ResolvedTree, ConfigError> {
        let mut trail = Trail::default();
        let entries = self.resolve_level(&config.entries, &mut trail)?;
        let tree = ResolvedTree::new(entries);

        let stats = tree.stats();
        tracing::info!(
            sections = stats.sections,
            links = stats.links,
            depth = stats.depth,
            "Resolved sidebar"
        );
        Ok(tree)
    }

    fn resolve_level(
        &self,
        entries: &[NavigationEntry],
        trail: &mut Trail,
    ) -> Result<Vec<ResolvedEntry>, ConfigError> {
        check_labels(entries.iter().map(NavigationEntry::label), trail)?;

        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = match entry {
                NavigationEntry::Link(link) => Some(self.resolve_link(link, trail)?),
                NavigationEntry::Section(section) => Some(self.resolve_section(section, trail)?),
                NavigationEntry::Auto(auto) => self.resolve_auto(auto, trail)?,
            };
            resolved.extend(entry);
        }
        Ok(resolved)
    }

    fn resolve_link(&self, link: &LinkEntry, trail: &Trail) -> Result<ResolvedEntry, ConfigError> {
        match self.index.has_page(&link.target) {
            Ok(true) => Ok(ResolvedEntry::Link(link.clone())),
            Ok(false) => Err(ConfigError::DanglingReference {
                location: trail.to_string(),
                label: link.label.clone(),
                kind: ReferenceKind::Page,
                target: link.target.clone(),
            }),
            Err(e) => Err(index_error(
                e,
                trail,
                &link.label,
                ReferenceKind::Page,
                &link.target,
            )),
        }
    }

    fn resolve_section(
        &self,
        section: &SectionEntry,
        trail: &mut Trail,
    ) -> Result<ResolvedEntry, ConfigError> {
        trail.push(&section.label);
        let children = self.resolve_level(&section.children, trail);
        trail.pop();

        Ok(ResolvedEntry::Section(ResolvedSection {
            label: section.label.clone(),
            children: children?,
            collapsed: section.collapsed,
        }))
    }

    fn resolve_auto(
        &self,
        auto: &AutoSection,
        trail: &mut Trail,
    ) -> Result<Option<ResolvedEntry>, ConfigError> {
        let pages = self.index.list(&auto.directory).map_err(|e| {
            index_error(
                e,
                trail,
                &auto.label,
                ReferenceKind::Directory,
                &auto.directory,
            )
        })?;

        if pages.is_empty() {
            return match self.empty_sections {
                EmptySectionPolicy::Error => Err(ConfigError::EmptyAutoSection {
                    location: trail.to_string(),
                    label: auto.label.clone(),
                    directory: auto.directory.clone(),
                }),
                EmptySectionPolicy::Hide => {
                    tracing::debug!(
                        section = %auto.label,
                        directory = %auto.directory,
                        "Hiding empty auto-generated section"
                    );
                    Ok(None)
                }
            };
        }

        trail.push(&auto.label);
        let checked = check_labels(pages.iter().map(|p| p.label.as_str()), trail);
        trail.pop();
        checked?;

        tracing::debug!(
            section = %auto.label,
            directory = %auto.directory,
            pages = pages.len(),
            "Resolved auto-generated section"
        );

        let children = pages
            .into_iter()
            .map(|page| {
                ResolvedEntry::Link(LinkEntry {
                    label: page.label,
                    target: page.slug,
                })
            })
            .collect();

        Ok(Some(ResolvedEntry::Section(ResolvedSection {
            label: auto.label.clone(),
            children,
            collapsed: auto.collapsed,
        })))
    }
}

/// Resolve a configuration with the default empty-section policy.
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn resolve<I: ContentIndex + ?Sized>(
    config: &NavigationConfig,
    index: &I,
) -> Result<ResolvedTree, ConfigError> {
    Resolver::new(index).resolve(config)
}

/// Map an index failure: "not found" is a dangling reference, anything else
/// (invalid path, I/O) is reported as an index error.
fn index_error(
    err: IndexError,
    trail: &Trail,
    label: &str,
    kind: ReferenceKind,
    target: &str,
) -> ConfigError {
    if err.is_not_found() {
        return ConfigError::DanglingReference {
            location: trail.to_string(),
            label: label.to_owned(),
            kind,
            target: target.to_owned(),
        };
    }
    ConfigError::Index {
        location: trail.to_string(),
        label: label.to_owned(),
        source: err,
    }
}

/// Validate sibling labels: each must be non-empty and unique.
fn check_labels<'a>(
    labels: impl Iterator<Item = &'a str>,
    trail: &Trail,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (position, label) in labels.enumerate() {
        let label = label.trim();
        if label.is_empty() {
            return Err(ConfigError::EmptyLabel {
                location: trail.to_string(),
                position: position + 1,
            });
        }
        if !seen.insert(label) {
            return Err(ConfigError::DuplicateLabel {
                location: trail.to_string(),
                label: label.to_owned(),
            });
        }
    }
    Ok(())
}

/// Labels of the sections enclosing the entry being resolved.
#[derive(Debug, Default)]
struct Trail {
    labels: Vec<String>,
}

impl Trail {
    fn push(&mut self, label: &str) {
        self.labels.push(label.to_owned());
    }

    fn pop(&mut self) {
        self.labels.pop();
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.labels.join(" > "))
    }
}
