//! Resolved navigation tree handed to the renderer.

use serde::Serialize;
use shelf_index::normalize_path;

use crate::entry::{LinkEntry, NavigationConfig, NavigationEntry, SectionEntry};

/// A section whose children are fully resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedSection {
    /// Display label.
    pub label: String,
    /// Child entries, in display order.
    #[serde(rename = "items")]
    pub children: Vec<ResolvedEntry>,
    /// Whether the group starts collapsed.
    pub collapsed: bool,
}

/// One node of the resolved sidebar. Auto-generated sections no longer exist
/// at this stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedEntry {
    /// Leaf link to a page.
    Link(LinkEntry),
    /// Group of resolved entries, manual or expanded from a directory.
    Section(ResolvedSection),
}

impl ResolvedEntry {
    /// Display label of the entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Section(section) => &section.label,
        }
    }
}

impl From<ResolvedEntry> for NavigationEntry {
    fn from(entry: ResolvedEntry) -> Self {
        match entry {
            ResolvedEntry::Link(link) => Self::Link(link),
            ResolvedEntry::Section(section) => Self::Section(SectionEntry {
                label: section.label,
                children: section.children.into_iter().map(Into::into).collect(),
                collapsed: section.collapsed,
            }),
        }
    }
}

/// Previous and next links around a page, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination<'a> {
    /// Link shown before the page, if any.
    pub prev: Option<&'a LinkEntry>,
    /// Link shown after the page, if any.
    pub next: Option<&'a LinkEntry>,
}

/// Shape of a resolved tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Number of sections at every depth.
    pub sections: usize,
    /// Number of links at every depth.
    pub links: usize,
    /// Deepest nesting level; top-level entries are at depth 1.
    pub depth: usize,
}

/// Ordered sidebar produced by the resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedTree {
    entries: Vec<ResolvedEntry>,
}

impl ResolvedTree {
    pub(crate) fn new(entries: Vec<ResolvedEntry>) -> Self {
        Self { entries }
    }

    /// Top-level entries.
    #[must_use]
    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert back into an equivalent configuration with no auto sections.
    #[must_use]
    pub fn into_config(self) -> NavigationConfig {
        NavigationConfig::new(self.entries.into_iter().map(Into::into).collect())
    }

    /// Every link, depth-first in display order.
    #[must_use]
    pub fn links(&self) -> Vec<&LinkEntry> {
        let mut links = Vec::new();
        collect_links(&self.entries, &mut links);
        links
    }

    /// Neighbours of the first link pointing at `slug`.
    ///
    /// Slugs are compared after normalization, so `"Graphs/BFS"` finds a link
    /// targeting `"graphs/bfs"`. Returns `None` when no link targets the slug.
    #[must_use]
    pub fn pagination(&self, slug: &str) -> Option<Pagination<'_>> {
        let slug = normalize_path(slug);
        let links = self.links();
        let position = links
            .iter()
            .position(|link| normalize_path(&link.target) == slug)?;

        Some(Pagination {
            prev: position.checked_sub(1).map(|i| links[i]),
            next: links.get(position + 1).copied(),
        })
    }

    /// Count sections and links and measure the nesting depth.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        collect_stats(&self.entries, 1, &mut stats);
        stats
    }
}

fn collect_links<'a>(entries: &'a [ResolvedEntry], links: &mut Vec<&'a LinkEntry>) {
    for entry in entries {
        match entry {
            ResolvedEntry::Link(link) => links.push(link),
            ResolvedEntry::Section(section) => collect_links(&section.children, links),
        }
    }
}

fn collect_stats(entries: &[ResolvedEntry], depth: usize, stats: &mut TreeStats) {
    if !entries.is_empty() {
        stats.depth = stats.depth.max(depth);
    }
    for entry in entries {
        match entry {
            ResolvedEntry::Link(_) => stats.links += 1,
            ResolvedEntry::Section(section) => {
                stats.sections += 1;
                collect_stats(&section.children, depth + 1, stats);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn link(label: &str, target: &str) -> ResolvedEntry {
        ResolvedEntry::Link(LinkEntry {
            label: label.to_owned(),
            target: target.to_owned(),
        })
    }

    fn section(label: &str, children: Vec<ResolvedEntry>) -> ResolvedEntry {
        ResolvedEntry::Section(ResolvedSection {
            label: label.to_owned(),
            children,
            collapsed: false,
        })
    }

    fn sample_tree() -> ResolvedTree {
        ResolvedTree::new(vec![
            section("Topics", vec![link("Topics", "topics/topics")]),
            section(
                "Graphs",
                vec![
                    link("Intro", "graphs/intro"),
                    section("Traversal", vec![link("BFS", "graphs/bfs")]),
                ],
            ),
            link("About", "about"),
        ])
    }

    #[test]
    fn test_links_depth_first() {
        let tree = sample_tree();

        let targets: Vec<&str> = tree.links().iter().map(|l| l.target.as_str()).collect();

        assert_eq!(
            targets,
            vec!["topics/topics", "graphs/intro", "graphs/bfs", "about"]
        );
    }

    #[test]
    fn test_pagination_crosses_sections() {
        let tree = sample_tree();

        let page = tree.pagination("graphs/intro").unwrap();

        assert_eq!(page.prev.unwrap().target, "topics/topics");
        assert_eq!(page.next.unwrap().target, "graphs/bfs");
    }

    #[test]
    fn test_pagination_edges() {
        let tree = sample_tree();

        let first = tree.pagination("topics/topics").unwrap();
        assert!(first.prev.is_none());
        assert_eq!(first.next.unwrap().label, "Intro");

        let last = tree.pagination("/about/").unwrap();
        assert_eq!(last.prev.unwrap().label, "BFS");
        assert!(last.next.is_none());
    }

    #[test]
    fn test_pagination_unknown_slug() {
        assert!(sample_tree().pagination("missing").is_none());
    }

    #[test]
    fn test_stats() {
        let stats = sample_tree().stats();

        assert_eq!(
            stats,
            TreeStats {
                sections: 3,
                links: 4,
                depth: 3,
            }
        );
        assert_eq!(ResolvedTree::default().stats(), TreeStats::default());
    }

    #[test]
    fn test_into_config() {
        let config = ResolvedTree::new(vec![
            section("Topics", vec![link("Topics", "topics/topics")]),
            link("About", "about"),
        ])
        .into_config();

        assert_eq!(
            config,
            NavigationConfig::new(vec![
                NavigationEntry::section(
                    "Topics",
                    vec![NavigationEntry::link("Topics", "topics/topics")]
                ),
                NavigationEntry::link("About", "about"),
            ])
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let tree = ResolvedTree::new(vec![section("Graphs", vec![link("BFS", "graphs/bfs")])]);

        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "type": "section",
                "label": "Graphs",
                "collapsed": false,
                "items": [{ "type": "link", "label": "BFS", "slug": "graphs/bfs" }]
            }])
        );
    }
}
