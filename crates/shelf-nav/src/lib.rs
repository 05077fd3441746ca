//! Sidebar navigation tree resolution.
//!
//! A sidebar is configured as an ordered list of [`NavigationEntry`] values:
//! links to single pages, manually authored sections and auto-generated
//! sections that take their children from a content directory. [`resolve`]
//! checks the configuration against a [`ContentIndex`](shelf_index::ContentIndex)
//! and expands every auto-generated section, producing the [`ResolvedTree`]
//! a renderer consumes.
//!
//! # Example
//!
//! ```ignore
//! use shelf_nav::{NavigationConfig, NavigationEntry, resolve};
//!
//! let config = NavigationConfig::new(vec![
//!     NavigationEntry::section("Topics", vec![NavigationEntry::link("Topics", "topics/topics")]),
//!     NavigationEntry::auto("Graphs", "graphs"),
//! ]);
//! let tree = resolve(&config, &index)?;
//! ```

mod entry;
mod error;
mod resolver;
mod tree;

pub use entry::{AutoSection, LinkEntry, NavigationConfig, NavigationEntry, SectionEntry};
pub use error::{ConfigError, ReferenceKind};
pub use resolver::{EmptySectionPolicy, Resolver, resolve};
pub use tree::{Pagination, ResolvedEntry, ResolvedSection, ResolvedTree, TreeStats};
