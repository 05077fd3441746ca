//! Content index abstraction for the Shelf sidebar resolver.
//!
//! This crate provides a [`ContentIndex`] trait describing the two questions
//! navigation resolution asks of the content system: which pages live under a
//! directory, and does a page exist. Keeping it a trait enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, anything enumerable tomorrow)
//! - **Clean separation** between navigation logic and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentIndex`] trait with `list()` and `exists()` methods
//! - [`PageMeta`] front matter types shared by backends
//! - Slug helpers ([`normalize_path`], [`slugify_segment`], [`is_within`])
//! - [`MockIndex`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use shelf_index::ContentIndex;
//!
//! for page in index.list("graphs")? {
//!     println!("{}: {}", page.slug, page.label);
//! }
//! ```

mod index;
mod metadata;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod slug;

pub use index::{ContentIndex, ContentPage, IndexError, IndexErrorKind};
pub use metadata::{MetadataError, PageMeta, SidebarMeta};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockIndex;
pub use slug::{is_within, normalize_path, slugify_segment, validate_path};
