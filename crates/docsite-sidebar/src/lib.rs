//! Sidebar navigation trees for docsite.
//!
//! This crate provides:
//! - [`RawSidebars`]: sidebar declarations as handed over by the loading code
//! - [`load_sidebars`]: validation into a typed [`SidebarTree`]
//! - [`flatten`]: pre-order doc ids of one sidebar, for existence checks
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), docsite_config::ConfigError> {
//! use docsite_sidebar::{SidebarTree, flatten};
//!
//! let tree = SidebarTree::from_value(serde_json::json!({
//!     "tutorialSidebar": [
//!         "intro",
//!         { "type": "category", "label": "Getting Started", "items": ["a", "b"] }
//!     ]
//! }))?;
//!
//! let ids: Vec<_> = flatten(&tree, "tutorialSidebar").into_iter().flatten().collect();
//! assert_eq!(ids, ["intro", "a", "b"]);
//! # Ok(())
//! # }
//! ```

mod entry;
mod raw;
mod tree;

pub use entry::{Category, DocRef, Link, NavEntry};
pub use raw::{RawItems, RawNavEntry, RawNavObject, RawSidebars};
pub use tree::{DocIds, SidebarTree};

use docsite_config::ConfigError;

/// Validate raw sidebars into a [`SidebarTree`].
///
/// # Errors
///
/// Returns `ConfigError` for empty categories, doc ids repeated within a
/// sidebar, sequences shared between parents and malformed entries.
pub fn load_sidebars(raw: &RawSidebars) -> Result<SidebarTree, ConfigError> {
    SidebarTree::load(raw)
}

/// Doc ids of `sidebar_id` in pre-order, or `None` if the sidebar is unknown.
pub fn flatten<'a>(tree: &'a SidebarTree, sidebar_id: &str) -> Option<DocIds<'a>> {
    tree.flatten(sidebar_id)
}
