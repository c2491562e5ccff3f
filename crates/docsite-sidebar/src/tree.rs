//! Validated sidebar trees and their doc-id traversal.

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;
use std::slice;

use docsite_config::validate::{optional, require_absolute_url, require_non_empty, required};
use docsite_config::{ConfigError, SiteConfig};
use indexmap::IndexMap;
use serde::Serialize;

use crate::entry::{Category, DocRef, Link, NavEntry};
use crate::raw::{RawItems, RawNavEntry, RawNavObject, RawSidebars};

/// Validated sidebars keyed by sidebar id, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SidebarTree {
    sidebars: IndexMap<String, Vec<NavEntry>>,
}

impl SidebarTree {
    /// Validate raw sidebars.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a category has no items, a doc id appears
    /// twice within one sidebar, a sequence is shared between two parents,
    /// an entry has an unknown `type`, or a required field is missing.
    pub fn load(raw: &RawSidebars) -> Result<Self, ConfigError> {
        let mut loader = TreeLoader::default();
        let mut sidebars = IndexMap::with_capacity(raw.len());

        for (sidebar_id, items) in raw {
            require_non_empty(sidebar_id, "<sidebar id>")?;
            let mut docs = HashMap::new();
            let entries = loader.load_items(items, sidebar_id, &mut docs)?;
            sidebars.insert(sidebar_id.clone(), entries);
        }

        let tree = Self { sidebars };
        tracing::debug!(sidebars = tree.len(), "Loaded sidebars");
        Ok(tree)
    }

    /// Deserialize and validate an in-memory JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value does not have the raw shape or fails
    /// validation.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawSidebars =
            serde_json::from_value(value).map_err(|e| ConfigError::serde(&e))?;
        Self::load(&raw)
    }

    /// Serialize back to the raw JSON shape.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::serde(&e))
    }

    /// Top-level entries of a sidebar.
    pub fn get(&self, sidebar_id: &str) -> Option<&[NavEntry]> {
        self.sidebars.get(sidebar_id).map(Vec::as_slice)
    }

    pub fn contains(&self, sidebar_id: &str) -> bool {
        self.sidebars.contains_key(sidebar_id)
    }

    /// Sidebar ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Doc ids of one sidebar in pre-order, or `None` for an unknown sidebar.
    ///
    /// Category labels and links are skipped. The iterator is lazy; call
    /// again (or clone it) to restart.
    pub fn flatten(&self, sidebar_id: &str) -> Option<DocIds<'_>> {
        self.get(sidebar_id).map(DocIds::new)
    }

    /// True if any sidebar lists `doc_id`.
    pub fn contains_doc(&self, doc_id: &str) -> bool {
        self.sidebars
            .values()
            .any(|entries| DocIds::new(entries).any(|id| id == doc_id))
    }

    /// Check that every `docSidebar` navbar item names a sidebar of this tree.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` pointing at the first navbar item whose
    /// `sidebarId` is unknown.
    pub fn check_navbar_refs(&self, config: &SiteConfig) -> Result<(), ConfigError> {
        for (i, item) in config.theme_config.navbar_items().iter().enumerate() {
            if let Some(sidebar_id) = item.sidebar_id()
                && !self.contains(sidebar_id)
            {
                return Err(ConfigError::new(
                    format!("themeConfig.navbar.items[{i}].sidebarId"),
                    format!("unknown sidebar `{sidebar_id}`"),
                ));
            }
        }
        Ok(())
    }
}

/// Tracks state shared across every sidebar while loading.
#[derive(Default)]
struct TreeLoader {
    /// Identities of the item sequences already visited.
    sequences: HashSet<*const ()>,
}

impl TreeLoader {
    /// `docs` maps every doc id seen in the current sidebar to its field path.
    fn load_items(
        &mut self,
        items: &RawItems,
        field: &str,
        docs: &mut HashMap<String, String>,
    ) -> Result<Vec<NavEntry>, ConfigError> {
        if !self.sequences.insert(items.identity()) {
            return Err(ConfigError::new(
                field,
                "sequence is shared with another parent, sidebars must form a tree",
            ));
        }

        items
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| self.load_entry(entry, &format!("{field}[{i}]"), docs))
            .collect()
    }

    fn load_entry(
        &mut self,
        entry: &RawNavEntry,
        field: &str,
        docs: &mut HashMap<String, String>,
    ) -> Result<NavEntry, ConfigError> {
        let object = match entry {
            RawNavEntry::Doc(id) => return doc_ref(id.clone(), None, field, docs),
            RawNavEntry::Object(object) => object,
        };

        match object.kind.as_deref() {
            Some("doc") => {
                let id = required(object.id.clone(), &format!("{field}.id"))?;
                let label = optional(object.label.clone(), &format!("{field}.label"))?;
                doc_ref(id, label, field, docs)
            }
            Some("category") => self.load_category(object, field, docs),
            Some("link") => {
                let label = required(object.label.clone(), &format!("{field}.label"))?;
                let href_field = format!("{field}.href");
                let href = required(object.href.clone(), &href_field)?;
                require_absolute_url(&href, &href_field)?;
                Ok(NavEntry::Link(Link { label, href }))
            }
            Some(other) => Err(ConfigError::new(
                format!("{field}.type"),
                format!("unsupported entry type `{other}`, expected doc, category or link"),
            )),
            None => Err(ConfigError::missing(format!("{field}.type"))),
        }
    }

    fn load_category(
        &mut self,
        object: &RawNavObject,
        field: &str,
        docs: &mut HashMap<String, String>,
    ) -> Result<NavEntry, ConfigError> {
        let label = required(object.label.clone(), &format!("{field}.label"))?;
        let items_field = format!("{field}.items");
        let items = object
            .items
            .as_ref()
            .ok_or_else(|| ConfigError::missing(&items_field))?;
        if items.entries().is_empty() {
            return Err(ConfigError::new(
                items_field,
                format!("category `{label}` must contain at least one item"),
            ));
        }
        if object.collapsed == Some(true) && object.collapsible == Some(false) {
            return Err(ConfigError::new(
                format!("{field}.collapsed"),
                "a category that is not collapsible cannot start collapsed",
            ));
        }

        Ok(NavEntry::Category(Category {
            label,
            items: self.load_items(items, &items_field, docs)?,
            collapsed: object.collapsed,
            collapsible: object.collapsible,
        }))
    }
}

fn doc_ref(
    id: String,
    label: Option<String>,
    field: &str,
    docs: &mut HashMap<String, String>,
) -> Result<NavEntry, ConfigError> {
    require_non_empty(&id, field)?;
    if let Some(first) = docs.get(&id) {
        return Err(ConfigError::new(
            field,
            format!("duplicate doc id `{id}`, already listed at {first}"),
        ));
    }
    docs.insert(id.clone(), field.to_owned());
    Ok(NavEntry::Doc(DocRef { id, label }))
}

/// Lazy pre-order iterator over the doc ids of a sidebar.
#[derive(Debug, Clone)]
pub struct DocIds<'a> {
    stack: Vec<slice::Iter<'a, NavEntry>>,
}

impl<'a> DocIds<'a> {
    pub fn new(entries: &'a [NavEntry]) -> Self {
        Self {
            stack: vec![entries.iter()],
        }
    }
}

impl<'a> Iterator for DocIds<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some(NavEntry::Doc(doc)) => return Some(&doc.id),
                Some(NavEntry::Category(category)) => self.stack.push(category.items.iter()),
                Some(NavEntry::Link(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl FusedIterator for DocIds<'_> {}
