//! Raw sidebar declarations as handed over by the loading code.
//!
//! Item sequences live in [`RawItems`], a reference-counted slice. Cloning a
//! `RawItems` shares the sequence instead of copying it, which is how an
//! in-memory declaration can end up with one sequence under two parents.
//! [`load_sidebars`](crate::load_sidebars) rejects such sharing.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Raw sidebars keyed by sidebar id, in declaration order.
pub type RawSidebars = IndexMap<String, RawItems>;

/// Shared, immutable sequence of raw navigation entries.
#[derive(Clone)]
pub struct RawItems(Rc<[RawNavEntry]>);

impl RawItems {
    pub fn new(entries: Vec<RawNavEntry>) -> Self {
        Self(entries.into())
    }

    pub fn entries(&self) -> &[RawNavEntry] {
        &self.0
    }

    /// Identity of the underlying allocation.
    pub(crate) fn identity(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }
}

impl From<Vec<RawNavEntry>> for RawItems {
    fn from(entries: Vec<RawNavEntry>) -> Self {
        Self::new(entries)
    }
}

impl fmt::Debug for RawItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

impl<'de> Deserialize<'de> for RawItems {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<RawNavEntry>::deserialize(deserializer).map(Self::new)
    }
}

/// Raw navigation entry: a bare doc id or a typed object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNavEntry {
    Doc(String),
    Object(RawNavObject),
}

impl RawNavEntry {
    /// Bare doc id entry.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(id.into())
    }

    /// Category entry over `items`.
    pub fn category(label: impl Into<String>, items: impl Into<RawItems>) -> Self {
        Self::Object(RawNavObject {
            kind: Some("category".to_owned()),
            label: Some(label.into()),
            items: Some(items.into()),
            ..Default::default()
        })
    }

    /// External link entry.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Object(RawNavObject {
            kind: Some("link".to_owned()),
            label: Some(label.into()),
            href: Some(href.into()),
            ..Default::default()
        })
    }
}

/// Raw object entry. The `type` decides which of the other fields apply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNavObject {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub label: Option<String>,
    pub href: Option<String>,
    pub items: Option<RawItems>,
    pub collapsed: Option<bool>,
    pub collapsible: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_sequence() {
        let items = RawItems::new(vec![RawNavEntry::doc("a")]);
        let shared = RawItems::clone(&items);
        assert_eq!(items.identity(), shared.identity());
    }

    #[test]
    fn test_separate_sequences_have_distinct_identity() {
        let first = RawItems::new(vec![RawNavEntry::doc("a")]);
        let second = RawItems::new(vec![RawNavEntry::doc("a")]);
        assert_ne!(first.identity(), second.identity());
    }

    #[test]
    fn test_deserialize_mixed_entries() {
        let raw: RawSidebars = serde_json::from_value(serde_json::json!({
            "tutorialSidebar": [
                "intro",
                { "type": "category", "label": "Getting Started", "items": ["a"] }
            ]
        }))
        .unwrap();

        let entries = raw["tutorialSidebar"].entries();
        assert!(matches!(&entries[0], RawNavEntry::Doc(id) if id == "intro"));
        let RawNavEntry::Object(category) = &entries[1] else {
            panic!("expected object entry");
        };
        assert_eq!(category.kind.as_deref(), Some("category"));
        assert_eq!(category.items.as_ref().unwrap().entries().len(), 1);
    }
}
