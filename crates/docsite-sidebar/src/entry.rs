//! Validated navigation entries.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Entry of a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    /// Leaf pointing at one document.
    Doc(DocRef),
    /// Labeled group of child entries.
    Category(Category),
    /// External link; not a document.
    Link(Link),
}

impl NavEntry {
    /// Doc entry without a label override.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(DocRef {
            id: id.into(),
            label: None,
        })
    }

    /// Display label, if the entry carries one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Doc(doc) => doc.label.as_deref(),
            Self::Category(category) => Some(&category.label),
            Self::Link(link) => Some(&link.label),
        }
    }
}

/// Reference to a document by content id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRef {
    pub id: String,
    /// Overrides the document title in the sidebar.
    pub label: Option<String>,
}

/// Category node. `items` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub items: Vec<NavEntry>,
    pub collapsed: Option<bool>,
    pub collapsible: Option<bool>,
}

/// External link shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Serialize for NavEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Doc(DocRef { id, label: None }) => serializer.serialize_str(id),
            Self::Doc(DocRef {
                id,
                label: Some(label),
            }) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "doc")?;
                map.serialize_entry("id", id)?;
                map.serialize_entry("label", label)?;
                map.end()
            }
            Self::Category(category) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "category")?;
                map.serialize_entry("label", &category.label)?;
                map.serialize_entry("items", &category.items)?;
                if let Some(collapsed) = category.collapsed {
                    map.serialize_entry("collapsed", &collapsed)?;
                }
                if let Some(collapsible) = category.collapsible {
                    map.serialize_entry("collapsible", &collapsible)?;
                }
                map.end()
            }
            Self::Link(link) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "link")?;
                map.serialize_entry("label", &link.label)?;
                map.serialize_entry("href", &link.href)?;
                map.end()
            }
        }
    }
}
