//! Renderable directory listings

use indexmap::IndexMap;
use serde::Serialize;

/// One screen worth of list items
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Directory {
    /// Heading of the listing
    pub category: String,
    /// Kind of content shown, `videos` or `movies`
    pub content: String,
    pub items: Vec<ListItem>,
}

impl Directory {
    pub fn new(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: content.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }
}

/// One entry of a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListItem {
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label2: String,
    pub info: InfoTag,
    /// Artwork by role (`icon`, `thumb`, `poster`, `fanart`)
    pub art: IndexMap<String, String>,
    /// Additional thumbnails
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_art: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context_menu: Vec<ContextItem>,
    /// Navigation target, empty for leaf entries
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub is_folder: bool,
}

impl ListItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// A navigable folder entry
    pub fn folder(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            is_folder: true,
            ..Self::default()
        }
    }
}

/// Descriptive metadata of a list item
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InfoTag {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Entry of a context menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextItem {
    pub label: String,
    pub url: String,
}

impl ContextItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}
