//! # Catalog Source
//!
//! The catalog is the read-only collaborator the engine runs against: an
//! ordered collection of [`Item`]s, fully materialized before a session
//! starts and immutable for the session's lifetime. Insertion order is
//! meaningful—it is the order equal sort keys keep through the pipeline's
//! stable sort.
//!
//! Loading and shape validation belong to whoever supplies the data; this
//! module only offers the JSON convenience loaders the CLI uses.

use crate::error::Result;
use crate::model::Item;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load a catalog from a JSON file containing an array of items.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct years present in the catalog, newest first.
    ///
    /// Feeds the date filter control in the presentation layer.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.items.iter().map(|item| item.date).collect();
        years.sort_unstable();
        years.dedup();
        years.reverse();
        years
    }

    /// Distinct media kinds, case-insensitively deduplicated (first
    /// spelling wins), sorted alphabetically.
    pub fn media_kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = Vec::new();
        for item in &self.items {
            if !kinds.iter().any(|k| k.eq_ignore_ascii_case(&item.media)) {
                kinds.push(item.media.clone());
            }
        }
        kinds.sort_by_key(|k| k.to_lowercase());
        kinds
    }
}
