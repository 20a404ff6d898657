//! Catalog merge: authored categories plus auto-detected ones.
//!
//! Categories are keyed by case-insensitive name, items by exact path. The
//! merged list is sorted by category name, then item name, with [`locale_cmp`].
//! Each merged category gets a [`CategoryId`] that the view layer uses as its
//! join key; two names that fold to the same token still get distinct ids.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::collate::locale_cmp;
use crate::model::{Category, Item};

/// Derives the alphabetic filter token for a category name.
///
/// `"Machine Learning!!"` becomes `"machinelearning"`.
#[must_use]
pub fn category_token(name: &str) -> String {
    name.to_lowercase().chars().filter(char::is_ascii_lowercase).collect()
}

/// Merges authored and detected categories into one sorted list.
///
/// Authored metadata wins for a matched category (its name spelling is kept).
/// Items already present by path are skipped, including repeats within one side.
#[must_use]
pub fn merge_categories(authored: Vec<Category>, detected: Vec<Category>) -> Vec<Category> {
    let mut merged: Vec<Category> = Vec::with_capacity(authored.len() + detected.len());
    let mut seen_paths: Vec<HashSet<String>> = Vec::with_capacity(merged.capacity());

    for incoming in authored.into_iter().chain(detected) {
        let key = incoming.name.to_lowercase();
        let index = match merged.iter().position(|c| c.name.to_lowercase() == key) {
            Some(index) => index,
            None => {
                merged.push(Category { name: incoming.name, items: Vec::new() });
                seen_paths.push(HashSet::new());
                merged.len() - 1
            },
        };
        let (Some(target), Some(paths)) = (merged.get_mut(index), seen_paths.get_mut(index))
        else {
            continue;
        };
        for item in incoming.items {
            if paths.insert(item.path.clone()) {
                target.items.push(item);
            }
        }
    }

    sort_categories(&mut merged);
    merged
}

/// Sorts categories by name and the items inside each by name.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    for category in categories.iter_mut() {
        category.items.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    }
}

/// Stable identifier of a category within one merged catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One rendered category: its id plus the merged category data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSection {
    pub id: CategoryId,
    pub name: String,
    pub items: Vec<Item>,
}

/// The full merged, sorted catalog for one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Merges both sides and assigns ids.
    #[must_use]
    pub fn merge(authored: Vec<Category>, detected: Vec<Category>) -> Self {
        Self::from_sorted(merge_categories(authored, detected))
    }

    /// Assigns ids to an already merged and sorted list.
    #[must_use]
    pub fn from_sorted(categories: Vec<Category>) -> Self {
        let sections = categories
            .into_iter()
            .enumerate()
            .map(|(index, category)| {
                let token = category_token(&category.name);
                let token = if token.is_empty() { "category".to_owned() } else { token };
                CatalogSection {
                    id: CategoryId(format!("{token}-{index}")),
                    name: category.name,
                    items: category.items,
                }
            })
            .collect();
        Self { sections }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&CatalogSection> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    /// Finds an item by exact path.
    #[must_use]
    pub fn find_item(&self, path: &str) -> Option<&Item> {
        self.sections.iter().flat_map(|s| s.items.iter()).find(|item| item.path == path)
    }
}
