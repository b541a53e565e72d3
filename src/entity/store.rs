// src/entity/store.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Category, Item};

/// The full set of items, keyed by id.
///
/// Serializes as a bare JSON object (`{"<id>": {...}, ...}`). Iteration
/// follows id order, which for same-width millisecond ids is creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemStore {
    items: BTreeMap<String, Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn insert(&mut self, id: String, item: Item) -> Option<Item> {
        self.items.insert(id, item)
    }

    pub fn remove(&mut self, id: &str) -> Option<Item> {
        self.items.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Items belonging to `category`, in store order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = (&str, &Item)> {
        self.iter().filter(move |(_, item)| item.category == category)
    }

    /// Returns an id derived from `now_millis` that is not yet used.
    ///
    /// Bumps by one millisecond while the candidate is taken, so two adds in
    /// the same millisecond get distinct ids.
    pub fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

impl FromIterator<(String, Item)> for ItemStore {
    fn from_iter<T: IntoIterator<Item = (String, Item)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
