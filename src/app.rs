//! In-memory view-state for the two to-do lists.
//!
//! `TodoApp` owns the item store, the active category and the input draft.
//! Every mutation rewrites the whole store through the persistence layer.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::entity::{Category, Item, ItemStore};
use crate::storage::{self, Storage};

pub const DELETE_TITLE: &str = "Delete To Do";
pub const DELETE_MESSAGE: &str = "Are you sure?";

/// A two-choice prompt ("Cancel" / "I'm sure").
///
/// Returns `true` only when the user picked the confirming choice.
pub trait Confirm {
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

impl<F: FnMut(&str, &str) -> bool> Confirm for F {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self(title, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    Removed(Item),
    Cancelled,
    NotFound,
}

/// One row of the filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub text: String,
    pub category: Category,
}

pub struct TodoApp<S: Storage> {
    storage: S,
    key: String,
    items: ItemStore,
    category: Category,
    draft: String,
    phase: Phase,
}

impl<S: Storage> TodoApp<S> {
    /// A new app in the `Loading` phase, persisting under [`storage::STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, storage::STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            items: ItemStore::new(),
            category: Category::default(),
            draft: String::new(),
            phase: Phase::Loading,
        }
    }

    /// Replaces the in-memory store with the persisted one.
    pub fn load(&mut self) {
        self.phase = Phase::Loading;
        self.items = storage::load(&self.storage, &self.key);
        self.phase = Phase::Loaded;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn placeholder(&self) -> &'static str {
        self.category.placeholder()
    }

    /// Items of the active category.
    pub fn visible_items(&self) -> Vec<ItemView> {
        self.items
            .in_category(self.category)
            .map(|(id, item)| ItemView {
                id: id.to_string(),
                text: item.text.clone(),
                category: item.category,
            })
            .collect()
    }

    /// Adds the draft under the active category; the draft is cleared only
    /// when an item was added.
    pub fn submit_draft(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.draft);
        let id = self.add_item(&text, self.category);
        if id.is_none() {
            self.draft = text;
        }
        id
    }

    /// Adds an item and persists the store. Empty text is a no-op.
    pub fn add_item(&mut self, text: &str, category: Category) -> Option<String> {
        self.add_item_at(text, category, Utc::now().timestamp_millis())
    }

    pub fn add_item_at(&mut self, text: &str, category: Category, now_millis: i64) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        let id = self.items.next_id(now_millis);
        self.items.insert(id.clone(), Item::new(text, category));
        info!(id = %id, category = %category, "added to-do");
        self.persist();
        Some(id)
    }

    /// Removes `id` after the user confirms, then persists the store.
    ///
    /// Unknown ids return `NotFound` without prompting.
    pub fn delete_item<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> Deletion {
        if !self.items.contains(id) {
            return Deletion::NotFound;
        }

        if !confirm.confirm(DELETE_TITLE, DELETE_MESSAGE) {
            return Deletion::Cancelled;
        }

        match self.items.remove(id) {
            Some(item) => {
                info!(id, "deleted to-do");
                self.persist();
                Deletion::Removed(item)
            }
            None => Deletion::NotFound,
        }
    }

    fn persist(&mut self) {
        storage::save(&mut self.storage, &self.key, &self.items);
    }
}
