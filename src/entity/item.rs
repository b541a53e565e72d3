// src/entity/item.rs
use serde::{Deserialize, Serialize};

use crate::error::TodoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    /// Prompt shown in the input field while this category is active.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Category::Work => "Add a To Do",
            Category::Travel => "Where do you want to go?",
        }
    }

    /// The persisted `working` flag.
    pub fn is_working(&self) -> bool {
        matches!(self, Category::Work)
    }

    pub fn from_working(working: bool) -> Self {
        if working {
            Category::Work
        } else {
            Category::Travel
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Work => write!(f, "Work"),
            Category::Travel => write!(f, "Travel"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "travel" => Ok(Category::Travel),
            _ => Err(TodoError::InvalidCategory(s.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single to-do entry. Stored as `{"text": ..., "working": bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    #[serde(rename = "working", with = "working_flag")]
    pub category: Category,
}

impl Item {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

mod working_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Category;

    pub fn serialize<S: Serializer>(category: &Category, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(category.is_working())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Category, D::Error> {
        bool::deserialize(deserializer).map(Category::from_working)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!("Travel".parse::<Category>().unwrap(), Category::Travel);
        assert_eq!(" TRAVEL ".parse::<Category>().unwrap(), Category::Travel);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "home".parse::<Category>().unwrap_err();
        assert!(matches!(err, TodoError::InvalidCategory(ref s) if s == "home"));
    }

    #[test]
    fn test_placeholder_per_category() {
        assert_eq!(Category::Work.placeholder(), "Add a To Do");
        assert_eq!(Category::Travel.placeholder(), "Where do you want to go?");
    }

    #[test]
    fn test_item_serializes_working_flag() {
        let item = Item::new("Milk", Category::Work);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Milk", "working": true}));

        let item = Item::new("Lisbon", Category::Travel);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Lisbon", "working": false}));
    }

    #[test]
    fn test_item_deserializes_working_flag() {
        let item: Item = serde_json::from_str(r#"{"text":"Kyoto","working":false}"#).unwrap();
        assert_eq!(item.category, Category::Travel);
        assert_eq!(item.text, "Kyoto");
    }
}
