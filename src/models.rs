//! Frontend Models
//!
//! Data structures matching the items API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque item identifier.
///
/// The API may send either a number or a string; both round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// Body of `GET /api/items`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Body of `POST /api/items`
#[derive(Debug, Serialize)]
pub struct CreateItem<'a> {
    pub title: &'a str,
}

/// Optional body of non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Color theme applied to the document root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_list_accepts_numeric_and_string_ids() {
        let json = r#"{"items":[{"id":1,"title":"A","done":false},{"id":"b-2","title":"B","done":true}]}"#;
        let list: ItemList = serde_json::from_str(json).unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].id, ItemId::Number(1));
        assert_eq!(list.items[1].id, ItemId::Text("b-2".to_string()));
        assert_eq!(list.items[1].id.to_string(), "b-2");
        assert!(list.items[1].done);
    }

    #[test]
    fn test_create_item_body() {
        let body = serde_json::to_string(&CreateItem { title: "Buy milk" }).unwrap();
        assert_eq!(body, r#"{"title":"Buy milk"}"#);
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }
}
