//! Prose helpers for free-text summaries.
//!
//! `list_details` turns a short list such as `["fire", "ice", "wind"]` into a
//! sentence fragment: "Fire, ice and wind".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::encyclopedia::types::display_value;

/// A list-valued field as it arrives from a world record.
///
/// Absent, present-but-not-a-list and present lists (possibly empty) are
/// separate states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListField {
    #[default]
    Absent,
    NotAList(Value),
    Items(Vec<String>),
}

impl ListField {
    pub fn items(items: &[&str]) -> Self {
        ListField::Items(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<'de> Deserialize<'de> for ListField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => ListField::Absent,
            Value::Array(items) => ListField::Items(items.iter().map(display_value).collect()),
            other => ListField::NotAList(other),
        })
    }
}

impl Serialize for ListField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ListField::Absent => serializer.serialize_none(),
            ListField::NotAList(value) => value.serialize(serializer),
            ListField::Items(items) => items.serialize(serializer),
        }
    }
}

/// Join a list into a capitalized sentence fragment.
///
/// Returns `None` ("no content") unless the field holds a list. An empty list
/// yields `Some("")`. Only the first character keeps upper case; every other
/// character is lowercased, including interior proper nouns.
pub fn list_details(field: &ListField) -> Option<String> {
    let items = match field {
        ListField::Items(items) => items,
        ListField::Absent | ListField::NotAList(_) => return None,
    };

    let fragment = match items.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    };

    Some(capitalize_first(&fragment))
}

/// Uppercase the first character and lowercase the rest.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_uppercase(), rest.to_lowercase())
        }
    }
}
