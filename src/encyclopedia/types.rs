//! Shared data types for world encyclopedia pages.
//!
//! Data sources:
//! - World records: JSON documents as served by the world catalog
//! - Category records: nested `species`, `locations`, `characters` and `events` arrays
//!
//! Records are deserialized from the upstream JSON shape (camelCase keys,
//! `imagine` as image alt text). Attribute values are kept as raw JSON so that
//! numbers, strings and missing values all pass through to display unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::encyclopedia::utils::prose::ListField;

/// Record identifier. Upstream ids may be numeric or textual; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => RecordId(s),
            RawId::Number(n) => RecordId(n.to_string()),
        })
    }
}

/// Root encyclopedia entry.
///
/// The four category collections and `lore` are `None` when the source omits
/// them (or sends `null`), which is distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub img: WorldImages,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub geo_dynamics: GeoDynamics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub magic_technology: MagicTechnology,
    #[serde(default)]
    pub species: Option<Vec<Inhabitant>>,
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
    #[serde(default)]
    pub characters: Option<Vec<Character>>,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub lore: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct WorldImages {
    #[serde(default, deserialize_with = "null_as_default")]
    pub landscape: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct GeoDynamics {
    #[serde(default)]
    pub shape: Value,
    #[serde(default)]
    pub size: Value,
    #[serde(default)]
    pub climate: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MagicTechnology {
    #[serde(default)]
    pub magic_lvl: Value,
    #[serde(default)]
    pub tech_lvl: Value,
    #[serde(default)]
    pub magic: ListField,
    #[serde(default)]
    pub technology: ListField,
}

/// Fields every category record carries.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct RecordBase {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub img: String,
    /// Image alt text (`imagine` upstream)
    #[serde(default, rename = "imagine", deserialize_with = "null_as_default")]
    pub img_alt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lore: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Inhabitant {
    #[serde(flatten)]
    pub base: RecordBase,
    #[serde(default)]
    pub alignment: Value,
    #[serde(default)]
    pub politics: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Location {
    #[serde(flatten)]
    pub base: RecordBase,
    #[serde(default)]
    pub climate: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Character {
    #[serde(flatten)]
    pub base: RecordBase,
    #[serde(default)]
    pub species: Value,
    #[serde(default)]
    pub alignment: Value,
    #[serde(default)]
    pub age: Value,
    #[serde(default)]
    pub location: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Event {
    #[serde(flatten)]
    pub base: RecordBase,
    #[serde(default)]
    pub time: Value,
    #[serde(default)]
    pub age: Value,
}

/// Deserialize a field that upstream may send as `null`; null becomes the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a raw attribute value for display.
///
/// Strings pass through, numbers and booleans use their JSON text, missing or
/// null values render empty. Arrays join their elements with commas.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
