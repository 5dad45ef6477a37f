//! View Models for world encyclopedia pages
//!
//! Structured data types handed to the presentation layer (JSON API,
//! markdown generator). Everything here is plain data; see `view_builder`
//! for how records map onto it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// ============================================================================
// Tabs
// ============================================================================

/// The five fixed tab keys, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TabKey {
    Inhabitants,
    Locations,
    Characters,
    Events,
    History,
}

impl TabKey {
    pub const ALL: [TabKey; 5] = [
        TabKey::Inhabitants,
        TabKey::Locations,
        TabKey::Characters,
        TabKey::Events,
        TabKey::History,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabKey::Inhabitants => "Inhabitants",
            TabKey::Locations => "Locations",
            TabKey::Characters => "Characters",
            TabKey::Events => "Events",
            TabKey::History => "History",
        }
    }

    /// Subject used in the "unknown" fallback sentence.
    pub fn subject(&self) -> &'static str {
        match self {
            TabKey::Inhabitants => "inhabitants",
            TabKey::Locations => "locations",
            TabKey::Characters => "characters",
            TabKey::Events => "events",
            TabKey::History => "history",
        }
    }

    pub fn aria_label(&self) -> String {
        format!("Open {} tab", self.as_str())
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabKey {
    type Err = ();

    /// Exact, case-sensitive match on the tab name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabKey::ALL.into_iter().find(|key| key.as_str() == s).ok_or(())
    }
}

/// Content of one tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TabContent {
    /// One card per category record, in source order (possibly none)
    Details(Vec<DetailViewModel>),
    /// Narrative paragraphs, in source order
    Paragraphs(Vec<String>),
    /// Fallback sentence when the source collection is absent
    Unknown(String),
}

impl TabContent {
    pub fn unknown(key: TabKey) -> Self {
        TabContent::Unknown(fallback_message(key.subject()))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TabContent::Unknown(_))
    }
}

pub fn fallback_message(subject: &str) -> String {
    format!("This world's {} is unknown.", subject)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabBlock {
    pub key: TabKey,
    pub content: TabContent,
}

/// The fixed set of five tab blocks. Keys and order never vary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TabBlocks([TabBlock; 5]);

impl TabBlocks {
    /// Assemble from per-key contents. Position `i` belongs to `TabKey::ALL[i]`.
    pub fn new(contents: [TabContent; 5]) -> Self {
        let [inhabitants, locations, characters, events, history] = contents;
        TabBlocks([
            TabBlock { key: TabKey::Inhabitants, content: inhabitants },
            TabBlock { key: TabKey::Locations, content: locations },
            TabBlock { key: TabKey::Characters, content: characters },
            TabBlock { key: TabKey::Events, content: events },
            TabBlock { key: TabKey::History, content: history },
        ])
    }

    pub fn keys(&self) -> [TabKey; 5] {
        TabKey::ALL
    }

    pub fn get(&self, key: TabKey) -> &TabContent {
        &self.0[key as usize].content
    }

    /// Content for a free-form tab name; unknown names have none.
    pub fn by_name(&self, name: &str) -> Option<&TabContent> {
        name.parse::<TabKey>().ok().map(|key| self.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabBlock> {
        self.0.iter()
    }
}

/// One entry of the tab strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabStripItem {
    pub key: TabKey,
    pub aria_label: String,
    pub active: bool,
}

// ============================================================================
// Category details
// ============================================================================

/// Uniform display shape for inhabitants, locations, characters and events.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DetailViewModel {
    pub id: String,
    pub image: String,
    pub image_alt: String,
    pub name: String,
    pub additional_details: Vec<String>,
    pub lore: String,
}

// ============================================================================
// World overview
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct WorldOverview {
    pub id: String,
    pub name: String,
    pub landscape: String,
    pub landscape_alt: String,
    pub geo: Vec<LabeledValue>,
    pub magic: PowerPanel,
    pub technology: PowerPanel,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

/// Magic or technology panel: a level and the prose list of its disciplines.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PowerPanel {
    pub title: String,
    pub level: String,
    pub details: Option<String>,
}

impl PowerPanel {
    pub fn level_display(&self) -> String {
        format!("Level {}", self.level)
    }
}

/// Complete detail page for one world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldPageData {
    pub overview: WorldOverview,
    pub tabs: TabBlocks,
}

/// Browse-list card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldPreview {
    pub id: String,
    pub name: String,
    pub landscape: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_key_order() {
        let names: Vec<&str> = TabKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["Inhabitants", "Locations", "Characters", "Events", "History"]);
    }

    #[test]
    fn test_tab_key_parse_is_exact() {
        assert_eq!("Events".parse::<TabKey>(), Ok(TabKey::Events));
        assert!("events".parse::<TabKey>().is_err());
        assert!("Weather".parse::<TabKey>().is_err());
    }

    #[test]
    fn test_blocks_keep_position() {
        let blocks = TabBlocks::new([
            TabContent::Details(vec![]),
            TabContent::unknown(TabKey::Locations),
            TabContent::Details(vec![]),
            TabContent::Details(vec![]),
            TabContent::Paragraphs(vec!["Once.".to_string()]),
        ]);

        let keys: Vec<TabKey> = blocks.iter().map(|b| b.key).collect();
        assert_eq!(keys, TabKey::ALL.to_vec());
        assert_eq!(
            blocks.get(TabKey::Locations),
            &TabContent::Unknown("This world's locations is unknown.".to_string())
        );
        assert!(blocks.by_name("Nope").is_none());
    }

    #[test]
    fn test_aria_label() {
        assert_eq!(TabKey::History.aria_label(), "Open History tab");
    }
}
