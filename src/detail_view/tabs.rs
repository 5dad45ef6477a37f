//! Active tab tracking.

use crate::encyclopedia::{TabBlocks, TabContent, TabKey, TabStripItem};

/// Tracks which tab is active. Any name is accepted; names outside the fixed
/// set simply select no content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSelector {
    active: String,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, name: impl Into<String>) {
        self.active = name.into();
    }

    /// Activate the tab shown after a successful lookup.
    pub fn activate_default(&mut self) {
        self.select(TabKey::Inhabitants.as_str());
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Active tab name; empty when nothing is selected.
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn keys(&self) -> [TabKey; 5] {
        TabKey::ALL
    }

    pub fn content<'a>(&self, blocks: &'a TabBlocks) -> Option<&'a TabContent> {
        blocks.by_name(&self.active)
    }

    pub fn strip(&self) -> Vec<TabStripItem> {
        TabKey::ALL
            .iter()
            .map(|key| TabStripItem {
                key: *key,
                aria_label: key.aria_label(),
                active: key.as_str() == self.active,
            })
            .collect()
    }
}
