//! View Builder - Converts world records to view models
//!
//! Pure functions: the same `World` always produces the same page data.

use crate::encyclopedia::types::{
    display_value, Character, Event, Inhabitant, Location, RecordBase, World,
};
use crate::encyclopedia::utils::prose::list_details;
use crate::encyclopedia::view_models::*;

/// Build complete detail page data for one world.
pub fn build_world_page(world: &World) -> WorldPageData {
    WorldPageData {
        overview: build_overview(world),
        tabs: build_tab_blocks(world),
    }
}

// ============================================================================
// Category records
// ============================================================================

/// A category record that can be shown as a detail card.
pub trait CategoryRecord {
    fn base(&self) -> &RecordBase;

    /// Labeled attribute lines, in display order.
    fn additional_details(&self) -> Vec<String>;
}

impl CategoryRecord for Inhabitant {
    fn base(&self) -> &RecordBase {
        &self.base
    }

    fn additional_details(&self) -> Vec<String> {
        vec![
            labeled("Alignment", &display_value(&self.alignment)),
            labeled("Politics", &display_value(&self.politics)),
        ]
    }
}

impl CategoryRecord for Location {
    fn base(&self) -> &RecordBase {
        &self.base
    }

    fn additional_details(&self) -> Vec<String> {
        vec![labeled("Climate", &display_value(&self.climate))]
    }
}

impl CategoryRecord for Character {
    fn base(&self) -> &RecordBase {
        &self.base
    }

    fn additional_details(&self) -> Vec<String> {
        vec![
            labeled("Species", &display_value(&self.species)),
            labeled("Alignment", &display_value(&self.alignment)),
            labeled("Age", &display_value(&self.age)),
            labeled("Location", &display_value(&self.location)),
        ]
    }
}

impl CategoryRecord for Event {
    fn base(&self) -> &RecordBase {
        &self.base
    }

    fn additional_details(&self) -> Vec<String> {
        vec![format!(
            "{} in the age of {}",
            display_value(&self.time),
            display_value(&self.age)
        )]
    }
}

fn labeled(label: &str, value: &str) -> String {
    format!("{}: {}", label, value)
}

/// Project one category record onto the uniform detail shape.
pub fn build_detail<R: CategoryRecord>(record: &R) -> DetailViewModel {
    let base = record.base();
    DetailViewModel {
        id: base.id.to_string(),
        image: base.img.clone(),
        image_alt: base.img_alt.clone(),
        name: base.name.clone(),
        additional_details: record.additional_details(),
        lore: base.lore.clone(),
    }
}

// ============================================================================
// Tabs
// ============================================================================

/// Build the five tab blocks for a world.
///
/// Absent collections fall back to the "unknown" sentence; present collections
/// (even empty ones) map every record in source order.
pub fn build_tab_blocks(world: &World) -> TabBlocks {
    TabBlocks::new([
        details_or_unknown(world.species.as_deref(), TabKey::Inhabitants),
        details_or_unknown(world.locations.as_deref(), TabKey::Locations),
        details_or_unknown(world.characters.as_deref(), TabKey::Characters),
        details_or_unknown(world.events.as_deref(), TabKey::Events),
        build_history(world.lore.as_deref()),
    ])
}

fn details_or_unknown<R: CategoryRecord>(records: Option<&[R]>, key: TabKey) -> TabContent {
    match records {
        Some(records) => TabContent::Details(records.iter().map(build_detail).collect()),
        None => TabContent::unknown(key),
    }
}

fn build_history(lore: Option<&[String]>) -> TabContent {
    match lore {
        Some(paragraphs) => TabContent::Paragraphs(paragraphs.to_vec()),
        None => TabContent::unknown(TabKey::History),
    }
}

// ============================================================================
// Overview
// ============================================================================

fn build_overview(world: &World) -> WorldOverview {
    let geo = &world.geo_dynamics;
    let mt = &world.magic_technology;

    WorldOverview {
        id: world.id.to_string(),
        name: world.name.clone(),
        landscape: world.img.landscape.clone(),
        landscape_alt: world.name.clone(),
        geo: vec![
            LabeledValue { label: "Shape".to_string(), value: display_value(&geo.shape) },
            LabeledValue { label: "Size".to_string(), value: display_value(&geo.size) },
            LabeledValue { label: "Climate".to_string(), value: display_value(&geo.climate) },
        ],
        magic: PowerPanel {
            title: "Magic".to_string(),
            level: display_value(&mt.magic_lvl),
            details: list_details(&mt.magic),
        },
        technology: PowerPanel {
            title: "Technology".to_string(),
            level: display_value(&mt.tech_lvl),
            details: list_details(&mt.technology),
        },
        description: world.description.clone(),
    }
}
