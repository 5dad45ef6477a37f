//! Encyclopedia Module
//!
//! Turns world records into the view models behind a world detail page.
//!
//! ## Tabs
//! 1. Inhabitants - species living on the world
//! 2. Locations - notable places
//! 3. Characters - notable people
//! 4. Events - dated happenings
//! 5. History - narrative lore paragraphs

pub mod types;
pub mod utils;
pub mod view_models;
pub mod view_builder;
pub mod generator;

pub use types::{Character, Event, Inhabitant, Location, RecordBase, RecordId, World};
pub use utils::prose::{list_details, ListField};
pub use view_models::*;
pub use view_builder::{build_detail, build_tab_blocks, build_world_page, CategoryRecord};
pub use generator::EncyclopediaGenerator;
