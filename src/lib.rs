//! World Encyclopedia
//!
//! Derives the single-world detail page of a browsable world encyclopedia.
//!
//! - `encyclopedia/`: record types, view models and the pure page builders
//! - `lookup`: the asynchronous lookup collaborator seam
//! - `catalog`: an in-memory lookup backed by a JSON catalog file
//! - `detail_view/`: fetch state machine and tab selection
//! - `api_server` (feature `api`): JSON endpoints over the detail view

pub mod encyclopedia;
pub mod lookup;
pub mod catalog;
pub mod detail_view;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::{CatalogError, WorldCatalog};
pub use detail_view::{DetailView, ErrorKind, FetchState, TabSelector};
pub use encyclopedia::{build_world_page, list_details, ListField, TabBlocks, TabContent, TabKey, World, WorldPageData};
pub use lookup::{LookupError, WorldLookup};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
