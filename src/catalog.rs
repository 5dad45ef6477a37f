//! World Catalog
//!
//! In-memory lookup collaborator backed by a JSON array of world records.
//! Loaded once at startup; lookups are O(1) via an id index.

use std::path::Path;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::encyclopedia::{World, WorldPreview};
use crate::lookup::{LookupError, WorldLookup};

/// Number of worlds shown in the browse grid.
pub const GRID_PREVIEW_LIMIT: usize = 9;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate world id {0}")]
    DuplicateId(String),
}

pub struct WorldCatalog {
    /// Worlds in file order
    worlds: Vec<World>,
    /// World id -> position in `worlds`
    index: FxHashMap<String, usize>,
}

impl WorldCatalog {
    pub fn new(worlds: Vec<World>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        for (pos, world) in worlds.iter().enumerate() {
            if index.insert(world.id.to_string(), pos).is_some() {
                return Err(CatalogError::DuplicateId(world.id.to_string()));
            }
        }
        Ok(Self { worlds, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let worlds: Vec<World> = serde_json::from_str(json)?;
        Self::new(worlds)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} worlds from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&World> {
        self.index.get(id).map(|&pos| &self.worlds[pos])
    }

    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// Browse grid cards: the first `GRID_PREVIEW_LIMIT` worlds in catalog order.
    pub fn grid_previews(&self) -> Vec<WorldPreview> {
        self.worlds
            .iter()
            .take(GRID_PREVIEW_LIMIT)
            .map(|w| WorldPreview {
                id: w.id.to_string(),
                name: w.name.clone(),
                landscape: w.img.landscape.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl WorldLookup for WorldCatalog {
    async fn fetch_world_detail(&self, id: &str) -> Result<World, LookupError> {
        self.get(id).cloned().ok_or(LookupError::NotFound)
    }
}
