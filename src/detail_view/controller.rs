//! Detail view controller
//!
//! Drives the fetch state from an injected `WorldLookup`. Every lookup is
//! tagged with a generation number; a resolution is applied only if no newer
//! lookup has started since, so a slow response for an old id can never
//! overwrite the page for the current one.

use std::sync::Arc;

use crate::detail_view::state::FetchState;
use crate::detail_view::tabs::TabSelector;
use crate::encyclopedia::{
    build_tab_blocks, build_world_page, TabContent, TabKey, TabStripItem, World, WorldPageData,
};
use crate::lookup::{LookupError, WorldLookup};

/// Handle for one in-flight lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    id: String,
    generation: u64,
}

impl LookupTicket {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Perform the lookup. Does not touch the view, so several tickets can be
    /// awaited concurrently.
    pub async fn run<L: WorldLookup + ?Sized>(self, lookup: &L) -> Resolution {
        let result = lookup.fetch_world_detail(&self.id).await;
        Resolution { ticket: self, result }
    }

    pub fn into_resolution(self, result: Result<World, LookupError>) -> Resolution {
        Resolution { ticket: self, result }
    }
}

/// A finished lookup waiting to be applied to the view.
#[derive(Debug)]
pub struct Resolution {
    ticket: LookupTicket,
    result: Result<World, LookupError>,
}

impl Resolution {
    pub fn ticket(&self) -> &LookupTicket {
        &self.ticket
    }
}

pub struct DetailView<L: ?Sized> {
    lookup: Arc<L>,
    current_id: Option<String>,
    generation: u64,
    state: FetchState,
    tabs: TabSelector,
}

impl<L: WorldLookup + ?Sized> DetailView<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            current_id: None,
            generation: 0,
            state: FetchState::Loading,
            tabs: TabSelector::new(),
        }
    }

    pub fn lookup(&self) -> Arc<L> {
        Arc::clone(&self.lookup)
    }

    /// Start a lookup for `id`, superseding any lookup still in flight.
    pub fn begin(&mut self, id: impl Into<String>) -> LookupTicket {
        let id = id.into();
        self.generation += 1;
        self.state = FetchState::Loading;
        self.tabs.clear();
        self.current_id = Some(id.clone());

        tracing::debug!(world_id = %id, generation = self.generation, "Starting world lookup");

        LookupTicket {
            id,
            generation: self.generation,
        }
    }

    /// Apply a finished lookup. Returns `false` if it was superseded and dropped.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        let Resolution { ticket, result } = resolution;

        if ticket.generation != self.generation {
            tracing::debug!(
                world_id = %ticket.id,
                generation = ticket.generation,
                current_generation = self.generation,
                "Dropping stale world lookup"
            );
            return false;
        }

        self.state = FetchState::from_result(result);
        if self.state.is_ready() {
            self.tabs.activate_default();
        }

        match &self.state {
            FetchState::Ready(world) => tracing::info!(world_id = %ticket.id, name = %world.name, "World loaded"),
            FetchState::NotFound => tracing::info!(world_id = %ticket.id, "World not found"),
            FetchState::Error(kind) => tracing::warn!(world_id = %ticket.id, ?kind, "World lookup failed"),
            FetchState::Loading => {}
        }
        true
    }

    /// Look up `id` and apply the result.
    pub async fn load(&mut self, id: impl Into<String>) -> &FetchState {
        let ticket = self.begin(id);
        let lookup = self.lookup();
        let resolution = ticket.run(lookup.as_ref()).await;
        self.resolve(resolution);
        &self.state
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn tab_keys(&self) -> [TabKey; 5] {
        self.tabs.keys()
    }

    pub fn tab_strip(&self) -> Vec<TabStripItem> {
        self.tabs.strip()
    }

    pub fn active_tab(&self) -> &str {
        self.tabs.active()
    }

    pub fn select(&mut self, name: impl Into<String>) {
        self.tabs.select(name);
    }

    /// Full page data, available once the current lookup succeeded.
    pub fn page(&self) -> Option<WorldPageData> {
        self.state.world().map(build_world_page)
    }

    /// Content of the active tab, if any.
    pub fn active_content(&self) -> Option<TabContent> {
        let world = self.state.world()?;
        let blocks = build_tab_blocks(world);
        self.tabs.content(&blocks).cloned()
    }
}
