//! Single-world detail view: fetch state, tab selection and the controller
//! tying them to an injected lookup.

pub mod state;
pub mod tabs;
pub mod controller;

pub use controller::{DetailView, LookupTicket, Resolution};
pub use state::{ErrorKind, FetchState};
pub use tabs::TabSelector;
