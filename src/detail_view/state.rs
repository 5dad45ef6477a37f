//! Fetch state of the detail view.

use serde::Serialize;

use crate::encyclopedia::World;
use crate::lookup::LookupError;

/// Failure kinds surfaced to the presentation layer. All failures other than
/// "not found" collapse into `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Generic,
}

/// Outcome of the lookup for the current id.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Ready(Box<World>),
    NotFound,
    Error(ErrorKind),
}

impl FetchState {
    pub fn from_result(result: Result<World, LookupError>) -> Self {
        match result {
            Ok(world) => FetchState::Ready(Box::new(world)),
            Err(LookupError::NotFound) => FetchState::NotFound,
            Err(LookupError::Failed(_)) => FetchState::Error(ErrorKind::Generic),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchState::NotFound)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }

    pub fn world(&self) -> Option<&World> {
        match self {
            FetchState::Ready(world) => Some(world.as_ref()),
            _ => None,
        }
    }

    /// Short name for logs and API payloads.
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Loading => "loading",
            FetchState::Ready(_) => "ready",
            FetchState::NotFound => "not_found",
            FetchState::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_ready() {
        let state = FetchState::from_result(Ok(World::default()));
        assert!(state.is_ready());
        assert!(!state.is_not_found());
        assert!(!state.is_error());
    }

    #[test]
    fn test_not_found_and_generic_are_exclusive() {
        let not_found = FetchState::from_result(Err(LookupError::NotFound));
        let failed = FetchState::from_result(Err(LookupError::Failed("timeout".into())));

        assert!(not_found.is_not_found() && !not_found.is_error());
        assert!(failed.is_error() && !failed.is_not_found());
        assert_eq!(failed, FetchState::Error(ErrorKind::Generic));
    }

    #[test]
    fn test_default_is_loading() {
        assert!(FetchState::default().is_loading());
        assert_eq!(FetchState::default().world(), None);
    }
}
