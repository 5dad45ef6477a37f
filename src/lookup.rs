//! Lookup collaborator
//!
//! Resolves a world id to a `World` or a failure. Failures are split in two:
//! a distinguished "not found" signal and everything else.

use async_trait::async_trait;
use thiserror::Error;

use crate::encyclopedia::World;

/// Message upstream sources use to signal a missing record.
pub const NOT_FOUND_MESSAGE: &str = "404";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("lookup failed: {0}")]
    Failed(String),
}

impl LookupError {
    /// Classify an upstream failure message. Only `"404"` means not found.
    pub fn from_message(message: &str) -> Self {
        if message == NOT_FOUND_MESSAGE {
            LookupError::NotFound
        } else {
            LookupError::Failed(message.to_string())
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}

/// Asynchronous world lookup, injected into the detail view.
#[async_trait]
pub trait WorldLookup: Send + Sync {
    async fn fetch_world_detail(&self, id: &str) -> Result<World, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_message() {
        assert_eq!(LookupError::from_message("404"), LookupError::NotFound);
        assert_eq!(
            LookupError::from_message("500"),
            LookupError::Failed("500".to_string())
        );
        assert!(!LookupError::from_message("Not Found").is_not_found());
    }

    #[test]
    fn test_not_found_displays_signal() {
        assert_eq!(LookupError::NotFound.to_string(), "404");
    }
}
