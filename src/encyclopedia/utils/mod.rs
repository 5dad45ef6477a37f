//! Utility modules for encyclopedia pages.

pub mod prose;

pub use prose::*;
