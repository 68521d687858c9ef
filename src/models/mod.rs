//! Data models for the number pad.
//!
//! This module contains the core data structures used throughout the crate.
//! Models are designed to be independent of UI and business logic.

pub mod grid;
pub mod key_code;

// Re-export all model types
pub use grid::{GridSlot, PadGrid};
pub use key_code::KeyCode;
