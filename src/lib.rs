//! Number Pad TUI Library
//!
//! This library provides a clickable number-pad widget for terminal
//! applications: a fixed grid of keys (digits, navigation arrows,
//! enter/cancel/clear, decimal point, plus/minus) that dispatches typed
//! press/release notifications to registered observer callbacks.

// Module declarations
pub mod config;
pub mod constants;
pub mod events;
pub mod models;
pub mod tui;
