//! Data models for the Got It TUI
//!
//! This module contains the core data structures:
//! - Closed enums for screens, sub-states, level and reason ids
//! - The immutable content catalog
//! - The navigation state machine and per-screen option lists

pub mod catalog;
pub mod choices;
pub mod enums;
pub mod nav;

// Re-exports for convenient access
pub use catalog::{Accent, Catalog};
pub use choices::{choices, grid_columns, Choice};
pub use enums::{DiagnosticSub, Mood, ReentryPolicy, ReinforcementSub, Screen};
pub use nav::{Action, NavState};
