//! UI module for the Got It TUI
//!
//! Rendering is a pure function of a [`View`] snapshot: the navigation
//! state value, the catalog and a few cosmetic settings. Nothing here
//! mutates application state.

mod cards;
mod class;
mod diagnostic;
mod helpers;
mod home;
mod reinforcement;
mod render;
mod schedule;

use crate::models::{Catalog, NavState};

pub use render::render;

/// Everything the renderer reads
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub nav: &'a NavState,
    pub catalog: &'a Catalog,
    /// Focused option index
    pub cursor: usize,
    /// Animation clock
    pub tick: u64,
    /// Columns the content is shifted right by during a transition
    pub slide_offset: u16,
    pub animations: bool,
}
