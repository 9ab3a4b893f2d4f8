//! Navigation state machine
//!
//! `NavState` is a plain value: every transition takes `&self` and returns
//! the next state, so the transition table can be exercised without a
//! terminal. All transitions are total.

use crate::models::catalog::Catalog;
use crate::models::enums::{DiagnosticSub, LevelId, ReentryPolicy, ReinforcementSub, Screen};

/// Current screen plus the nested selection of each flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub screen: Screen,
    pub diagnostic: DiagnosticSub,
    pub reinforcement: ReinforcementSub,
    pub selected_level: Option<LevelId>,
    /// Set when the loyalty-flagged level is picked; never cleared
    pub show_loyalty_message: bool,
}

/// Everything a tap can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoTo(Screen),
    GoBack,
    SelectDiagnostic(DiagnosticSub),
    SelectReinforcement(ReinforcementSub),
    SelectClassLevel(LevelId),
    /// Placeholder option with no effect; carries its label for logging
    Inert(String),
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the screen and every nested selection are at their roots
    #[cfg(test)]
    pub fn is_root(&self) -> bool {
        self.screen == Screen::Home
            && self.diagnostic == DiagnosticSub::Root
            && self.reinforcement == ReinforcementSub::Root
            && self.selected_level.is_none()
    }

    /// Switch screens. Under `Reset` the target's nested selection is
    /// cleared when the screen actually changes.
    pub fn go_to(&self, screen: Screen, policy: ReentryPolicy) -> Self {
        let mut next = *self;
        next.screen = screen;
        if policy == ReentryPolicy::Reset && screen != self.screen {
            match screen {
                Screen::Diagnostic => next.diagnostic = DiagnosticSub::Root,
                Screen::Reinforcement => next.reinforcement = ReinforcementSub::Root,
                Screen::Class => next.selected_level = None,
                Screen::Home | Screen::Schedule => {}
            }
        }
        next
    }

    /// Undo exactly one level of navigation
    pub fn go_back(&self) -> Self {
        let mut next = *self;
        match self.screen {
            Screen::Home => {}
            Screen::Diagnostic if self.diagnostic != DiagnosticSub::Root => {
                next.diagnostic = DiagnosticSub::Root;
            }
            Screen::Reinforcement if self.reinforcement != ReinforcementSub::Root => {
                next.reinforcement = ReinforcementSub::Root;
            }
            Screen::Class if self.selected_level.is_some() => {
                next.selected_level = None;
            }
            _ => next.screen = Screen::Home,
        }
        next
    }

    /// Whether `go_back` would change anything
    pub fn can_go_back(&self) -> bool {
        self.screen != Screen::Home
    }

    pub fn select_diagnostic(&self, sub: DiagnosticSub) -> Self {
        Self {
            diagnostic: sub,
            ..*self
        }
    }

    pub fn select_reinforcement(&self, sub: ReinforcementSub) -> Self {
        Self {
            reinforcement: sub,
            ..*self
        }
    }

    /// Pick a loyalty level; the catalog decides whether it carries the
    /// loyalty reward
    pub fn select_class_level(&self, catalog: &Catalog, id: LevelId) -> Self {
        let loyalty = catalog.level(id).is_some_and(|l| l.loyalty);
        Self {
            selected_level: Some(id),
            show_loyalty_message: self.show_loyalty_message || loyalty,
            ..*self
        }
    }

    /// Apply one action
    pub fn apply(&self, action: &Action, catalog: &Catalog, policy: ReentryPolicy) -> Self {
        match action {
            Action::GoTo(screen) => self.go_to(*screen, policy),
            Action::GoBack => self.go_back(),
            Action::SelectDiagnostic(sub) => self.select_diagnostic(*sub),
            Action::SelectReinforcement(sub) => self.select_reinforcement(*sub),
            Action::SelectClassLevel(id) => self.select_class_level(catalog, *id),
            Action::Inert(_) => *self,
        }
    }
}
