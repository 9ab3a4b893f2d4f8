//! Enums used throughout the Got It TUI
//!
//! This module contains the closed enumerations the navigation state
//! machine is built from, plus the mood tags used by the renderer.

use serde::{Deserialize, Serialize};

/// Top-level navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Diagnostic,
    Class,
    Reinforcement,
    Schedule,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Diagnostic,
        Screen::Class,
        Screen::Reinforcement,
        Screen::Schedule,
    ];

    /// Header title shown above the screen content
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Got It",
            Screen::Diagnostic => "Diagnóstico",
            Screen::Class => "Programar Clase",
            Screen::Reinforcement => "Refuerzo",
            Screen::Schedule => "Mi Horario",
        }
    }
}

/// Nested selection inside the diagnostic flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticSub {
    #[default]
    Root,
    Online,
    InPerson,
}

/// Reasons offered on the reinforcement screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonId {
    Sick,
    Lazy,
    #[serde(rename = "couldnt")]
    CouldNotAttend,
    #[serde(rename = "notmyself")]
    NotMyself,
    Understand,
    Test,
    Homework,
    Workshop,
}

#[cfg(test)]
impl ReasonId {
    pub const ALL: [ReasonId; 8] = [
        ReasonId::Sick,
        ReasonId::Lazy,
        ReasonId::CouldNotAttend,
        ReasonId::NotMyself,
        ReasonId::Understand,
        ReasonId::Test,
        ReasonId::Homework,
        ReasonId::Workshop,
    ];
}

/// Nested selection inside the reinforcement flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReinforcementSub {
    #[default]
    Root,
    Reason(ReasonId),
}

/// Loyalty tiers shown in the class flow, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelId {
    First,
    Liked,
    Enjoy,
    Fun,
    Need,
    Love,
    Crazy,
}

#[cfg(test)]
impl LevelId {
    pub const ALL: [LevelId; 7] = [
        LevelId::First,
        LevelId::Liked,
        LevelId::Enjoy,
        LevelId::Fun,
        LevelId::Need,
        LevelId::Love,
        LevelId::Crazy,
    ];
}

/// Emotion tag for the character faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Studious,
    Sick,
    Lazy,
    Sad,
    Cool,
    Love,
}

/// What happens to a screen's nested selection when it is entered again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReentryPolicy {
    /// Nested selections survive leaving the screen
    #[default]
    Preserve,
    /// Entering a different screen starts it at its root
    Reset,
}

impl ReentryPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            ReentryPolicy::Preserve => "preserve",
            ReentryPolicy::Reset => "reset",
        }
    }
}
