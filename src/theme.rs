//! Theme module for the Got It TUI
//!
//! Centralized color palette for the light "mobile card" look: white
//! surfaces, slate text and one saturated accent per flow.

use ratatui::style::Color;

use crate::models::{Accent, Mood, Screen};

// ============================================================================
// Surfaces
// ============================================================================

/// App background (#f8fafc)
pub const BG_APP: Color = Color::Rgb(248, 250, 252);

/// Card surface (#ffffff)
pub const BG_CARD: Color = Color::Rgb(255, 255, 255);

/// Dark surface for the goal card and bottom navigation (#0f172a)
pub const BG_DARK: Color = Color::Rgb(15, 23, 42);

/// Subtle border color (#e2e8f0)
pub const BORDER_SUBTLE: Color = Color::Rgb(226, 232, 240);

/// Border of the focused option (#0f172a)
pub const BORDER_FOCUS: Color = Color::Rgb(15, 23, 42);

// ============================================================================
// Text
// ============================================================================

/// Headings (#0f172a)
pub const TEXT_PRIMARY: Color = Color::Rgb(15, 23, 42);

/// Body text (#334155)
pub const TEXT_SECONDARY: Color = Color::Rgb(51, 65, 85);

/// Labels and hints (#94a3b8)
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

/// Text on dark or saturated surfaces
pub const TEXT_INVERSE: Color = Color::Rgb(255, 255, 255);

// ============================================================================
// Accents
// ============================================================================

pub const BLUE: Color = Color::Rgb(59, 130, 246);
pub const RED: Color = Color::Rgb(239, 68, 68);
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const EMERALD: Color = Color::Rgb(16, 185, 129);
pub const SLATE: Color = Color::Rgb(100, 116, 139);
pub const INDIGO: Color = Color::Rgb(99, 102, 241);
pub const PURPLE: Color = Color::Rgb(168, 85, 247);
pub const PINK: Color = Color::Rgb(236, 72, 153);

/// Light tint behind progress segments still to do (#a7f3d0)
pub const EMERALD_LIGHT: Color = Color::Rgb(167, 243, 208);

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => BLUE,
        Accent::Red => RED,
        Accent::Yellow => AMBER,
        Accent::Green => EMERALD,
        Accent::Slate => SLATE,
        Accent::Indigo => INDIGO,
        Accent::Purple => PURPLE,
        Accent::Pink => PINK,
    }
}

/// Text and background of a hero card in the given accent
pub fn card_colors(accent: Accent) -> (Color, Color) {
    match accent {
        Accent::Slate => (TEXT_INVERSE, BG_DARK),
        Accent::Blue => (BLUE, Color::Rgb(239, 246, 255)),
        Accent::Red => (RED, Color::Rgb(254, 242, 242)),
        Accent::Yellow => (Color::Rgb(180, 83, 9), Color::Rgb(255, 251, 235)),
        Accent::Green => (Color::Rgb(4, 120, 87), Color::Rgb(236, 253, 245)),
        Accent::Indigo => (INDIGO, Color::Rgb(238, 242, 255)),
        Accent::Purple => (PURPLE, Color::Rgb(250, 245, 255)),
        Accent::Pink => (PINK, Color::Rgb(253, 242, 248)),
    }
}

/// Color of a character face
pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Happy => BLUE,
        Mood::Studious => EMERALD,
        Mood::Sick => TEXT_MUTED,
        Mood::Lazy => AMBER,
        Mood::Sad => RED,
        Mood::Cool => INDIGO,
        Mood::Love => PINK,
    }
}

/// Highlight color of a screen in the bottom navigation
pub fn screen_accent(screen: Screen) -> Color {
    match screen {
        Screen::Home => BG_CARD,
        Screen::Diagnostic => BLUE,
        Screen::Class => RED,
        Screen::Reinforcement => AMBER,
        Screen::Schedule => EMERALD,
    }
}

/// Alternate between two colors every few ticks
pub fn get_pulse_color(tick: u64, on: Color, off: Color) -> Color {
    if (tick / 5) % 2 == 0 { on } else { off }
}
