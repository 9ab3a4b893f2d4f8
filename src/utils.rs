//! Utility functions for common operations.

/// Truncate to `max_chars` characters, marking the cut with "..."
pub fn truncate(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

/// Shift a rect-relative offset for the slide-in transition: starts
/// `distance` cells away and reaches 0 after `frames` ticks
pub fn slide_offset(ticks_since_change: u64, frames: u64, distance: u16) -> u16 {
    if frames == 0 || ticks_since_change >= frames {
        return 0;
    }
    let remaining = frames - ticks_since_change;
    let scaled = u64::from(distance) * remaining / frames;
    u16::try_from(scaled).unwrap_or(distance)
}
