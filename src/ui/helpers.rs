//! UI helper functions

use ratatui::prelude::*;

use crate::models::Mood;
use crate::theme::mood_color;

/// Widest the "phone" column gets
pub const PHONE_WIDTH: u16 = 52;

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Center a column of at most `width` cells inside `area`
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Shift `area` right by `offset` columns for the slide-in transition
pub fn slide(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.width);
    Rect::new(area.x + offset, area.y, area.width - offset, area.height)
}

/// First row to draw so that `cursor_row` stays inside a window of
/// `visible` rows out of `total`
pub fn scroll_start(cursor_row: usize, visible: usize, total: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let max_start = total - visible;
    cursor_row.saturating_sub(visible - 1).min(max_start)
}

/// Text face for a character mood
pub fn face(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "(^‿^)",
        Mood::Studious => "(•_•)",
        Mood::Sick => "(x_x)",
        Mood::Lazy => "(-_-)",
        Mood::Sad => "(;_;)",
        Mood::Cool => "(⌐□_□)",
        Mood::Love => "(♥‿♥)",
    }
}

/// Character face styled in its mood color
pub fn face_span(mood: Mood) -> Span<'static> {
    Span::styled(
        face(mood),
        Style::default()
            .fg(mood_color(mood))
            .add_modifier(Modifier::BOLD),
    )
}
