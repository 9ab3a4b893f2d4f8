//! Reinforcement flow: reason grid, then the reason's card and options

use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::{choices, grid_columns, ReinforcementSub};
use crate::theme::{card_colors, TEXT_MUTED};
use crate::ui::cards::{render_choice_grid, render_message_card, CardStyle};
use crate::ui::helpers::face_span;
use crate::ui::View;

pub fn render_reinforcement(area: Rect, view: &View, frame: &mut Frame) {
    let options = choices(view.nav, view.catalog);
    let columns = grid_columns(view.nav);

    let ReinforcementSub::Reason(id) = view.nav.reinforcement else {
        render_choice_grid(area, &options, view.cursor, columns, CardStyle::Tile, frame);
        return;
    };

    let detail = view
        .catalog
        .reason(id)
        .and_then(|r| r.detail.as_ref().map(|d| (r, d)));
    let Some((reason, detail)) = detail else {
        let empty = Paragraph::new("Nothing here yet. Esc to go back.")
            .style(Style::default().fg(TEXT_MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Reason card
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Options
        ])
        .split(area);

    let (fg, bg) = card_colors(reason.accent);
    render_message_card(
        layout[0],
        face_span(reason.mood),
        &detail.headline,
        &detail.message,
        fg,
        bg,
        frame,
    );
    render_choice_grid(layout[2], &options, view.cursor, columns, CardStyle::Plain, frame);
}
