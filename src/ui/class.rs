//! Class flow: loyalty level list, then the selected level and its durations

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::models::{choices, grid_columns, Accent, Mood};
use crate::theme::{card_colors, get_pulse_color, RED, TEXT_INVERSE, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::cards::{render_choice_grid, render_message_card, CardStyle};
use crate::ui::helpers::face_span;
use crate::ui::View;

pub fn render_class(area: Rect, view: &View, frame: &mut Frame) {
    let options = choices(view.nav, view.catalog);
    let columns = grid_columns(view.nav);

    let Some(id) = view.nav.selected_level else {
        render_choice_grid(area, &options, view.cursor, columns, CardStyle::Icon, frame);
        return;
    };
    let Some(level) = view.catalog.level(id) else {
        // Can happen after a catalog reload drops the level
        let missing = Paragraph::new("This level is no longer offered.")
            .style(Style::default().fg(TEXT_MUTED));
        frame.render_widget(missing, area);
        return;
    };

    let banner_height = if level.loyalty { 1 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),             // Level card
            Constraint::Length(banner_height), // Loyalty reward
            Constraint::Length(1),             // Spacer
            Constraint::Length(1),             // Duration prompt
            Constraint::Min(3),                // Durations
        ])
        .split(area);

    let (fg, bg) = card_colors(Accent::Red);
    render_message_card(
        layout[0],
        face_span(Mood::Happy),
        &level.title,
        &level.message,
        fg,
        bg,
        frame,
    );

    if level.loyalty {
        let banner_bg = if view.animations {
            get_pulse_color(view.tick, RED, TEXT_PRIMARY)
        } else {
            RED
        };
        let banner = Paragraph::new(format!("🎁 {}", view.catalog.class.loyalty_reward))
            .style(
                Style::default()
                    .fg(TEXT_INVERSE)
                    .bg(banner_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(banner, layout[1]);
    }

    let prompt = Line::from(vec![
        Span::styled("◷ ", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(
            view.catalog.class.duration_prompt.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(prompt), layout[3]);
    render_choice_grid(layout[4], &options, view.cursor, columns, CardStyle::Plain, frame);
}
