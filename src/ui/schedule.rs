//! Schedule screen: weekly progress card and the study-time actions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::{choices, Accent};
use crate::theme::{card_colors, EMERALD, EMERALD_LIGHT};
use crate::ui::cards::{render_choice_grid, CardStyle};
use crate::ui::View;

/// One segment per day: filled for completed days
pub fn day_segments(completed: u8, total: u8, width: u16) -> Vec<Span<'static>> {
    if total == 0 {
        return Vec::new();
    }
    let segment = (width / u16::from(total)).saturating_sub(1).max(1);
    (0..total)
        .map(|day| {
            let color = if day < completed { EMERALD } else { EMERALD_LIGHT };
            Span::styled(
                format!("{} ", "━".repeat(usize::from(segment))),
                Style::default().fg(color),
            )
        })
        .collect()
}

pub fn render_schedule(area: Rect, view: &View, frame: &mut Frame) {
    let schedule = &view.catalog.schedule;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Progress card
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Actions
        ])
        .split(area);

    let (fg, bg) = card_colors(Accent::Green);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(EMERALD_LIGHT))
        .style(Style::default().bg(bg));
    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    let heading = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(rows[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            schedule.headline.clone(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )),
        heading[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{}%", schedule.progress_percent),
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        heading[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(schedule.message.clone(), Style::default().fg(fg))),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(day_segments(
            schedule.days_completed,
            schedule.days_total,
            inner.width,
        ))),
        rows[3],
    );

    let options = choices(view.nav, view.catalog);
    render_choice_grid(layout[2], &options, view.cursor, 1, CardStyle::Icon, frame);
}
