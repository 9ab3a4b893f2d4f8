//! Home screen: greeting, the four flow buttons and the weekly goal card

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::models::choices;
use crate::theme::{BG_DARK, TEXT_INVERSE, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::cards::{render_choice_grid, CardStyle};
use crate::ui::View;

pub fn render_home(area: Rect, view: &View, frame: &mut Frame) {
    let home = &view.catalog.home;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Menu buttons
            Constraint::Length(4), // Goal card
        ])
        .split(area);

    let greeting = vec![
        Line::from(Span::styled(
            home.greeting.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(home.prompt.clone(), Style::default().fg(TEXT_MUTED))),
    ];
    frame.render_widget(Paragraph::new(greeting), layout[0]);

    let options = choices(view.nav, view.catalog);
    render_choice_grid(layout[2], &options, view.cursor, 1, CardStyle::Menu, frame);

    let goal_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BG_DARK))
        .style(Style::default().bg(BG_DARK));
    let goal = vec![
        Line::from(vec![
            Span::styled(
                home.goal.headline.clone(),
                Style::default()
                    .fg(TEXT_INVERSE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ↗", Style::default().fg(TEXT_MUTED)),
        ]),
        Line::from(Span::styled(home.goal.message.clone(), Style::default().fg(TEXT_MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(goal)
            .block(goal_block)
            .wrap(Wrap { trim: true }),
        layout[3],
    );
}
