//! Frame layout: branding bar, screen header, content and bottom navigation

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::BOTTOM_NAV;
use crate::models::Screen;
use crate::theme::{
    screen_accent, BG_APP, BG_CARD, BG_DARK, BORDER_SUBTLE, TEXT_INVERSE, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::ui::class::render_class;
use crate::ui::diagnostic::render_diagnostic;
use crate::ui::helpers::{centered_column, slide, PHONE_WIDTH};
use crate::ui::home::render_home;
use crate::ui::reinforcement::render_reinforcement;
use crate::ui::schedule::render_schedule;
use crate::ui::View;

const KEY_HINTS: &str = "↑↓ move · Enter select · Esc back · 1-4 nav · q quit";

/// Glyph for a screen in the bottom navigation
fn nav_icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "⌂",
        Screen::Diagnostic => "✓",
        Screen::Class => "▤",
        Screen::Reinforcement => "ϟ",
        Screen::Schedule => "▦",
    }
}

/// Draw the whole app for the given view
pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_APP)), area);

    let phone = centered_column(area, PHONE_WIDTH);
    frame.render_widget(Block::default().style(Style::default().bg(BG_CARD)), phone);

    let on_home = view.nav.screen == Screen::Home;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                          // Branding bar
            Constraint::Length(1),                          // Spacer
            Constraint::Length(if on_home { 0 } else { 2 }), // Screen header
            Constraint::Min(3),                             // Content
            Constraint::Length(3),                          // Bottom navigation
            Constraint::Length(1),                          // Key hints
        ])
        .split(phone);

    render_branding(layout[0], frame);
    if !on_home {
        render_header(layout[2], view, frame);
    }

    let content = slide(layout[3].inner(Margin::new(1, 0)), view.slide_offset);
    match view.nav.screen {
        Screen::Home => render_home(content, view, frame),
        Screen::Diagnostic => render_diagnostic(content, view, frame),
        Screen::Class => render_class(content, view, frame),
        Screen::Reinforcement => render_reinforcement(content, view, frame),
        Screen::Schedule => render_schedule(content, view, frame),
    }

    render_bottom_nav(layout[4], view.nav.screen, frame);
    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(TEXT_MUTED)))
            .alignment(Alignment::Center),
        layout[5],
    );
}

fn render_branding(area: Rect, frame: &mut Frame) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(area.inner(Margin::new(1, 0)));

    let brand = Line::from(vec![
        Span::styled(
            " GI ",
            Style::default()
                .fg(TEXT_INVERSE)
                .bg(BG_DARK)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "Got It First",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand), halves[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "COLOMBIA",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        halves[1],
    );
}

fn render_header(area: Rect, view: &View, frame: &mut Frame) {
    let mut spans = Vec::new();
    if view.nav.can_go_back() {
        spans.push(Span::styled(
            " ‹ ",
            Style::default().fg(TEXT_PRIMARY).bg(BORDER_SUBTLE),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        view.nav.screen.title(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ));

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(4)])
        .split(area.inner(Margin::new(1, 0)));
    frame.render_widget(Paragraph::new(Line::from(spans)), halves[0]);
    // Stand-in for the profile picture
    frame.render_widget(
        Paragraph::new(Span::styled(" ◉ ", Style::default().fg(TEXT_MUTED).bg(BORDER_SUBTLE)))
            .alignment(Alignment::Right),
        halves[1],
    );
}

fn render_bottom_nav(area: Rect, current: Screen, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BG_DARK))
        .style(Style::default().bg(BG_DARK));
    let inner = block.inner(area.inner(Margin::new(1, 0)));
    frame.render_widget(block, area.inner(Margin::new(1, 0)));

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(BOTTOM_NAV.map(|_| Constraint::Ratio(1, BOTTOM_NAV.len() as u32)))
        .split(inner);

    for (i, (screen, slot)) in BOTTOM_NAV.iter().zip(slots.iter()).enumerate() {
        let label = format!(" {} {} ", nav_icon(*screen), i + 1);
        let style = if *screen == current {
            let fg = if *screen == Screen::Home { TEXT_PRIMARY } else { TEXT_INVERSE };
            Style::default()
                .fg(fg)
                .bg(screen_accent(*screen))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
            *slot,
        );
    }
}
