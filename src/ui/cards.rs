//! Card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::models::Choice;
use crate::theme::{
    accent_color, BG_CARD, BORDER_FOCUS, BORDER_SUBTLE, TEXT_INVERSE, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::{face, face_span, scroll_start, wrap_text};
use crate::utils::truncate;

/// How an option is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Saturated button with icon and face (home menu)
    Menu,
    /// White row with a tinted icon box (levels, schedule actions)
    Icon,
    /// Plain bordered row (sub-menus, inert leaves)
    Plain,
    /// Centered tile with the face above the title (reinforcement grid)
    Tile,
}

impl CardStyle {
    /// Rows one card occupies including borders
    pub fn height(&self) -> u16 {
        match self {
            CardStyle::Tile => 5,
            _ => 3,
        }
    }
}

fn card_block(selected: bool, bg: Color) -> Block<'static> {
    let border = if selected { BORDER_FOCUS } else { BORDER_SUBTLE };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg));
    if selected {
        block.border_type(BorderType::Thick)
    } else {
        block
    }
}

/// Render one option card
pub fn render_choice_card(
    area: Rect,
    choice: &Choice,
    style: CardStyle,
    selected: bool,
    frame: &mut Frame,
) {
    let accent = accent_color(choice.accent);
    let inner_width = area.width.saturating_sub(4) as usize;
    let title_weight = if selected {
        Modifier::BOLD
    } else {
        Modifier::empty()
    };

    match style {
        CardStyle::Menu => {
            let block = card_block(selected, accent).border_style(Style::default().fg(if selected {
                TEXT_PRIMARY
            } else {
                accent
            }));
            let icon = choice.icon.as_deref().unwrap_or(" ");
            let face_text = choice.mood.map(face).unwrap_or("");
            let reserved = 4 + face_text.chars().count() + 1;
            let title = truncate(&choice.label, inner_width.saturating_sub(reserved));
            let pad = inner_width
                .saturating_sub(reserved)
                .saturating_sub(title.chars().count());

            let mut spans = vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(accent).bg(TEXT_INVERSE)),
                Span::raw(" "),
                Span::styled(
                    title,
                    Style::default()
                        .fg(TEXT_INVERSE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(pad + 1)),
            ];
            if !face_text.is_empty() {
                spans.push(Span::styled(face_text, Style::default().fg(TEXT_INVERSE)));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
        }

        CardStyle::Icon => {
            let icon = choice.icon.as_deref().unwrap_or(" ");
            let title = truncate(&choice.label, inner_width.saturating_sub(5));
            let icon_style = if selected {
                Style::default().fg(TEXT_INVERSE).bg(accent)
            } else {
                Style::default().fg(accent)
            };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", icon), icon_style),
                Span::raw(" "),
                Span::styled(
                    title,
                    Style::default()
                        .fg(TEXT_SECONDARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(
                Paragraph::new(line).block(card_block(selected, BG_CARD)),
                area,
            );
        }

        CardStyle::Plain => {
            let (fg, bg) = if selected {
                (TEXT_INVERSE, TEXT_PRIMARY)
            } else {
                (TEXT_SECONDARY, BG_CARD)
            };
            let line = Line::from(Span::styled(
                truncate(&choice.label, inner_width),
                Style::default().fg(fg).add_modifier(title_weight),
            ));
            frame.render_widget(Paragraph::new(line).block(card_block(selected, bg)), area);
        }

        CardStyle::Tile => {
            let block = card_block(selected, BG_CARD).border_style(Style::default().fg(if selected {
                BORDER_FOCUS
            } else {
                accent
            }));
            let mut lines = vec![Line::from(choice.mood.map(face_span).unwrap_or_default())];
            for text in wrap_text(&choice.label, inner_width).into_iter().take(2) {
                lines.push(Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(TEXT_SECONDARY)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            frame.render_widget(
                Paragraph::new(lines)
                    .block(block)
                    .alignment(Alignment::Center),
                area,
            );
        }
    }
}

/// Render options as a grid of cards, scrolled so the cursor stays visible
pub fn render_choice_grid(
    area: Rect,
    options: &[Choice],
    cursor: usize,
    columns: usize,
    style: CardStyle,
    frame: &mut Frame,
) {
    if options.is_empty() || area.height == 0 {
        return;
    }
    let columns = columns.max(1);
    let gap: u16 = 1;
    let row_height = style.height();
    let total_rows = options.len().div_ceil(columns);
    let visible_rows = usize::from(area.height / row_height).max(1);
    let first_row = scroll_start(cursor / columns, visible_rows, total_rows);

    let col_count = u16::try_from(columns).unwrap_or(1);
    let col_width = area
        .width
        .saturating_sub(gap * (col_count - 1))
        / col_count;

    for (row_offset, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let y = area.y + u16::try_from(row_offset).unwrap_or(0) * row_height;
        if y + row_height > area.y + area.height {
            break;
        }
        for col in 0..columns {
            let index = row * columns + col;
            let Some(choice) = options.get(index) else {
                break;
            };
            let x = area.x + u16::try_from(col).unwrap_or(0) * (col_width + gap);
            let cell = Rect::new(x, y, col_width, row_height);
            render_choice_card(cell, choice, style, index == cursor, frame);
        }
    }

    if first_row + visible_rows < total_rows {
        let hint = Paragraph::new(Line::from(Span::styled("▾ more", Style::default().fg(TEXT_MUTED))))
            .alignment(Alignment::Right);
        let y = area.y + area.height - 1;
        frame.render_widget(hint, Rect::new(area.x, y, area.width, 1));
    }
}

/// Hero card: face, headline and a quoted message
pub fn render_message_card(
    area: Rect,
    face_line: Span<'static>,
    headline: &str,
    message: &str,
    accent: Color,
    bg: Color,
    frame: &mut Frame,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(bg));

    let lines = vec![
        Line::from(face_line),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", message),
            Style::default().fg(accent).add_modifier(Modifier::ITALIC),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
