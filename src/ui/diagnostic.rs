//! Diagnostic flow: online or in person, then the inert booking options

use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::{choices, DiagnosticSub};
use crate::theme::BLUE;
use crate::ui::cards::{render_choice_grid, CardStyle};
use crate::ui::View;

pub fn render_diagnostic(area: Rect, view: &View, frame: &mut Frame) {
    let options = choices(view.nav, view.catalog);
    let diag = &view.catalog.diagnostic;

    let mode = match view.nav.diagnostic {
        DiagnosticSub::Root => {
            render_choice_grid(area, &options, view.cursor, 1, CardStyle::Icon, frame);
            return;
        }
        DiagnosticSub::Online => &diag.online,
        DiagnosticSub::InPerson => &diag.in_person,
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let label = Line::from(vec![
        Span::styled(format!("{} ", mode.icon), Style::default().fg(BLUE)),
        Span::styled(
            mode.label.clone(),
            Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(label), layout[0]);
    render_choice_grid(layout[1], &options, view.cursor, 1, CardStyle::Plain, frame);
}
