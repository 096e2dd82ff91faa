//! Generation form component
//!
//! Renders the data-generation inputs with focus highlighting

use super::super::state::{DashboardState, Focus};
use crate::models::BedtimeMode;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn field_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}

/// Render the generation form panel.
pub fn render_form(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    lines.push(field_line(
        "Days to simulate",
        state.days.to_string(),
        state.focus == Focus::Days,
    ));
    lines.push(field_line(
        "Bedtime mode",
        state.mode.to_string(),
        state.focus == Focus::Mode,
    ));
    lines.push(field_line(
        "Seed (0 = random)",
        state.seed.to_string(),
        state.focus == Focus::Seed,
    ));

    if state.mode == BedtimeMode::TimeRange {
        lines.push(field_line(
            "Earliest bedtime",
            state.earliest.format("%H:%M").to_string(),
            state.focus == Focus::Earliest,
        ));
        lines.push(field_line(
            "Latest bedtime",
            state.latest.format("%H:%M").to_string(),
            state.focus == Focus::Latest,
        ));
    }

    lines.push(field_line(
        "Backend URL",
        state.backend_url.clone(),
        state.focus == Focus::BackendUrl,
    ));

    let block = Block::default()
        .title("1) GENERATE SLEEP DATA")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
