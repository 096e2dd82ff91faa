//! Summary metrics component
//!
//! Renders the four scalar metrics plus correlation and trend

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn metric<'a>(title: &'a str, value: String) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    )
}

/// Render the summary metrics row.
pub fn render_summary_metrics(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(summary) = state.session.summary() else {
        let notice = Paragraph::new("Summary unavailable. Press [F5] to retry.")
            .style(Style::default().fg(Color::LightRed))
            .block(
                Block::default()
                    .title("SUMMARY")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(notice, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    f.render_widget(
        metric("Total Hours", format!("{}", summary.total_hours)),
        chunks[0],
    );
    f.render_widget(
        metric("Average", format!("{} h", summary.average_duration)),
        chunks[1],
    );
    f.render_widget(
        metric("Min", format!("{} h", summary.min_duration)),
        chunks[2],
    );
    f.render_widget(
        metric("Max", format!("{} h", summary.max_duration)),
        chunks[3],
    );

    // Correlation to two decimals, trend as-is from the backend
    let corr_trend = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Corr: ", Style::default().fg(Color::Gray)),
            Span::styled(
                summary.correlation_display(),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Trend: ", Style::default().fg(Color::Gray)),
            Span::styled(
                summary.duration_trend.clone(),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(corr_trend, chunks[4]);
}
