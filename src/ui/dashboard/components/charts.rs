//! Chart components
//!
//! Line chart of sleep duration over time and bar chart of mood

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
    Paragraph, Wrap,
};

/// Render the duration line chart and the mood bar chart side by side.
pub fn render_charts(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_duration_chart(f, chunks[0], state);
    render_mood_chart(f, chunks[1], state);
}

/// Render the placeholder shown when the batch exists but its summary
/// could not be fetched.
pub fn render_charts_unavailable(f: &mut Frame, area: ratatui::layout::Rect) {
    let notice = Paragraph::new("Charts appear once the summary loads. Press [F5] to retry.")
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title("CHARTS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(notice, area);
}

/// Line chart: sleep duration (hours) per night.
fn render_duration_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let records = state.session.records();
    let points: Vec<(f64, f64)> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.duration_hours))
        .collect();

    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let (y_min, y_max) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    // A flat series still needs a visible band
    let y_lo = (y_min - 0.5).floor().max(0.0);
    let y_hi = (y_max + 0.5).ceil();

    let x_labels: Vec<Span> = match (records.first(), records.last()) {
        (Some(first), Some(last)) => vec![
            Span::raw(first.date.to_string()),
            Span::raw(last.date.to_string()),
        ],
        _ => Vec::new(),
    };

    let dataset = Dataset::default()
        .name("duration (h)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightBlue))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title("SLEEP DURATION OVER TIME (h)")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Span::raw(format!("{y_lo:.0}")),
                    Span::raw(format!("{y_hi:.0}")),
                ]),
        );

    f.render_widget(chart, area);
}

/// Bar chart: self-reported mood (1-5) per night.
fn render_mood_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let bars: Vec<Bar> = state
        .session
        .records()
        .iter()
        .map(|r| {
            Bar::default()
                .value(u64::from(r.mood))
                .label(r.date.format("%d").to_string().into())
                .style(Style::default().fg(Color::LightMagenta))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("MOOD (1-5)")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1)
        .max(5);

    f.render_widget(chart, area);
}
