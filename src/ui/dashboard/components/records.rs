//! Records table component
//!
//! Renders the generated batch as a table, or the no-data notice

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, Wrap};

/// Render the generated sleep records as a table.
pub fn render_records_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Bedtime"),
        Cell::from("Wake"),
        Cell::from("Hours"),
        Cell::from("Mood"),
    ])
    .style(
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    );

    // Show the most recent rows when the batch outgrows the panel
    let visible = (area.height.saturating_sub(4)) as usize;
    let records = state.session.records();
    let skip = records.len().saturating_sub(visible.max(1));

    let rows: Vec<Row> = records
        .iter()
        .skip(skip)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.date.to_string()),
                Cell::from(r.start_time.clone()),
                Cell::from(r.wake_time.clone()),
                Cell::from(format!("{:.2}", r.duration_hours)),
                Cell::from(r.mood.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("SLEEP DATA ({} records)", records.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}

/// Render the placeholder shown before any data has been generated.
pub fn render_no_data_notice(f: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .title("2) SLEEP SUMMARY & VISUALS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::uniform(1));

    let notice = Paragraph::new("No data yet. Generate sleep data with [Enter].")
        .style(Style::default().fg(Color::DarkGray))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(notice, area);
}
