//! Dashboard header component
//!
//! Renders the title and the status line

use super::super::state::DashboardState;
use crate::events::EventType;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and the most recent action outcome.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("SLEEP CYCLE TRACKER v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Status line: in-flight call takes priority over the last outcome
    let (status_text, status_color) = if let Some(busy) = &state.busy {
        (busy.clone(), Color::LightBlue)
    } else if let Some(event) = state.session.last_event() {
        let color = match event.event_type {
            EventType::Success => Color::LightGreen,
            EventType::Error => Color::LightRed,
            EventType::Warning => Color::LightYellow,
            EventType::Debug => Color::DarkGray,
        };
        (event.msg.clone(), color)
    } else {
        (
            "Generate sleep data, view insights, and ask for advice.".to_string(),
            Color::DarkGray,
        )
    };

    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
