//! Advice panel component
//!
//! Question input, answer text, and the expandable sources panel

use super::super::state::{DashboardState, Focus};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the advice section: input box above the answer area.
pub fn render_advice_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_question_input(f, chunks[0], state);
    render_answer(f, chunks[1], state);
}

fn render_question_input(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let focused = state.focus == Focus::Question;
    let border_color = if focused { Color::LightYellow } else { Color::Cyan };

    // Trailing cursor marker while the field has focus
    let text = if focused {
        format!("{}_", state.question)
    } else if state.question.is_empty() {
        "Ask a sleep-related question...".to_string()
    } else {
        state.question.clone()
    };
    let text_color = if state.question.is_empty() && !focused {
        Color::DarkGray
    } else {
        Color::White
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(text_color))
        .block(
            Block::default()
                .title("3) SLEEP ADVICE (RAG)")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(input, area);
}

fn render_answer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(advice) = state.session.advice() {
        lines.push(Line::from(Span::styled(
            "Advice",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )));
        for answer_line in advice.answer.lines() {
            lines.push(Line::from(answer_line.to_string()));
        }

        lines.push(Line::from(Span::raw(" ")));
        let marker = if state.sources_expanded { "[-]" } else { "[+]" };
        lines.push(Line::from(Span::styled(
            format!("{} Sources ({})  [o]", marker, advice.sources.len()),
            Style::default().fg(Color::LightBlue),
        )));

        if state.sources_expanded {
            // Raw structured data, not interpreted
            let rendered = serde_json::to_string_pretty(&advice.sources)
                .unwrap_or_else(|_| "<unrenderable sources>".to_string());
            for source_line in rendered.lines() {
                lines.push(Line::from(Span::styled(
                    source_line.to_string(),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            "No advice yet. Type a question and press [Enter].",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
