//! Dashboard main renderer

use super::components::{advice, charts, footer, form, header, logs, records, summary};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(22),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(main_chunks[1]);

    // Left column: generation form above the advice panel
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Fill(1)])
        .split(content_chunks[0]);
    form::render_form(f, left_chunks[0], state);
    advice::render_advice_panel(f, left_chunks[1], state);

    // Right column: records table, summary metrics, charts
    if state.session.has_data() {
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(38),
                Constraint::Length(6),
                Constraint::Fill(1),
            ])
            .split(content_chunks[1]);
        records::render_records_table(f, right_chunks[0], state);
        summary::render_summary_metrics(f, right_chunks[1], state);
        // The charts plot the same batch the summary describes; without a
        // summary they stay blank rather than suggesting a fetched one.
        if state.session.summary().is_some() {
            charts::render_charts(f, right_chunks[2], state);
        } else {
            charts::render_charts_unavailable(f, right_chunks[2]);
        }
    } else {
        records::render_no_data_notice(f, content_chunks[1]);
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}
