//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::actions;
use crate::backend::ApiClient;
use crate::events::{Action, Event as ActivityEvent};
use crate::ui::dashboard::state::Focus;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the form, data views, and advice panel.
    Dashboard(Box<DashboardState>),
}

/// A user action picked up from a key press, executed after the next draw so
/// the busy indicator is visible while the call blocks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum PendingAction {
    Generate,
    RefreshSummary,
    AskAdvice,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Backend base URL the dashboard starts with.
    backend_url: String,

    /// The current screen being displayed in the application.
    current_screen: Screen,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(backend_url: String) -> Self {
        Self {
            backend_url,
            current_screen: Screen::Splash,
        }
    }

    fn enter_dashboard(&mut self) {
        let state = DashboardState::new(self.backend_url.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Esc always exits
                if key.code == KeyCode::Esc {
                    return Ok(());
                }

                let mut pending = None;
                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        if key.code == KeyCode::Char('q') {
                            return Ok(());
                        }
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        // 'q' quits unless a text field is being edited
                        if key.code == KeyCode::Char('q') && !state.focus.is_text() {
                            return Ok(());
                        }
                        pending = handle_dashboard_key(state, key.code);
                        if let Some(action) = pending {
                            state.busy = Some(busy_message(action).to_string());
                        }
                    }
                }

                if let Some(action) = pending {
                    // Draw once so the busy indicator shows while the call
                    // blocks the loop
                    terminal.draw(|f| render(f, &app.current_screen))?;
                    if let Screen::Dashboard(state) = &mut app.current_screen {
                        run_action(state, action).await;
                        state.busy = None;
                    }
                }
            }
        }
    }
}

/// Applies a key press to the dashboard state; returns an action to execute,
/// if the key triggered one.
fn handle_dashboard_key(state: &mut DashboardState, code: KeyCode) -> Option<PendingAction> {
    match code {
        KeyCode::Tab => {
            state.focus_next();
            None
        }
        KeyCode::Up => {
            state.adjust_focused(true);
            None
        }
        KeyCode::Down => {
            state.adjust_focused(false);
            None
        }
        KeyCode::Backspace => {
            state.backspace();
            None
        }
        KeyCode::Enter => {
            if state.focus == Focus::Question {
                Some(PendingAction::AskAdvice)
            } else {
                Some(PendingAction::Generate)
            }
        }
        KeyCode::F(5) => Some(PendingAction::RefreshSummary),
        KeyCode::Char('o') if !state.focus.is_text() => {
            state.sources_expanded = !state.sources_expanded;
            None
        }
        KeyCode::Char(c) => {
            state.input_char(c);
            None
        }
        _ => None,
    }
}

fn busy_message(action: PendingAction) -> &'static str {
    match action {
        PendingAction::Generate => "Generating sleep data...",
        PendingAction::RefreshSummary => "Fetching summary...",
        PendingAction::AskAdvice => "Retrieving advice...",
    }
}

/// Executes one backend-facing action against the currently configured
/// backend URL. Failures land in the activity log; state is only updated on
/// success.
async fn run_action(state: &mut DashboardState, action: PendingAction) {
    let client = match ApiClient::new(state.backend_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            state.record_event(ActivityEvent::error(
                Action::Generate,
                format!("Failed to build HTTP client: {e}"),
            ));
            return;
        }
    };

    match action {
        PendingAction::Generate => {
            let request = state.generate_request();
            log_request(state, Action::Generate, "POST /generate-sleep-data");
            let generated = actions::generate(&client, &mut state.session, &request)
                .await
                .is_ok();
            log_last_event(state);
            // The summary belongs to the new batch; fetch it right away
            if generated {
                log_request(state, Action::Summary, "GET /get-sleep-summary");
                let _ = actions::fetch_summary(&client, &mut state.session).await;
                log_last_event(state);
            }
        }
        PendingAction::RefreshSummary => {
            if !state.session.has_data() {
                state.record_event(ActivityEvent::warning(
                    Action::Summary,
                    "No data yet. Generate sleep data first.".into(),
                ));
                return;
            }
            log_request(state, Action::Summary, "GET /get-sleep-summary");
            let _ = actions::fetch_summary(&client, &mut state.session).await;
            log_last_event(state);
        }
        PendingAction::AskAdvice => {
            let question = state.question.clone();
            if !question.trim().is_empty() {
                log_request(state, Action::Advice, "POST /query-advice");
            }
            let _ = actions::ask_advice(&client, &mut state.session, &question).await;
            log_last_event(state);
        }
    }
}

/// Logs the request about to be issued. Hidden at the default threshold;
/// visible under RUST_LOG=debug.
fn log_request(state: &mut DashboardState, action: Action, detail: &str) {
    let url = state.backend_url.trim_end_matches('/');
    state.add_to_activity_log(ActivityEvent::debug(action, format!("{detail} -> {url}")));
}

/// Copies the most recent action outcome into the activity log panel.
fn log_last_event(state: &mut DashboardState) {
    if let Some(event) = state.session.last_event().cloned() {
        state.add_to_activity_log(event);
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BedtimeMode;

    fn state() -> DashboardState {
        DashboardState::new("http://127.0.0.1:8000".into())
    }

    #[test]
    fn enter_on_question_field_asks_advice() {
        let mut s = state();
        s.focus = Focus::Question;
        assert_eq!(
            handle_dashboard_key(&mut s, KeyCode::Enter),
            Some(PendingAction::AskAdvice)
        );
    }

    #[test]
    fn enter_elsewhere_generates() {
        let mut s = state();
        s.focus = Focus::Days;
        assert_eq!(
            handle_dashboard_key(&mut s, KeyCode::Enter),
            Some(PendingAction::Generate)
        );
    }

    #[test]
    fn typing_goes_to_focused_text_field() {
        let mut s = state();
        s.focus = Focus::Question;
        for c in "why am I tired?".chars() {
            assert_eq!(handle_dashboard_key(&mut s, KeyCode::Char(c)), None);
        }
        assert_eq!(s.question, "why am I tired?");
    }

    #[test]
    fn o_toggles_sources_outside_text_fields() {
        let mut s = state();
        s.focus = Focus::Days;
        handle_dashboard_key(&mut s, KeyCode::Char('o'));
        assert!(s.sources_expanded);

        // While typing a question, 'o' is literal input
        s.focus = Focus::Question;
        handle_dashboard_key(&mut s, KeyCode::Char('o'));
        assert!(s.sources_expanded);
        assert_eq!(s.question, "o");
    }

    #[test]
    fn mode_toggle_via_arrows() {
        let mut s = state();
        s.focus = Focus::Mode;
        handle_dashboard_key(&mut s, KeyCode::Up);
        assert_eq!(s.mode, BedtimeMode::TimeRange);
        handle_dashboard_key(&mut s, KeyCode::Down);
        assert_eq!(s.mode, BedtimeMode::Random);
    }
}
