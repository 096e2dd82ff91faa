mod actions;
mod backend;
mod consts;
mod environment;
mod events;
mod logging;
mod models;
mod session;
mod ui;

use crate::backend::{ApiClient, SleepBackend};
use crate::consts::{MAX_DAYS, MIN_DAYS};
use crate::models::{BedtimeMode, GenerateRequest};
use crate::session::Session;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Backend base URL; falls back to SLEEP_BACKEND_URL, then loopback.
    #[arg(long, value_name = "URL", env = "SLEEP_BACKEND_URL", global = true)]
    backend_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive dashboard
    Start,
    /// Generate sleep data and print the records
    Generate {
        /// Number of days to simulate (1-60)
        #[arg(long, default_value_t = consts::DEFAULT_DAYS, value_parser = clap::value_parser!(u32).range(MIN_DAYS as i64..=MAX_DAYS as i64))]
        days: u32,

        /// Simulation seed; 0 leaves the seed unset
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Earliest bedtime (HH:MM); requires --latest
        #[arg(long, value_name = "HH:MM", requires = "latest")]
        earliest: Option<String>,

        /// Latest bedtime (HH:MM); requires --earliest
        #[arg(long, value_name = "HH:MM", requires = "earliest")]
        latest: Option<String>,
    },
    /// Fetch the summary for the most recently generated data
    Summary,
    /// Ask a sleep-related question
    Advice {
        /// The question to ask
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let backend_url = environment::resolve_backend_url(args.backend_url);

    match args.command {
        Command::Start => start(backend_url).await,
        Command::Generate {
            days,
            seed,
            earliest,
            latest,
        } => {
            let range = match (earliest, latest) {
                (Some(earliest), Some(latest)) => {
                    Some((parse_clock_time(&earliest)?, parse_clock_time(&latest)?))
                }
                _ => None,
            };
            let mode = if range.is_some() {
                BedtimeMode::TimeRange
            } else {
                BedtimeMode::Random
            };
            let (earliest, latest) = range.unwrap_or_default();
            let request = GenerateRequest::new(days, seed, mode, earliest, latest);

            let client = ApiClient::new(backend_url)?;
            let mut session = Session::new();
            actions::generate(&client, &mut session, &request).await?;
            println!("{}", serde_json::to_string_pretty(session.records())?);
            Ok(())
        }
        Command::Summary => {
            let client = ApiClient::new(backend_url)?;
            let summary = client.get_sleep_summary().await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Command::Advice { question } => {
            let client = ApiClient::new(backend_url)?;
            let mut session = Session::new();
            actions::ask_advice(&client, &mut session, &question).await?;
            if let Some(advice) = session.advice() {
                println!("{}", advice.answer);
                if !advice.sources.is_empty() {
                    println!("\nSources:");
                    println!("{}", serde_json::to_string_pretty(&advice.sources)?);
                }
            }
            Ok(())
        }
    }
}

fn parse_clock_time(s: &str) -> Result<NaiveTime, Box<dyn Error>> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| format!("Invalid clock time {s:?}, expected HH:MM").into())
}

/// Starts the interactive dashboard.
async fn start(backend_url: String) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(backend_url);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
