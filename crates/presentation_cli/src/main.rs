//! Subway arrivals board CLI
//!
//! Live terminal board plus one-shot and listing commands.

#![allow(clippy::print_stdout)]

mod commands;
mod render;
mod screen;

use std::ops::ControlFlow;
use std::sync::Arc;

use application::{ApplicationError, ArrivalsBoard, BoardTimings, RefreshOutcome};
use clap::{Parser, Subcommand};
use domain::Station;
use infrastructure::{AppConfig, ArrivalsAdapter, LogFormat, TelemetryConfig, init_telemetry};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::commands::{BoardCommand, HELP};
use crate::render::Renderer;
use crate::screen::Screen;

/// Subway arrivals board
#[derive(Parser)]
#[command(name = "subway-board")]
#[command(author, version, about = "Live subway arrivals board", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format (pretty or json)
    #[arg(long, default_value = "pretty", global = true)]
    log_format: LogFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the live board
    ///
    /// Refreshes every 30 seconds. Type a station name to switch stations,
    /// `r` to refresh, `e <LINE>` to expand a line and `q` to quit.
    Board {
        /// Station to show first
        #[arg(short, long, default_value = "Union Square")]
        station: String,
    },

    /// Fetch once, print the board and exit
    ///
    /// Exits with a non-zero status if the fetch fails.
    Once {
        /// Station to show
        #[arg(short, long, default_value = "Union Square")]
        station: String,
    },

    /// List the available stations
    Stations,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_telemetry(&TelemetryConfig {
        log_filter: log_filter_from_verbosity(cli.verbose).to_string(),
        format: cli.log_format,
    })?;

    let renderer = Renderer::new(!cli.no_color);

    match cli.command {
        Commands::Stations => {
            print!("{}", station_list());
            Ok(())
        },
        Commands::Once { station } => run_once(&station, renderer).await,
        Commands::Board { station } => run_board(&station, renderer).await,
    }
}

/// Build a board for `station` from the environment configuration
fn build_board(station: &str) -> anyhow::Result<ArrivalsBoard> {
    let station: Station = station.parse()?;
    let config = AppConfig::load()?;
    info!(?config, "Configuration loaded");

    let adapter = ArrivalsAdapter::from_config(&config.arrivals_config())?;
    Ok(ArrivalsBoard::with_timings(
        Arc::new(adapter),
        station,
        BoardTimings::default(),
    ))
}

async fn run_once(station: &str, renderer: Renderer) -> anyhow::Result<()> {
    let board = build_board(station)?;

    let outcome = board.refresh().await;
    let state = board.view();
    print!("{}", renderer.render(&state.screen()));
    board.dispose();

    if outcome != RefreshOutcome::Applied {
        anyhow::bail!("Failed to load arrivals for {}", state.station);
    }
    Ok(())
}

async fn run_board(station: &str, renderer: Renderer) -> anyhow::Result<()> {
    let board = build_board(station)?;
    let mut changes = board.subscribe();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    let mut screen = Screen::new(std::io::stdout(), renderer);

    board.start();
    let mut flow = screen.paint(&board.view());

    while flow.is_continue() {
        flow = tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                screen.paint(&board.view())
            }
            line = input.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                let Some(command) = BoardCommand::parse(&line) else {
                    continue;
                };
                match handle_command(&board, command) {
                    ControlFlow::Break(()) => break,
                    ControlFlow::Continue(notice) => {
                        screen.set_notice(notice);
                        screen.paint(&board.view())
                    },
                }
            }
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted");
                break;
            }
        };
    }

    board.dispose();
    Ok(())
}

/// Apply one command to the board
///
/// Returns a message to show below the board, or `Break` to quit.
fn handle_command(board: &ArrivalsBoard, command: BoardCommand) -> ControlFlow<(), Option<String>> {
    let notice = match command {
        BoardCommand::Quit => return ControlFlow::Break(()),
        BoardCommand::Refresh => {
            let board = board.clone();
            tokio::spawn(async move {
                board.refresh().await;
            });
            None
        },
        BoardCommand::Toggle(key) => {
            board.toggle_expanded(&key);
            None
        },
        BoardCommand::Stations => Some(station_list()),
        BoardCommand::Help => Some(HELP.to_string()),
        BoardCommand::Select(name) => match board.select_station(&name) {
            Ok(_) => None,
            Err(ApplicationError::Domain(e)) => Some(format!("{e}. Type `s` to list stations.")),
            Err(e) => Some(e.to_string()),
        },
    };
    ControlFlow::Continue(notice)
}

fn station_list() -> String {
    Station::ALL
        .iter()
        .map(|station| format!("{:<18}{}\n", station.name(), station.slug()))
        .collect()
}
