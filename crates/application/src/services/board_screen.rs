//! Screen model derived from the board state

use domain::views::{line_views, next_arrivals};
use domain::{LineView, Station, TrainArrival};

use super::arrivals_board::BoardState;

/// Format of the header clock, e.g. `8:05:09 PM`
const CLOCK_FORMAT: &str = "%-I:%M:%S %p";

/// What the board shows right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardScreen<'a> {
    /// A fetch failed before any snapshot was obtained
    Error { message: &'a str },
    /// No snapshot yet for the selected station
    Loading { station: Station },
    /// The arrivals board itself
    Board(BoardFrame<'a>),
}

/// Contents of a rendered board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFrame<'a> {
    pub station: Station,
    /// Upper-cased station name from the snapshot
    pub title: String,
    /// Local wall-clock time
    pub clock: String,
    pub next_trains: Vec<&'a TrainArrival>,
    pub lines: Vec<LineView<'a>>,
    /// A fetch is in flight
    pub refreshing: bool,
    /// Non-blocking error shown next to the last good data
    pub error: Option<&'a str>,
}

impl BoardState {
    /// Derive the screen to draw
    #[must_use]
    pub fn screen(&self) -> BoardScreen<'_> {
        let Some(snapshot) = self.snapshot.as_deref() else {
            return match self.error.as_deref() {
                Some(message) => BoardScreen::Error { message },
                None => BoardScreen::Loading {
                    station: self.station,
                },
            };
        };

        BoardScreen::Board(BoardFrame {
            station: self.station,
            title: snapshot.station.to_uppercase(),
            clock: self.now.format(CLOCK_FORMAT).to_string(),
            next_trains: next_arrivals(snapshot),
            lines: line_views(snapshot, |key| self.is_expanded(key)),
            refreshing: self.loading,
            error: self.error.as_deref(),
        })
    }
}

impl BoardScreen<'_> {
    /// Loading banner text
    #[must_use]
    pub fn loading_message(station: Station) -> String {
        format!("Loading {station} data...")
    }
}
