//! Application services

mod arrivals_board;
mod board_screen;

pub use arrivals_board::{
    ArrivalsBoard, BoardState, BoardTimings, FETCH_ERROR_MESSAGE, RefreshOutcome,
};
pub use board_screen::{BoardFrame, BoardScreen};
