//! Live terminal output of the board

use std::io::{self, Write};
use std::ops::ControlFlow;

use application::{BoardScreen, BoardState};
use tracing::debug;

use crate::render::Renderer;

/// Clears the terminal and homes the cursor
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Writes board frames to a terminal
///
/// The last command notice stays below the board until the next command.
/// Without color the terminal is not cleared between frames, so a frame
/// that differs from the previous one only by its clock is not written.
pub struct Screen<W> {
    out: W,
    renderer: Renderer,
    notice: Option<String>,
    last_frame: Option<String>,
}

impl<W: Write> Screen<W> {
    pub const fn new(out: W, renderer: Renderer) -> Self {
        Self {
            out,
            renderer,
            notice: None,
            last_frame: None,
        }
    }

    /// Replace the notice after a command; the next draw always writes
    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
        self.last_frame = None;
    }

    /// Draw `state`, stopping the loop once the terminal is gone
    pub fn paint(&mut self, state: &BoardState) -> ControlFlow<()> {
        match self.draw(state) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("stdout closed");
                ControlFlow::Break(())
            },
            Err(e) => {
                debug!(error = %e, "Failed to draw board");
                ControlFlow::Continue(())
            },
        }
    }

    fn draw(&mut self, state: &BoardState) -> io::Result<()> {
        let screen = state.screen();

        if !self.renderer.is_color() {
            let frame = self.without_clock(&screen);
            if self.last_frame.as_ref() == Some(&frame) {
                return Ok(());
            }
            self.last_frame = Some(frame);
        }

        let mut out = String::new();
        if self.renderer.is_color() {
            out.push_str(CLEAR_SCREEN);
        }
        out.push_str(&self.renderer.render(&screen));
        if let Some(notice) = &self.notice {
            out.push('\n');
            out.push_str(notice);
            out.push('\n');
        }
        out.push_str("\n> ");

        self.out.write_all(out.as_bytes())?;
        self.out.flush()
    }

    fn without_clock(&self, screen: &BoardScreen<'_>) -> String {
        match screen {
            BoardScreen::Board(frame) => {
                let mut frame = frame.clone();
                frame.clock.clear();
                self.renderer.render(&BoardScreen::Board(frame))
            },
            other => self.renderer.render(other),
        }
    }

    #[cfg(test)]
    pub(crate) const fn output(&self) -> &W {
        &self.out
    }
}
