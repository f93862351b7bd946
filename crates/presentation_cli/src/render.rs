//! Terminal rendering of the board screen

use application::{BoardFrame, BoardScreen};
use domain::{DirectionView, LineView, RouteColor, TrainArrival};
use owo_colors::OwoColorize;

/// Accent color of headings and controls
const AMBER: (u8, u8, u8) = (245, 158, 11);
/// Width of the direction column in the next-trains list
const DIRECTION_WIDTH: usize = 24;

/// Renders screens to plain or ANSI-colored text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether ANSI escape sequences are emitted
    pub const fn is_color(self) -> bool {
        self.color
    }

    /// Render a full screen
    pub fn render(&self, screen: &BoardScreen<'_>) -> String {
        match screen {
            BoardScreen::Error { message } => format!("{}\n", self.error(message)),
            BoardScreen::Loading { station } => {
                format!("{}\n", self.accent(&BoardScreen::loading_message(*station)))
            },
            BoardScreen::Board(frame) => self.board(frame),
        }
    }

    fn board(&self, frame: &BoardFrame<'_>) -> String {
        let mut out = String::new();

        let status = if frame.refreshing { "  refreshing..." } else { "" };
        out.push_str(&format!(
            "{}   {}{}\n",
            self.heading(&frame.title),
            frame.clock,
            status
        ));
        if let Some(error) = frame.error {
            out.push_str(&format!("{}\n", self.error(error)));
        }

        out.push('\n');
        out.push_str(&format!("{}\n", self.heading("NEXT TRAINS")));
        for arrival in &frame.next_trains {
            out.push_str(&format!(
                "  {} {:<width$} {}\n",
                self.bullet(&arrival.route_id),
                arrival.direction,
                self.eta(arrival),
                width = DIRECTION_WIDTH
            ));
        }

        for line in &frame.lines {
            out.push('\n');
            out.push_str(&self.line(line));
        }

        out
    }

    fn line(&self, line: &LineView<'_>) -> String {
        let mut out = self.heading(line.name);
        if let Some(toggle) = line.toggle_label() {
            out.push_str(&format!("   {} (e {})", self.accent(&format!("[{toggle}]")), line.key));
        }
        out.push('\n');

        for direction in [&line.north, &line.south] {
            out.push_str(&self.direction(direction));
        }
        out
    }

    fn direction(&self, direction: &DirectionView<'_>) -> String {
        let mut out = format!("  {}\n", self.accent(direction.label));
        if direction.is_empty() {
            out.push_str("    No trains scheduled\n");
        }
        for arrival in &direction.arrivals {
            out.push_str(&format!(
                "    {} {}\n",
                self.bullet(&arrival.route_id),
                self.eta(arrival)
            ));
        }
        out
    }

    fn eta(&self, arrival: &TrainArrival) -> String {
        let minutes = format!("{} min", arrival.minutes_away);
        let minutes = if self.color {
            minutes.bold().to_string()
        } else {
            minutes
        };
        format!("{minutes} ({})", arrival.arrival_time_formatted)
    }

    fn bullet(&self, route_id: &str) -> String {
        if !self.color {
            return format!("({route_id})");
        }
        let (r, g, b) = RouteColor::for_route(route_id).rgb();
        format!(" {route_id} ")
            .on_truecolor(r, g, b)
            .white()
            .bold()
            .to_string()
    }

    fn heading(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let (r, g, b) = AMBER;
        text.truecolor(r, g, b).bold().to_string()
    }

    fn accent(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let (r, g, b) = AMBER;
        text.truecolor(r, g, b).to_string()
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            format!("! {text}")
        }
    }
}
