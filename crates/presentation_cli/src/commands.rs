//! Interactive board commands read from stdin

/// A single line of user input on the live board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Fetch immediately
    Refresh,
    /// Toggle a line's expanded flag
    Toggle(String),
    /// Print the station list
    Stations,
    /// Print the command help
    Help,
    /// Tear the board down and exit
    Quit,
    /// Anything else is taken as a station name
    Select(String),
}

impl BoardCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        let command = match (head, rest) {
            ("r" | "refresh", "") => Self::Refresh,
            ("s" | "stations", "") => Self::Stations,
            ("h" | "help" | "?", "") => Self::Help,
            ("q" | "quit" | "exit", "") => Self::Quit,
            ("e" | "expand", key) if !key.is_empty() => Self::Toggle(key.to_string()),
            _ => Self::Select(line.to_string()),
        };
        Some(command)
    }
}

/// Help text shown on `help`
pub const HELP: &str = "\
Commands:
  <station name>     switch station (e.g. Times Square)
  r, refresh         refresh now
  e, expand <LINE>   show more / show less for a line
  s, stations        list stations
  q, quit            exit";
