//! Direction value object and label rules

use std::fmt;

/// Which feed list a board column was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionSource {
    Uptown,
    Downtown,
    Westbound,
    Eastbound,
}

impl DirectionSource {
    /// Feed key of the list
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Uptown => "uptown",
            Self::Downtown => "downtown",
            Self::Westbound => "westbound",
            Self::Eastbound => "eastbound",
        }
    }

    /// Label used when no line-specific rule applies
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Uptown => "UPTOWN / BRONX",
            Self::Downtown => "DOWNTOWN / BROOKLYN",
            Self::Westbound => "WESTBOUND",
            Self::Eastbound => "EASTBOUND",
        }
    }
}

impl fmt::Display for DirectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Line-specific labels for east-west lines, keyed by (source, line key)
const LINE_LABEL_RULES: [(DirectionSource, &str, &str); 5] = [
    (DirectionSource::Westbound, "L", "TO 8 AVE"),
    (DirectionSource::Eastbound, "L", "TO CANARSIE"),
    (DirectionSource::Westbound, "7", "TO HUDSON YARDS"),
    (DirectionSource::Eastbound, "7", "TO FLUSHING"),
    (DirectionSource::Westbound, "S", "TO TIMES SQUARE"),
];

/// Resolve the column heading for a direction of a line
///
/// Uptown and downtown always use their fixed wording. Westbound and
/// eastbound consult the line rule table first and fall back to the generic
/// compass label.
#[must_use]
pub fn direction_label(source: DirectionSource, line_key: &str) -> &'static str {
    LINE_LABEL_RULES
        .iter()
        .find(|(rule_source, rule_line, _)| *rule_source == source && *rule_line == line_key)
        .map_or_else(|| source.default_label(), |(_, _, label)| *label)
}
