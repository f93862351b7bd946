//! Station value object

use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// The stations the board can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Station {
    #[default]
    UnionSquare,
    TimesSquare,
    GrandCentral,
    AtlanticAvenue,
    HeraldSquare,
    ColumbusCircle,
    FultonStreet,
}

impl Station {
    /// All stations in selector order
    pub const ALL: [Self; 7] = [
        Self::UnionSquare,
        Self::TimesSquare,
        Self::GrandCentral,
        Self::AtlanticAvenue,
        Self::HeraldSquare,
        Self::ColumbusCircle,
        Self::FultonStreet,
    ];

    /// Display name, also the value matched by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnionSquare => "Union Square",
            Self::TimesSquare => "Times Square",
            Self::GrandCentral => "Grand Central",
            Self::AtlanticAvenue => "Atlantic Avenue",
            Self::HeraldSquare => "Herald Square",
            Self::ColumbusCircle => "Columbus Circle",
            Self::FultonStreet => "Fulton Street",
        }
    }

    /// URL path segment used by the arrivals API
    #[must_use]
    pub fn slug(self) -> String {
        station_slug(self.name())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Station {
    type Err = DomainError;

    /// Case-sensitive match against the display names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|station| station.name() == s)
            .ok_or_else(|| DomainError::UnknownStation(s.to_string()))
    }
}

/// Lower-case a station name and replace each whitespace run with one hyphen
#[must_use]
pub fn station_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            slug.extend(c.to_lowercase());
        }
    }

    slug
}
