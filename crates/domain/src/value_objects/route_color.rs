//! Route color value object

/// Bullet color of a subway route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteColor {
    Red,
    Green,
    Purple,
    Blue,
    Orange,
    Yellow,
    Lime,
    Brown,
    DarkGray,
    Gray,
}

const ROUTE_COLORS: [(&str, RouteColor); 23] = [
    ("1", RouteColor::Red),
    ("2", RouteColor::Red),
    ("3", RouteColor::Red),
    ("4", RouteColor::Green),
    ("5", RouteColor::Green),
    ("6", RouteColor::Green),
    ("7", RouteColor::Purple),
    ("A", RouteColor::Blue),
    ("C", RouteColor::Blue),
    ("E", RouteColor::Blue),
    ("B", RouteColor::Orange),
    ("D", RouteColor::Orange),
    ("F", RouteColor::Orange),
    ("M", RouteColor::Orange),
    ("N", RouteColor::Yellow),
    ("Q", RouteColor::Yellow),
    ("R", RouteColor::Yellow),
    ("W", RouteColor::Yellow),
    ("G", RouteColor::Lime),
    ("J", RouteColor::Brown),
    ("Z", RouteColor::Brown),
    ("L", RouteColor::DarkGray),
    ("S", RouteColor::Gray),
];

impl RouteColor {
    /// Used for routes missing from the table
    pub const DEFAULT: Self = Self::Blue;

    /// Look up the color of a known route
    #[must_use]
    pub fn lookup(route_id: &str) -> Option<Self> {
        ROUTE_COLORS
            .iter()
            .find(|(id, _)| *id == route_id)
            .map(|(_, color)| *color)
    }

    /// Color for any route id, falling back to [`RouteColor::DEFAULT`]
    #[must_use]
    pub fn for_route(route_id: &str) -> Self {
        Self::lookup(route_id).unwrap_or(Self::DEFAULT)
    }

    /// RGB components of the bullet background
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (220, 38, 38),
            Self::Green => (22, 163, 74),
            Self::Purple => (147, 51, 234),
            Self::Blue => (37, 99, 235),
            Self::Orange => (249, 115, 22),
            Self::Yellow => (234, 179, 8),
            Self::Lime => (132, 204, 22),
            Self::Brown => (153, 102, 51),
            Self::DarkGray => (75, 85, 99),
            Self::Gray => (107, 114, 128),
        }
    }
}
