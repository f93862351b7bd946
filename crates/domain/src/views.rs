//! Presentation views derived from a station snapshot
//!
//! Everything here is pure: the same snapshot and expanded flags always give
//! the same views.

use crate::entities::{LineGroup, StationSnapshot, TrainArrival};
use crate::value_objects::{DirectionSource, direction_label};

/// Entries shown in the "next trains" section
pub const NEXT_TRAINS_LIMIT: usize = 6;
/// Entries shown per direction while a line is collapsed
pub const COLLAPSED_LIMIT: usize = 3;
/// Entries shown per direction while a line is expanded
pub const EXPANDED_LIMIT: usize = 8;

/// Upcoming arrivals (departed entries removed), stable-sorted by minutes away
///
/// Entries with equal `minutes_away` keep their input order.
#[must_use]
pub fn upcoming(arrivals: &[TrainArrival]) -> Vec<&TrainArrival> {
    let mut upcoming: Vec<&TrainArrival> = arrivals.iter().filter(|a| !a.is_departed()).collect();
    upcoming.sort_by_key(|a| a.minutes_away);
    upcoming
}

/// The global "next trains" list across every line
#[must_use]
pub fn next_arrivals(snapshot: &StationSnapshot) -> Vec<&TrainArrival> {
    let mut next = upcoming(&snapshot.all_trains);
    next.truncate(NEXT_TRAINS_LIMIT);
    next
}

/// One column of a line section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionView<'a> {
    /// Feed list the column was built from
    pub source: DirectionSource,
    /// Column heading
    pub label: &'static str,
    /// Arrivals to display, already truncated
    pub arrivals: Vec<&'a TrainArrival>,
    /// Number of upcoming arrivals before truncation
    pub total: usize,
}

impl DirectionView<'_> {
    /// Whether the column shows the "no trains scheduled" indicator
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}

/// One line section of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView<'a> {
    pub key: &'a str,
    pub name: &'a str,
    /// Uptown column, or westbound on east-west lines
    pub north: DirectionView<'a>,
    /// Downtown column, or eastbound on east-west lines
    pub south: DirectionView<'a>,
    pub expanded: bool,
    /// Whether either direction has more arrivals than the collapsed limit
    pub expandable: bool,
}

impl LineView<'_> {
    /// Caption of the expand control, `None` when the control is hidden
    #[must_use]
    pub const fn toggle_label(&self) -> Option<&'static str> {
        if !self.expandable {
            return None;
        }
        if self.expanded {
            Some("SHOW LESS")
        } else {
            Some("SHOW MORE")
        }
    }
}

/// Build the section for one line group
#[must_use]
pub fn line_view<'a>(key: &'a str, group: &'a LineGroup, expanded: bool) -> LineView<'a> {
    let limit = if expanded {
        EXPANDED_LIMIT
    } else {
        COLLAPSED_LIMIT
    };

    let column = move |source: DirectionSource| {
        let mut arrivals = upcoming(group.arrivals(source));
        let total = arrivals.len();
        arrivals.truncate(limit);
        DirectionView {
            source,
            label: direction_label(source, key),
            arrivals,
            total,
        }
    };

    let north = column(group.north_source());
    let south = column(group.south_source());

    let expandable = north.total > COLLAPSED_LIMIT || south.total > COLLAPSED_LIMIT;

    LineView {
        key,
        name: &group.name,
        north,
        south,
        expanded,
        expandable,
    }
}

/// Build every line section in feed order
pub fn line_views<'a, F>(snapshot: &'a StationSnapshot, is_expanded: F) -> Vec<LineView<'a>>
where
    F: Fn(&str) -> bool,
{
    snapshot
        .lines
        .iter()
        .map(|(key, group)| line_view(key, group, is_expanded(key)))
        .collect()
}
