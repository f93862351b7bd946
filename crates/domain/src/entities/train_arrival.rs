//! Train arrival entity

use serde::{Deserialize, Serialize};

/// One scheduled arrival at the station
///
/// Arrivals have no identity beyond their position in a list and are never
/// modified after they are received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainArrival {
    /// Route identifier (e.g. "6", "Q", "L")
    pub route_id: String,
    /// Free-text direction label as provided by the feed
    pub direction: String,
    /// Arrival time in epoch seconds
    pub arrival_time: i64,
    /// Pre-formatted arrival time (e.g. "10:42 AM")
    pub arrival_time_formatted: String,
    /// Minutes until arrival, negative once the train has departed
    pub minutes_away: i64,
}

impl TrainArrival {
    /// Whether this entry describes a train that already left
    #[must_use]
    pub const fn is_departed(&self) -> bool {
        self.minutes_away < 0
    }
}
