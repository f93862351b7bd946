//! Line group entity

use serde::{Deserialize, Serialize};

use super::TrainArrival;
use crate::value_objects::DirectionSource;

/// One subway line (or line bundle) with its directional arrival lists
///
/// The feed populates either the uptown/downtown pair or the
/// westbound/eastbound pair. The board always shows both sides of the
/// populated axis; a side the feed omitted shows as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGroup {
    /// Display name (e.g. "4/5/6 Lexington Avenue")
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptown: Option<Vec<TrainArrival>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtown: Option<Vec<TrainArrival>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub westbound: Option<Vec<TrainArrival>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eastbound: Option<Vec<TrainArrival>>,
}

impl LineGroup {
    /// Arrivals for one direction, `None` when the feed omitted it
    #[must_use]
    pub fn direction(&self, source: DirectionSource) -> Option<&[TrainArrival]> {
        let list = match source {
            DirectionSource::Uptown => &self.uptown,
            DirectionSource::Downtown => &self.downtown,
            DirectionSource::Westbound => &self.westbound,
            DirectionSource::Eastbound => &self.eastbound,
        };
        list.as_deref()
    }

    /// Whether the feed populated the uptown/downtown axis
    ///
    /// Lines with neither axis are treated as east-west lines.
    #[must_use]
    pub const fn is_north_south(&self) -> bool {
        self.uptown.is_some() || self.downtown.is_some()
    }

    /// Source of the north-side column: uptown on north-south lines,
    /// westbound otherwise
    #[must_use]
    pub const fn north_source(&self) -> DirectionSource {
        if self.is_north_south() {
            DirectionSource::Uptown
        } else {
            DirectionSource::Westbound
        }
    }

    /// Source of the south-side column: downtown on north-south lines,
    /// eastbound otherwise
    #[must_use]
    pub const fn south_source(&self) -> DirectionSource {
        if self.is_north_south() {
            DirectionSource::Downtown
        } else {
            DirectionSource::Eastbound
        }
    }

    /// Arrivals for one direction, empty when the feed omitted it
    #[must_use]
    pub fn arrivals(&self, source: DirectionSource) -> &[TrainArrival] {
        self.direction(source).unwrap_or_default()
    }
}
