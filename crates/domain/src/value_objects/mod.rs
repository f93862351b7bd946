//! Value Objects - Immutable, identity-less domain primitives

mod direction;
mod route_color;
mod station;

pub use direction::{DirectionSource, direction_label};
pub use route_color::RouteColor;
pub use station::{Station, station_slug};
