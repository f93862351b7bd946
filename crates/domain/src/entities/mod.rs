//! Domain entities - the station snapshot as delivered by the arrivals feed

mod line_group;
mod station_snapshot;
mod train_arrival;

pub use line_group::LineGroup;
pub use station_snapshot::StationSnapshot;
pub use train_arrival::TrainArrival;
