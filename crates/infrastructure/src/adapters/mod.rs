//! Adapters implementing application ports

mod arrivals_adapter;

pub use arrivals_adapter::ArrivalsAdapter;
