//! The filter and aggregate engine.
//!
//! Pure functions over an immutable list of offers: stop classification,
//! airline extraction, filtering, sorting, price bounds and statistics,
//! default filters, and the price histogram. They accept anything that
//! borrows as a [`FlightOffer`](crate::domain::FlightOffer), so the store can
//! pass shared `Arc` handles without cloning offers.

mod aggregate;
mod config;
mod filter;
mod histogram;
mod sort;

pub use aggregate::{
    available_airlines, default_filters, has_active_filters, price_bounds, price_stats,
};
pub use config::RefineConfig;
pub use filter::{filter_flights, matches_filters, offer_airlines, stop_count};
pub use histogram::price_distribution;
pub use sort::{compare, sort_flights};
