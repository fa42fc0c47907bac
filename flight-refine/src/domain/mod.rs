//! Domain types for flight search results.
//!
//! This module contains the records the refinement pipeline works on.
//! Offers are validated when they are built, so code that receives a
//! `FlightOffer` can rely on it having an outbound itinerary with at least
//! one segment.

mod carrier;
mod error;
mod filter;
mod offer;
mod results;
mod sort;
mod summary;
mod time;

pub use carrier::{CarrierCode, CarrierDictionary, InvalidCarrierCode};
pub use error::DomainError;
pub use filter::{FULL_DAY, FilterState, FilterUpdate, TWO_PLUS_STOPS};
pub use offer::{
    CheckedBags, Endpoint, FareDetails, Fee, FlightOffer, Itinerary, Price, Segment,
    TravelerPricing, parse_amount,
};
pub use results::SearchResults;
pub use sort::{SortKey, UnknownSortKey};
pub use summary::{Airline, PriceDataPoint, PriceStats};
pub use time::{IsoDuration, LocalTimestamp, TimestampError};
