//! Derived summary values handed to the presentation layer.

use serde::Serialize;

use super::CarrierCode;

/// Aggregate grand-total statistics over a list of offers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub count: usize,
}

/// One price histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDataPoint {
    /// Center of the bucket's price range
    pub price: f64,
    /// Offers whose grand total falls in the bucket
    pub count: usize,
    /// Display label, e.g. "$100 - $300"
    pub range: String,
}

/// A carrier with its resolved display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airline {
    pub code: CarrierCode,
    pub name: String,
}
