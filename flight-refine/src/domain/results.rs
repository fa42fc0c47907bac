//! A converted search response.

use super::{CarrierDictionary, FlightOffer};

/// Offers from one search, with the carrier names that came with them.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub offers: Vec<FlightOffer>,
    /// `None` when the response carried no carrier dictionary.
    pub carriers: Option<CarrierDictionary>,
}

impl SearchResults {
    pub fn new(offers: Vec<FlightOffer>, carriers: Option<CarrierDictionary>) -> Self {
        Self { offers, carriers }
    }
}
