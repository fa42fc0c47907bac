//! Amadeus flight-offers search responses.
//!
//! The refinement pipeline does not talk to the API itself; it consumes a
//! response that some other component fetched. This module decodes such a
//! response (from a string or a saved file) and converts it to domain
//! types.
//!
//! Key characteristics of the response:
//! - Prices are decimal strings, and only `grandTotal` is used for ranking
//! - Timestamps are airport-local, without an offset
//! - Carrier names arrive separately, in `dictionaries.carriers`

mod convert;
mod error;
mod types;

use std::path::Path;

use tracing::debug;

use crate::domain::SearchResults;

pub use convert::{ConversionError, convert_offer, convert_search_response};
pub use error::AmadeusError;
pub use types::{
    Dictionaries, EndpointDto, FlightOfferDto, FlightSearchResponse, ItineraryDto, PriceDto,
    SegmentDto,
};

/// Decode a search response body.
pub fn parse_search_response(body: &str) -> Result<FlightSearchResponse, AmadeusError> {
    Ok(serde_json::from_str(body)?)
}

/// Read a saved search response and convert it to domain types.
pub fn load_search_response(path: &Path) -> Result<SearchResults, AmadeusError> {
    let body = std::fs::read_to_string(path).map_err(|source| AmadeusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let response = parse_search_response(&body)?;
    let results = convert_search_response(&response);

    debug!(
        path = %path.display(),
        received = response.data.len(),
        converted = results.offers.len(),
        "loaded search response"
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BODY: &str = r#"{
        "data": [
            {
                "id": "1",
                "itineraries": [
                    {
                        "duration": "PT1H15M",
                        "segments": [
                            {
                                "departure": { "iataCode": "JFK", "at": "2024-03-15T09:00:00" },
                                "arrival": { "iataCode": "BOS", "at": "2024-03-15T10:15:00" },
                                "carrierCode": "B6",
                                "number": "1"
                            }
                        ]
                    }
                ],
                "price": { "currency": "USD", "grandTotal": "120.00" }
            }
        ],
        "dictionaries": { "carriers": { "B6": "JETBLUE AIRWAYS" } }
    }"#;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BODY.as_bytes()).unwrap();

        let results = load_search_response(file.path()).unwrap();
        assert_eq!(results.offers.len(), 1);
        assert_eq!(results.offers[0].grand_total(), 120.0);
        assert_eq!(results.carriers.map(|c| c.len()), Some(1));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_search_response(&path).unwrap_err();
        assert!(matches!(err, AmadeusError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"data\": [ ").unwrap();

        let err = load_search_response(file.path()).unwrap_err();
        assert!(matches!(err, AmadeusError::Json(_)));
    }

    #[test]
    fn wrong_shape_is_a_json_error() {
        let err = parse_search_response(r#"{ "data": "nope" }"#).unwrap_err();
        assert!(matches!(err, AmadeusError::Json(_)));
    }
}
