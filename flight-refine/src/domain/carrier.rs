//! Airline (carrier) code type and the carrier name dictionary.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid carrier code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid carrier code: {reason}")]
pub struct InvalidCarrierCode {
    reason: &'static str,
}

/// A valid airline designator.
///
/// IATA designators are 2 characters and ICAO designators are 3. Both use
/// uppercase ASCII letters and digits (e.g., "BA", "U2", "6E", "DLH").
///
/// # Examples
///
/// ```
/// use flight_refine::domain::CarrierCode;
///
/// let ba = CarrierCode::parse("BA").unwrap();
/// assert_eq!(ba.as_str(), "BA");
///
/// // Digits are allowed
/// assert!(CarrierCode::parse("6E").is_ok());
///
/// // Lowercase is rejected
/// assert!(CarrierCode::parse("ba").is_err());
///
/// // Wrong length is rejected
/// assert!(CarrierCode::parse("B").is_err());
/// assert!(CarrierCode::parse("BAWA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarrierCode {
    bytes: [u8; 3],
    len: u8,
}

impl CarrierCode {
    /// Parse a carrier code from a string.
    ///
    /// The input must be 2 or 3 characters, each an uppercase ASCII letter
    /// or a digit.
    pub fn parse(s: &str) -> Result<Self, InvalidCarrierCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 && bytes.len() != 3 {
            return Err(InvalidCarrierCode {
                reason: "must be 2 or 3 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidCarrierCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        let mut stored = [0u8; 3];
        stored[..bytes.len()].copy_from_slice(bytes);

        Ok(CarrierCode {
            bytes: stored,
            len: bytes.len() as u8,
        })
    }

    /// Returns the carrier code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored
        std::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }
}

impl fmt::Debug for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarrierCode({})", self.as_str())
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CarrierCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Carrier code → display name mapping, supplied alongside search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarrierDictionary {
    names: HashMap<CarrierCode, String>,
}

impl CarrierDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the name for a carrier.
    pub fn insert(&mut self, code: CarrierCode, name: impl Into<String>) {
        self.names.insert(code, name.into());
    }

    /// Look up the display name of a carrier.
    pub fn get(&self, code: &CarrierCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Display name of a carrier, falling back to the raw code.
    pub fn name_for<'a>(&'a self, code: &'a CarrierCode) -> &'a str {
        match self.get(code) {
            Some(name) if !name.is_empty() => name,
            _ => code.as_str(),
        }
    }

    /// Number of carriers in the dictionary.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(CarrierCode, String)> for CarrierDictionary {
    fn from_iter<I: IntoIterator<Item = (CarrierCode, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CarrierCode {
        CarrierCode::parse(s).unwrap()
    }

    #[test]
    fn parse_valid_carrier_codes() {
        assert!(CarrierCode::parse("BA").is_ok()); // British Airways
        assert!(CarrierCode::parse("AA").is_ok()); // American
        assert!(CarrierCode::parse("U2").is_ok()); // easyJet
        assert!(CarrierCode::parse("6E").is_ok()); // IndiGo
        assert!(CarrierCode::parse("DLH").is_ok()); // ICAO Lufthansa
    }

    #[test]
    fn reject_lowercase() {
        assert!(CarrierCode::parse("ba").is_err());
        assert!(CarrierCode::parse("Ba").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(CarrierCode::parse("").is_err());
        assert!(CarrierCode::parse("B").is_err());
        assert!(CarrierCode::parse("BAWA").is_err());
    }

    #[test]
    fn reject_punctuation() {
        assert!(CarrierCode::parse("B-").is_err());
        assert!(CarrierCode::parse("B ").is_err());
    }

    #[test]
    fn two_and_three_letter_codes_differ() {
        assert_ne!(code("LH"), code("LHX"));
        assert_eq!(code("LHX").as_str(), "LHX");
        assert_eq!(code("LH").as_str(), "LH");
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", code("VS")), "VS");
        assert_eq!(format!("{:?}", code("VS")), "CarrierCode(VS)");
    }

    #[test]
    fn serializes_as_string() {
        assert_eq!(serde_json::to_string(&code("AF")).unwrap(), "\"AF\"");
    }

    #[test]
    fn dictionary_falls_back_to_code() {
        let dict: CarrierDictionary = [(code("BA"), "BRITISH AIRWAYS".to_string())]
            .into_iter()
            .collect();

        assert_eq!(dict.name_for(&code("BA")), "BRITISH AIRWAYS");
        assert_eq!(dict.name_for(&code("VS")), "VS");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn dictionary_empty_name_falls_back_to_code() {
        let mut dict = CarrierDictionary::new();
        dict.insert(code("AA"), "");
        assert_eq!(dict.name_for(&code("AA")), "AA");
    }
}
