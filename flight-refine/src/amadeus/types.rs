//! Flight-offers search response DTOs.
//!
//! These types map directly to the JSON returned by the Amadeus
//! flight-offers search. Fields the API may leave out are `Option`, and
//! unknown fields are ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    pub meta: Option<Meta>,

    /// The offers. Missing means none.
    #[serde(default)]
    pub data: Vec<FlightOfferDto>,

    /// Lookup tables for codes used in `data`.
    pub dictionaries: Option<Dictionaries>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub count: Option<u32>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

/// Code lookup tables sent alongside the offers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionaries {
    /// Carrier code to carrier name, e.g. "BA" to "BRITISH AIRWAYS".
    pub carriers: Option<HashMap<String, String>>,
    /// Aircraft code to aircraft name.
    pub aircraft: Option<HashMap<String, String>>,
    pub currencies: Option<HashMap<String, String>>,
    pub locations: Option<HashMap<String, LocationEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    pub city_code: Option<String>,
    pub country_code: Option<String>,
}

/// One priced offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOfferDto {
    pub id: Option<String>,
    pub source: Option<String>,
    pub instant_ticketing_required: Option<bool>,
    pub non_homogeneous: Option<bool>,
    pub one_way: Option<bool>,
    pub last_ticketing_date: Option<String>,
    pub number_of_bookable_seats: Option<u32>,

    #[serde(default)]
    pub itineraries: Vec<ItineraryDto>,

    pub price: Option<PriceDto>,
    pub pricing_options: Option<PricingOptions>,

    #[serde(default)]
    pub validating_airline_codes: Vec<String>,

    #[serde(default)]
    pub traveler_pricings: Vec<TravelerPricingDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDto {
    /// ISO-8601 duration, e.g. "PT7H25M".
    pub duration: Option<String>,

    #[serde(default)]
    pub segments: Vec<SegmentDto>,
}

/// One flight within an itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    pub departure: Option<EndpointDto>,
    pub arrival: Option<EndpointDto>,

    /// Marketing carrier.
    pub carrier_code: Option<String>,

    /// Flight number without the carrier prefix.
    pub number: Option<String>,

    pub aircraft: Option<AircraftDto>,
    pub operating: Option<OperatingDto>,
    pub duration: Option<String>,
    pub id: Option<String>,

    /// Technical stops, not connections.
    pub number_of_stops: Option<u32>,

    #[serde(rename = "blacklistedInEU")]
    pub blacklisted_in_eu: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDto {
    pub iata_code: Option<String>,
    pub terminal: Option<String>,
    /// Airport-local timestamp without offset.
    pub at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AircraftDto {
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingDto {
    pub carrier_code: Option<String>,
}

/// Amounts are decimal strings, e.g. "546.70".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub currency: Option<String>,
    pub total: Option<String>,
    pub base: Option<String>,

    #[serde(default)]
    pub fees: Vec<FeeDto>,

    pub grand_total: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeeDto {
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOptions {
    #[serde(default)]
    pub fare_type: Vec<String>,
    pub included_checked_bags_only: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerPricingDto {
    pub traveler_id: Option<String>,
    pub fare_option: Option<String>,
    pub traveler_type: Option<String>,
    pub price: Option<TravelerPriceDto>,

    #[serde(default)]
    pub fare_details_by_segment: Vec<FareDetailsDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TravelerPriceDto {
    pub currency: Option<String>,
    pub total: Option<String>,
    pub base: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareDetailsDto {
    pub segment_id: Option<String>,
    pub cabin: Option<String>,
    pub fare_basis: Option<String>,
    /// Booking class letter.
    pub class: Option<String>,
    pub included_checked_bags: Option<CheckedBagsDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedBagsDto {
    pub weight: Option<u32>,
    pub weight_unit: Option<String>,
    pub quantity: Option<u32>,
}
