//! Conversion from search response DTOs to domain types.
//!
//! Offers that fail validation are logged and skipped so one malformed
//! offer does not lose the rest of the response.

use tracing::warn;

use crate::domain::{
    CarrierCode, CarrierDictionary, CheckedBags, DomainError, Endpoint, FareDetails, Fee,
    FlightOffer, IsoDuration, Itinerary, LocalTimestamp, Price, SearchResults, Segment,
    TravelerPricing,
};

use super::types::{
    Dictionaries, EndpointDto, FareDetailsDto, FlightOfferDto, FlightSearchResponse,
    ItineraryDto, PriceDto, SegmentDto, TravelerPricingDto,
};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Carrier code that is not 2-3 uppercase letters or digits
    #[error("invalid carrier code: {0}")]
    InvalidCarrier(String),

    /// Timestamp that is not ISO-8601 local date-time
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("offer has no itineraries")]
    EmptyItineraries,

    #[error("itinerary has no segments")]
    EmptySegments,
}

impl From<DomainError> for ConversionError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NoItineraries => ConversionError::EmptyItineraries,
            DomainError::EmptyItinerary => ConversionError::EmptySegments,
        }
    }
}

/// Convert a search response to domain types.
///
/// Invalid offers are skipped with a warning. The carrier dictionary is
/// `None` when the response carried none.
pub fn convert_search_response(response: &FlightSearchResponse) -> SearchResults {
    let mut offers = Vec::with_capacity(response.data.len());

    for (index, dto) in response.data.iter().enumerate() {
        match convert_offer(dto) {
            Ok(offer) => offers.push(offer),
            Err(e) => {
                warn!(
                    index,
                    offer = dto.id.as_deref().unwrap_or("?"),
                    error = %e,
                    "skipping invalid offer"
                );
            }
        }
    }

    let carriers = response
        .dictionaries
        .as_ref()
        .and_then(convert_carriers);

    SearchResults::new(offers, carriers)
}

/// Build the carrier dictionary, dropping entries with invalid codes.
fn convert_carriers(dictionaries: &Dictionaries) -> Option<CarrierDictionary> {
    let carriers = dictionaries.carriers.as_ref()?;

    let mut dictionary = CarrierDictionary::new();
    for (code, name) in carriers {
        match CarrierCode::parse(code) {
            Ok(code) => dictionary.insert(code, name.clone()),
            Err(e) => warn!(code = %code, error = %e, "skipping carrier dictionary entry"),
        }
    }
    Some(dictionary)
}

/// Convert a single offer.
pub fn convert_offer(dto: &FlightOfferDto) -> Result<FlightOffer, ConversionError> {
    let id = dto.id.as_ref().ok_or(ConversionError::MissingField("id"))?;

    if dto.itineraries.is_empty() {
        return Err(ConversionError::EmptyItineraries);
    }
    let itineraries = dto
        .itineraries
        .iter()
        .map(convert_itinerary)
        .collect::<Result<Vec<_>, _>>()?;

    let price = convert_price(
        dto.price
            .as_ref()
            .ok_or(ConversionError::MissingField("price"))?,
    )?;

    let mut offer = FlightOffer::new(id.clone(), itineraries, price)?;

    if let Some(one_way) = dto.one_way {
        offer.one_way = one_way;
    }
    offer.bookable_seats = dto.number_of_bookable_seats;
    offer.last_ticketing_date = dto.last_ticketing_date.clone();
    // Validating carriers are informational; a bad code is not worth the offer
    offer.validating_carriers = dto
        .validating_airline_codes
        .iter()
        .filter_map(|code| CarrierCode::parse(code).ok())
        .collect();
    offer.traveler_pricings = dto
        .traveler_pricings
        .iter()
        .map(convert_traveler_pricing)
        .collect();

    Ok(offer)
}

fn convert_itinerary(dto: &ItineraryDto) -> Result<Itinerary, ConversionError> {
    if dto.segments.is_empty() {
        return Err(ConversionError::EmptySegments);
    }
    let segments = dto
        .segments
        .iter()
        .map(convert_segment)
        .collect::<Result<Vec<_>, _>>()?;

    let duration = IsoDuration::new(dto.duration.clone().unwrap_or_default());
    Ok(Itinerary::new(duration, segments)?)
}

fn convert_segment(dto: &SegmentDto) -> Result<Segment, ConversionError> {
    let departure = convert_endpoint(
        dto.departure
            .as_ref()
            .ok_or(ConversionError::MissingField("segment departure"))?,
    )?;
    let arrival = convert_endpoint(
        dto.arrival
            .as_ref()
            .ok_or(ConversionError::MissingField("segment arrival"))?,
    )?;

    let code = dto
        .carrier_code
        .as_ref()
        .ok_or(ConversionError::MissingField("carrierCode"))?;
    let carrier =
        CarrierCode::parse(code).map_err(|_| ConversionError::InvalidCarrier(code.clone()))?;

    let duration = IsoDuration::new(dto.duration.clone().unwrap_or_default());

    let mut segment = Segment::new(departure, arrival, carrier, duration);
    segment.number = dto.number.clone().unwrap_or_default();
    segment.operating_carrier = dto
        .operating
        .as_ref()
        .and_then(|op| op.carrier_code.as_deref())
        .and_then(|code| CarrierCode::parse(code).ok());
    segment.aircraft = dto.aircraft.as_ref().and_then(|a| a.code.clone());
    segment.id = dto.id.clone();
    segment.technical_stops = dto.number_of_stops.unwrap_or(0);

    Ok(segment)
}

fn convert_endpoint(dto: &EndpointDto) -> Result<Endpoint, ConversionError> {
    let airport = dto
        .iata_code
        .as_ref()
        .ok_or(ConversionError::MissingField("iataCode"))?;
    let at = dto.at.as_ref().ok_or(ConversionError::MissingField("at"))?;
    let at = LocalTimestamp::parse(at).map_err(|_| ConversionError::InvalidTimestamp(at.clone()))?;

    let mut endpoint = Endpoint::new(airport.clone(), at);
    endpoint.terminal = dto.terminal.clone();
    Ok(endpoint)
}

fn convert_price(dto: &PriceDto) -> Result<Price, ConversionError> {
    let currency = dto
        .currency
        .as_ref()
        .ok_or(ConversionError::MissingField("price currency"))?;
    let grand_total = dto
        .grand_total
        .as_ref()
        .ok_or(ConversionError::MissingField("price grandTotal"))?;

    Ok(Price {
        currency: currency.clone(),
        total: dto.total.clone().unwrap_or_else(|| grand_total.clone()),
        base: dto.base.clone().unwrap_or_default(),
        grand_total: grand_total.clone(),
        fees: dto
            .fees
            .iter()
            .map(|fee| Fee {
                amount: fee.amount.clone().unwrap_or_default(),
                kind: fee.kind.clone().unwrap_or_default(),
            })
            .collect(),
    })
}

fn convert_traveler_pricing(dto: &TravelerPricingDto) -> TravelerPricing {
    let price = dto.price.as_ref();
    TravelerPricing {
        traveler_id: dto.traveler_id.clone().unwrap_or_default(),
        fare_option: dto.fare_option.clone().unwrap_or_default(),
        traveler_type: dto.traveler_type.clone().unwrap_or_default(),
        currency: price.and_then(|p| p.currency.clone()).unwrap_or_default(),
        total: price.and_then(|p| p.total.clone()).unwrap_or_default(),
        base: price.and_then(|p| p.base.clone()).unwrap_or_default(),
        fare_details: dto
            .fare_details_by_segment
            .iter()
            .map(convert_fare_details)
            .collect(),
    }
}

fn convert_fare_details(dto: &FareDetailsDto) -> FareDetails {
    FareDetails {
        segment_id: dto.segment_id.clone().unwrap_or_default(),
        cabin: dto.cabin.clone().unwrap_or_default(),
        fare_basis: dto.fare_basis.clone().unwrap_or_default(),
        booking_class: dto.class.clone().unwrap_or_default(),
        checked_bags: dto.included_checked_bags.as_ref().map(|bags| CheckedBags {
            weight: bags.weight,
            weight_unit: bags.weight_unit.clone(),
            quantity: bags.quantity,
        }),
    }
}
