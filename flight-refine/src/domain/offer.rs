//! Flight offer types.
//!
//! A `FlightOffer` is one priced combination of itineraries returned by a
//! search. Offers are immutable once built; the refinement pipeline only
//! reads them and copies them into derived views.

use super::{CarrierCode, DomainError, IsoDuration, LocalTimestamp};

/// One end of a flight segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// IATA airport code
    pub airport: String,
    /// Terminal, when the API knows it
    pub terminal: Option<String>,
    /// Airport-local time
    pub at: LocalTimestamp,
}

impl Endpoint {
    /// Creates an endpoint without a terminal.
    pub fn new(airport: impl Into<String>, at: LocalTimestamp) -> Self {
        Self {
            airport: airport.into(),
            terminal: None,
            at,
        }
    }
}

/// One non-stop flight leg between two airports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub departure: Endpoint,
    pub arrival: Endpoint,
    /// Marketing carrier
    pub carrier: CarrierCode,
    /// Flight number without the carrier prefix
    pub number: String,
    /// Operating carrier, when different from the marketing carrier
    pub operating_carrier: Option<CarrierCode>,
    /// Aircraft type code
    pub aircraft: Option<String>,
    pub duration: IsoDuration,
    /// Segment identifier within the offer
    pub id: Option<String>,
    /// Technical stops on this segment (not counted as stops by the filters)
    pub technical_stops: u32,
}

impl Segment {
    /// Creates a segment with only the required fields set.
    pub fn new(
        departure: Endpoint,
        arrival: Endpoint,
        carrier: CarrierCode,
        duration: IsoDuration,
    ) -> Self {
        Self {
            departure,
            arrival,
            carrier,
            number: String::new(),
            operating_carrier: None,
            aircraft: None,
            duration,
            id: None,
            technical_stops: 0,
        }
    }

    /// Flight designator such as "BA117".
    pub fn flight_designator(&self) -> String {
        format!("{}{}", self.carrier, self.number)
    }
}

/// One direction of travel: outbound or return.
///
/// # Invariants
///
/// - At least one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    duration: IsoDuration,
    segments: Vec<Segment>,
}

impl Itinerary {
    /// Constructs an itinerary.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyItinerary` if `segments` is empty.
    pub fn new(duration: IsoDuration, segments: Vec<Segment>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self { duration, segments })
    }

    /// Total duration as given by the API.
    pub fn duration(&self) -> &IsoDuration {
        &self.duration
    }

    /// Segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of stops: segment count minus one.
    pub fn stops(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn first_segment(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn last_segment(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Departure of the first segment.
    pub fn departure(&self) -> &Endpoint {
        &self.first_segment().departure
    }

    /// Arrival of the last segment.
    pub fn arrival(&self) -> &Endpoint {
        &self.last_segment().arrival
    }
}

/// A fee line in a price breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fee {
    pub amount: String,
    pub kind: String,
}

/// Offer price.
///
/// Amounts are kept as the exact decimal strings received, so no rounding
/// happens before a value is actually needed as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub currency: String,
    pub total: String,
    pub base: String,
    pub grand_total: String,
    pub fees: Vec<Fee>,
}

impl Price {
    /// A price whose total, base and grand total are all `amount`.
    pub fn flat(currency: impl Into<String>, amount: impl Into<String>) -> Self {
        let amount = amount.into();
        Self {
            currency: currency.into(),
            total: amount.clone(),
            base: amount.clone(),
            grand_total: amount,
            fees: Vec::new(),
        }
    }

    /// Numeric grand total. NaN if the text holds no number.
    pub fn grand_total_amount(&self) -> f64 {
        parse_amount(&self.grand_total)
    }

    /// Numeric base fare. NaN if the text holds no number.
    pub fn base_amount(&self) -> f64 {
        parse_amount(&self.base)
    }

    /// Taxes and fees: grand total minus base fare.
    pub fn taxes_amount(&self) -> f64 {
        self.grand_total_amount() - self.base_amount()
    }
}

/// Checked baggage allowance for one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedBags {
    pub weight: Option<u32>,
    pub weight_unit: Option<String>,
    pub quantity: Option<u32>,
}

/// Fare details for one traveler on one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareDetails {
    pub segment_id: String,
    pub cabin: String,
    pub fare_basis: String,
    pub booking_class: String,
    pub checked_bags: Option<CheckedBags>,
}

/// Price breakdown for one traveler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelerPricing {
    pub traveler_id: String,
    pub fare_option: String,
    pub traveler_type: String,
    pub currency: String,
    pub total: String,
    pub base: String,
    pub fare_details: Vec<FareDetails>,
}

/// One bookable priced flight combination.
///
/// # Invariants
///
/// - At least one itinerary (one for one-way, two for round-trip)
/// - Every itinerary has at least one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightOffer {
    pub id: String,
    itineraries: Vec<Itinerary>,
    pub price: Price,
    pub traveler_pricings: Vec<TravelerPricing>,
    pub validating_carriers: Vec<CarrierCode>,
    pub one_way: bool,
    pub bookable_seats: Option<u32>,
    pub last_ticketing_date: Option<String>,
}

impl FlightOffer {
    /// Constructs an offer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoItineraries` if `itineraries` is empty.
    pub fn new(
        id: impl Into<String>,
        itineraries: Vec<Itinerary>,
        price: Price,
    ) -> Result<Self, DomainError> {
        if itineraries.is_empty() {
            return Err(DomainError::NoItineraries);
        }
        Ok(Self {
            id: id.into(),
            one_way: itineraries.len() == 1,
            itineraries,
            price,
            traveler_pricings: Vec::new(),
            validating_carriers: Vec::new(),
            bookable_seats: None,
            last_ticketing_date: None,
        })
    }

    /// Itineraries in travel order.
    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// The outbound (first) itinerary.
    pub fn outbound(&self) -> &Itinerary {
        &self.itineraries[0]
    }

    /// The return itinerary of a round trip.
    pub fn inbound(&self) -> Option<&Itinerary> {
        self.itineraries.get(1)
    }

    /// Departure time of the first segment of the outbound itinerary.
    pub fn first_departure(&self) -> &LocalTimestamp {
        &self.outbound().departure().at
    }

    /// Numeric grand total. NaN if the API sent something unparseable.
    pub fn grand_total(&self) -> f64 {
        self.price.grand_total_amount()
    }

    /// All segments of all itineraries, in travel order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.itineraries.iter().flat_map(|it| it.segments().iter())
    }
}

/// Parse the leading decimal number of `text`.
///
/// Leading whitespace is skipped and the longest prefix that forms a decimal
/// number (optional sign, digits, fraction, exponent) is used; anything after
/// it is ignored. Text with no numeric prefix gives NaN rather than an error,
/// so a bad amount degrades the numbers built from it instead of failing.
///
/// # Examples
///
/// ```
/// use flight_refine::domain::parse_amount;
///
/// assert_eq!(parse_amount("245.67"), 245.67);
/// assert_eq!(parse_amount("  12"), 12.0);
/// assert_eq!(parse_amount("99.5 USD"), 99.5);
/// assert!(parse_amount("USD 99").is_nan());
/// ```
pub fn parse_amount(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return if bytes[0] == b'-' { -value } else { value };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
