//! Result ordering.
//!
//! Sorting returns a new list and leaves the input alone. The sort is
//! stable: offers that compare equal keep their filtered order.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::domain::{FlightOffer, SortKey};

/// Order offers by `key`; `None` keeps the input order.
///
/// Prices compare numerically, with unparseable totals after every number
/// when ascending and before them when descending. Durations compare by
/// their raw ISO-8601 text, so "PT10H" sorts before "PT2H5M". Departures
/// compare by raw timestamp text.
pub fn sort_flights<O>(flights: &[O], key: Option<SortKey>) -> Vec<O>
where
    O: Borrow<FlightOffer> + Clone,
{
    let mut sorted = flights.to_vec();
    if let Some(key) = key {
        sorted.sort_by(|a, b| {
            compare(
                key,
                Borrow::<FlightOffer>::borrow(a),
                Borrow::<FlightOffer>::borrow(b),
            )
        });
    }
    sorted
}

/// Comparator for a single sort key.
pub fn compare(key: SortKey, a: &FlightOffer, b: &FlightOffer) -> Ordering {
    match key {
        SortKey::PriceAsc => a.grand_total().total_cmp(&b.grand_total()),
        SortKey::PriceDesc => b.grand_total().total_cmp(&a.grand_total()),
        SortKey::DurationAsc => outbound_duration(a).cmp(outbound_duration(b)),
        SortKey::DepartureAsc => departure_text(a).cmp(departure_text(b)),
        SortKey::DepartureDesc => departure_text(b).cmp(departure_text(a)),
    }
}

fn outbound_duration(offer: &FlightOffer) -> &str {
    offer.outbound().duration().as_str()
}

fn departure_text(offer: &FlightOffer) -> &str {
    offer.first_departure().as_str()
}
