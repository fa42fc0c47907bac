//! Filter predicate evaluation.
//!
//! An offer survives filtering only if it passes every rule: stop count,
//! price, airline and departure hour. Filtering never reorders offers.

use std::borrow::Borrow;

use crate::domain::{CarrierCode, FilterState, FlightOffer, TWO_PLUS_STOPS};

/// Stop count of an offer: the most stops on any of its itineraries.
pub fn stop_count(offer: &FlightOffer) -> usize {
    offer
        .itineraries()
        .iter()
        .map(|it| it.stops())
        .max()
        .unwrap_or(0)
}

/// Distinct carrier codes across all segments, in first-seen order.
pub fn offer_airlines(offer: &FlightOffer) -> Vec<CarrierCode> {
    let mut codes: Vec<CarrierCode> = Vec::new();
    for segment in offer.segments() {
        if !codes.contains(&segment.carrier) {
            codes.push(segment.carrier);
        }
    }
    codes
}

/// Check an offer against every filter rule.
///
/// The arrival-time range is not consulted. A grand total that is not a
/// number never falls outside the price range.
pub fn matches_filters(offer: &FlightOffer, filters: &FilterState) -> bool {
    if !filters.stops.is_empty() && !matches_stops(stop_count(offer), filters) {
        return false;
    }

    let price = offer.grand_total();
    let (min_price, max_price) = filters.price_range;
    if price < min_price || price > max_price {
        return false;
    }

    if !filters.airlines.is_empty()
        && !offer
            .segments()
            .any(|segment| filters.airlines.contains(&segment.carrier))
    {
        return false;
    }

    // Only the outbound departure counts; the return leg is not checked
    let hour = offer.first_departure().hour();
    let (earliest, latest) = filters.departure_time_range;
    if hour < earliest || hour > latest {
        return false;
    }

    true
}

/// A selected `2` accepts any offer with two or more stops.
fn matches_stops(stops: usize, filters: &FilterState) -> bool {
    let exact = u8::try_from(stops).is_ok_and(|s| filters.stops.contains(&s));
    exact || (stops >= usize::from(TWO_PLUS_STOPS) && filters.stops.contains(&TWO_PLUS_STOPS))
}

/// Keep the offers that pass `filters`, preserving their relative order.
pub fn filter_flights<O>(flights: &[O], filters: &FilterState) -> Vec<O>
where
    O: Borrow<FlightOffer> + Clone,
{
    flights
        .iter()
        .filter(|offer| matches_filters(Borrow::<FlightOffer>::borrow(*offer), filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{OfferBuilder, carrier, ids, priced};
    use std::collections::BTreeSet;

    fn open_filters() -> FilterState {
        FilterState::unrestricted((0.0, 10_000.0))
    }

    #[test]
    fn stop_count_is_max_over_itineraries() {
        let offer = OfferBuilder::new("1").stops(0).returning(2, &["BA"]).build();
        assert_eq!(stop_count(&offer), 2);

        let offer = OfferBuilder::new("2").stops(1).returning(0, &["BA"]).build();
        assert_eq!(stop_count(&offer), 1);
    }

    #[test]
    fn airlines_are_distinct_in_first_seen_order() {
        let offer = OfferBuilder::new("1")
            .stops(2)
            .carriers(&["AA", "BA", "AA"])
            .returning(0, &["IB"])
            .build();

        assert_eq!(
            offer_airlines(&offer),
            vec![carrier("AA"), carrier("BA"), carrier("IB")]
        );
    }

    #[test]
    fn nonstop_only() {
        let flights = vec![
            OfferBuilder::new("zero").stops(0).build(),
            OfferBuilder::new("one").stops(1).build(),
            OfferBuilder::new("two").stops(2).build(),
        ];
        let mut filters = open_filters();
        filters.stops = BTreeSet::from([0]);

        assert_eq!(ids(&filter_flights(&flights, &filters)), vec!["zero"]);
    }

    #[test]
    fn two_means_two_or_more() {
        let flights = vec![
            OfferBuilder::new("one").stops(1).build(),
            OfferBuilder::new("two").stops(2).build(),
            OfferBuilder::new("three").stops(3).build(),
        ];
        let mut filters = open_filters();
        filters.stops = BTreeSet::from([2]);

        assert_eq!(ids(&filter_flights(&flights, &filters)), vec!["two", "three"]);
    }

    #[test]
    fn empty_stop_selection_is_permissive() {
        let flights = vec![
            OfferBuilder::new("zero").stops(0).build(),
            OfferBuilder::new("four").stops(4).build(),
        ];
        assert_eq!(filter_flights(&flights, &open_filters()).len(), 2);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let flights = vec![
            priced("low", "99.99"),
            priced("min", "100.00"),
            priced("max", "200.00"),
            priced("high", "200.01"),
        ];
        let mut filters = open_filters();
        filters.price_range = (100.0, 200.0);

        assert_eq!(ids(&filter_flights(&flights, &filters)), vec!["min", "max"]);
    }

    #[test]
    fn unparseable_price_is_not_excluded() {
        let flights = vec![priced("bad", "n/a")];
        let mut filters = open_filters();
        filters.price_range = (100.0, 200.0);

        assert_eq!(filter_flights(&flights, &filters).len(), 1);
    }

    #[test]
    fn any_matching_airline_passes() {
        let flights = vec![
            OfferBuilder::new("ba").carriers(&["BA"]).build(),
            OfferBuilder::new("aa-ba").stops(1).carriers(&["AA", "BA"]).build(),
            OfferBuilder::new("lh").carriers(&["LH"]).build(),
            OfferBuilder::new("return-ba").carriers(&["IB"]).returning(0, &["BA"]).build(),
        ];
        let mut filters = open_filters();
        filters.airlines = BTreeSet::from([carrier("BA")]);

        assert_eq!(
            ids(&filter_flights(&flights, &filters)),
            vec!["ba", "aa-ba", "return-ba"]
        );
    }

    #[test]
    fn departure_hour_bounds_are_inclusive() {
        let flights = vec![
            OfferBuilder::new("05").departs("2024-03-15T05:59:00").build(),
            OfferBuilder::new("06").departs("2024-03-15T06:00:00").build(),
            OfferBuilder::new("12").departs("2024-03-15T12:59:00").build(),
            OfferBuilder::new("13").departs("2024-03-15T13:00:00").build(),
        ];
        let mut filters = open_filters();
        filters.departure_time_range = (6, 12);

        assert_eq!(ids(&filter_flights(&flights, &filters)), vec!["06", "12"]);
    }

    #[test]
    fn midnight_departure_passes_lower_bound_zero() {
        let flights = vec![OfferBuilder::new("midnight").departs("2024-03-16T00:00:00").build()];
        let mut filters = open_filters();
        filters.departure_time_range = (0, 6);

        assert_eq!(filter_flights(&flights, &filters).len(), 1);
    }

    #[test]
    fn return_departure_is_not_checked() {
        // Outbound 10:00 passes; the 18:00 return is outside the range but ignored
        let flights = vec![OfferBuilder::new("rt").returning(0, &["BA"]).build()];
        let mut filters = open_filters();
        filters.departure_time_range = (8, 11);

        assert_eq!(filter_flights(&flights, &filters).len(), 1);
    }

    #[test]
    fn arrival_range_is_not_applied() {
        let flights = vec![priced("1", "100.00")];
        let mut filters = open_filters();
        filters.arrival_time_range = (23, 23);

        assert_eq!(filter_flights(&flights, &filters).len(), 1);
    }

    #[test]
    fn all_rules_must_pass() {
        let flights = vec![
            OfferBuilder::new("ok").price("150").carriers(&["BA"]).build(),
            OfferBuilder::new("wrong-airline").price("150").carriers(&["AA"]).build(),
            OfferBuilder::new("too-dear").price("950").carriers(&["BA"]).build(),
        ];
        let mut filters = open_filters();
        filters.price_range = (0.0, 500.0);
        filters.airlines = BTreeSet::from([carrier("BA")]);

        assert_eq!(ids(&filter_flights(&flights, &filters)), vec!["ok"]);
    }

    #[test]
    fn works_on_shared_offers() {
        use std::sync::Arc;

        let flights: Vec<Arc<FlightOffer>> = vec![
            Arc::new(priced("a", "50")),
            Arc::new(priced("b", "500")),
        ];
        let mut filters = open_filters();
        filters.price_range = (0.0, 100.0);

        let filtered = filter_flights(&flights, &filters);
        assert_eq!(filtered.len(), 1);
        assert!(Arc::ptr_eq(&filtered[0], &flights[0]));
    }
}
