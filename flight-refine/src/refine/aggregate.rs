//! Aggregates over a list of offers.
//!
//! These are pure functions of their inputs and are recomputed on demand
//! rather than kept as stateful objects.

use std::borrow::Borrow;
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use crate::domain::{
    Airline, CarrierCode, CarrierDictionary, FULL_DAY, FilterState, FlightOffer, PriceStats,
};

use super::RefineConfig;

/// Minimum of prices, or NaN if any price is NaN.
fn min_price(prices: &[f64]) -> f64 {
    prices.iter().copied().fold(f64::INFINITY, |acc, p| {
        if acc.is_nan() || p.is_nan() { f64::NAN } else { acc.min(p) }
    })
}

/// Maximum of prices, or NaN if any price is NaN.
fn max_price(prices: &[f64]) -> f64 {
    prices.iter().copied().fold(f64::NEG_INFINITY, |acc, p| {
        if acc.is_nan() || p.is_nan() { f64::NAN } else { acc.max(p) }
    })
}

pub(crate) fn grand_totals<O: Borrow<FlightOffer>>(flights: &[O]) -> Vec<f64> {
    flights
        .iter()
        .map(|offer| Borrow::<FlightOffer>::borrow(offer).grand_total())
        .collect()
}

/// `[floor(min), ceil(max)]` of grand totals, for the price slider.
///
/// An empty list gives `config.empty_price_bounds`.
pub fn price_bounds<O: Borrow<FlightOffer>>(flights: &[O], config: &RefineConfig) -> (f64, f64) {
    if flights.is_empty() {
        return config.empty_price_bounds;
    }
    let prices = grand_totals(flights);
    (min_price(&prices).floor(), max_price(&prices).ceil())
}

/// Min, max, mean and count of grand totals.
///
/// An empty list gives all zeros. Currencies are not reconciled.
pub fn price_stats<O: Borrow<FlightOffer>>(flights: &[O]) -> PriceStats {
    if flights.is_empty() {
        return PriceStats::default();
    }
    let prices = grand_totals(flights);
    let sum: f64 = prices.iter().sum();
    PriceStats {
        min: min_price(&prices),
        max: max_price(&prices),
        avg: sum / prices.len() as f64,
        count: prices.len(),
    }
}

/// Every carrier appearing in `flights`, with display names, sorted by name.
///
/// Pass the unfiltered result set so airlines the user has filtered out
/// can still be offered for re-selection. Names missing from `carriers`
/// fall back to the code.
pub fn available_airlines<O: Borrow<FlightOffer>>(
    flights: &[O],
    carriers: &CarrierDictionary,
) -> Vec<Airline> {
    let mut codes: Vec<CarrierCode> = Vec::new();
    for offer in flights {
        for segment in Borrow::<FlightOffer>::borrow(offer).segments() {
            if !codes.contains(&segment.carrier) {
                codes.push(segment.carrier);
            }
        }
    }

    let mut airlines: Vec<Airline> = codes
        .into_iter()
        .map(|code| Airline {
            name: carriers.name_for(&code).to_string(),
            code,
        })
        .collect();

    let collator = name_collator();
    airlines.sort_by(|a, b| compare_names(collator.as_ref(), &a.name, &b.name));
    airlines
}

/// Collator for display names: root locale, default (tertiary) strength.
///
/// Accents and case are secondary to the base letters, so "Ægean" sorts
/// with the A's and "delta" sorts just before "Delta".
fn name_collator() -> Option<Collator> {
    Collator::try_new(&Default::default(), CollatorOptions::new())
        .inspect_err(|e| warn!(error = %e, "no collation data, sorting names by code point"))
        .ok()
}

fn compare_names(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Filters for a freshly received result set: nothing selected, the price
/// range spanning the set, full-day hour ranges.
pub fn default_filters<O: Borrow<FlightOffer>>(
    flights: &[O],
    config: &RefineConfig,
) -> FilterState {
    FilterState::unrestricted(price_bounds(flights, config))
}

/// Whether `filters` narrow the results at all.
///
/// `bounds` are the price bounds of the unfiltered result set. The arrival
/// range is not considered, since it is never applied.
pub fn has_active_filters(filters: &FilterState, bounds: (f64, f64)) -> bool {
    !filters.stops.is_empty()
        || !filters.airlines.is_empty()
        || filters.departure_time_range.0 > FULL_DAY.0
        || filters.departure_time_range.1 < FULL_DAY.1
        || filters.price_range.0 > bounds.0
        || filters.price_range.1 < bounds.1
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::fixtures::priced;
    use proptest::prelude::*;

    fn offers() -> impl Strategy<Value = Vec<FlightOffer>> {
        prop::collection::vec(0u32..500_000, 0..30).prop_map(|cents| {
            cents
                .into_iter()
                .enumerate()
                .map(|(i, c)| priced(&i.to_string(), &format!("{}.{:02}", c / 100, c % 100)))
                .collect()
        })
    }

    proptest! {
        /// Default filters span exactly the price bounds of the results
        #[test]
        fn default_filter_price_bounds(flights in offers()) {
            let config = RefineConfig::default();
            prop_assert_eq!(
                default_filters(&flights, &config).price_range,
                price_bounds(&flights, &config)
            );
        }

        /// Every grand total lies within the bounds
        #[test]
        fn bounds_contain_all_prices(flights in offers()) {
            let (lo, hi) = price_bounds(&flights, &RefineConfig::default());
            for offer in &flights {
                prop_assert!(lo <= offer.grand_total() && offer.grand_total() <= hi);
            }
        }

        /// The mean lies between min and max
        #[test]
        fn average_between_extremes(flights in offers()) {
            let stats = price_stats(&flights);
            prop_assert_eq!(stats.count, flights.len());
            if !flights.is_empty() {
                prop_assert!(stats.min <= stats.avg + 1e-9 && stats.avg <= stats.max + 1e-9);
            }
        }

        /// Defaults never count as active
        #[test]
        fn defaults_are_inactive(flights in offers()) {
            let config = RefineConfig::default();
            let bounds = price_bounds(&flights, &config);
            prop_assert!(!has_active_filters(&default_filters(&flights, &config), bounds));
        }
    }
}
