//! Price-distribution histogram.
//!
//! Buckets span `[floor(min), ceil(max)]` of grand totals in equal integer
//! widths. Each bucket is half-open except the last, which also takes
//! prices equal to its upper edge, so every numeric price lands in exactly
//! one bucket.

use std::borrow::Borrow;

use crate::domain::{FlightOffer, PriceDataPoint};

use super::aggregate::grand_totals;

/// Bucket `flights` by grand total into `bucket_count` equal-width buckets.
///
/// An empty list yields no buckets. A list where every price is equal
/// yields `bucket_count` buckets of width 1, only the first non-empty.
/// Unparseable prices belong to no bucket.
///
/// # Examples
///
/// ```
/// # use flight_refine::domain::FlightOffer;
/// use flight_refine::refine::price_distribution;
///
/// let none: Vec<FlightOffer> = vec![];
/// assert!(price_distribution(&none, 8).is_empty());
/// ```
pub fn price_distribution<O: Borrow<FlightOffer>>(
    flights: &[O],
    bucket_count: usize,
) -> Vec<PriceDataPoint> {
    if flights.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let prices = grand_totals(flights);
    let (low, high) = span(&prices);
    let width = bucket_width(low, high, bucket_count);

    (0..bucket_count)
        .map(|i| {
            let start = low + i as f64 * width;
            let end = start + width;
            let last = i + 1 == bucket_count;
            let count = prices
                .iter()
                .filter(|&&p| p >= start && (p < end || (last && p == end)))
                .count();
            PriceDataPoint {
                price: start + width / 2.0,
                count,
                range: format!("${} - ${}", number_text(start), number_text(end)),
            }
        })
        .collect()
}

/// `(floor(min), ceil(max))`, NaN if any price is NaN.
fn span(prices: &[f64]) -> (f64, f64) {
    if prices.iter().any(|p| p.is_nan()) {
        return (f64::NAN, f64::NAN);
    }
    let low = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let high = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (low.floor(), high.ceil())
}

/// `ceil((high - low) / n)`, or 1 when that is zero or not a number.
fn bucket_width(low: f64, high: f64, n: usize) -> f64 {
    let width = ((high - low) / n as f64).ceil();
    if width == 0.0 || width.is_nan() { 1.0 } else { width }
}

/// Shortest text for a number: integers without a fraction part.
fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}
