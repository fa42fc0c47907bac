//! User-chosen refinement settings.

use std::collections::BTreeSet;

use super::CarrierCode;

/// Stop count meaning "two or more stops" in a stop selection.
pub const TWO_PLUS_STOPS: u8 = 2;

/// Inclusive hour-of-day bounds covering the whole day.
pub const FULL_DAY: (u32, u32) = (0, 24);

/// Filters the user applies to a result set.
///
/// All ranges are inclusive at both ends. An empty stop or airline
/// selection means "no restriction", never "exclude everything".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Acceptable stop counts. `2` stands for "2 or more".
    pub stops: BTreeSet<u8>,
    /// Inclusive grand-total bounds.
    pub price_range: (f64, f64),
    /// Acceptable carriers; any segment flown by one of them is enough.
    pub airlines: BTreeSet<CarrierCode>,
    /// Inclusive bounds on the local departure hour of the first segment.
    pub departure_time_range: (u32, u32),
    /// Inclusive bounds on the arrival hour. Stored but not applied.
    pub arrival_time_range: (u32, u32),
}

impl FilterState {
    /// Filters with no restriction other than the given price range.
    pub fn unrestricted(price_range: (f64, f64)) -> Self {
        Self {
            stops: BTreeSet::new(),
            price_range,
            airlines: BTreeSet::new(),
            departure_time_range: FULL_DAY,
            arrival_time_range: FULL_DAY,
        }
    }

    /// Add the stop count if absent, remove it if present.
    pub fn toggle_stop(&mut self, stops: u8) {
        if !self.stops.remove(&stops) {
            self.stops.insert(stops);
        }
    }

    /// Add the carrier if absent, remove it if present.
    pub fn toggle_airline(&mut self, code: CarrierCode) {
        if !self.airlines.remove(&code) {
            self.airlines.insert(code);
        }
    }

    /// Merge a partial update into these filters.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(stops) = update.stops {
            self.stops = stops;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(airlines) = update.airlines {
            self.airlines = airlines;
        }
        if let Some(range) = update.departure_time_range {
            self.departure_time_range = range;
        }
        if let Some(range) = update.arrival_time_range {
            self.arrival_time_range = range;
        }
    }
}

/// A partial change to a [`FilterState`]; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub stops: Option<BTreeSet<u8>>,
    pub price_range: Option<(f64, f64)>,
    pub airlines: Option<BTreeSet<CarrierCode>>,
    pub departure_time_range: Option<(u32, u32)>,
    pub arrival_time_range: Option<(u32, u32)>,
}
