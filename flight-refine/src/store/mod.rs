//! Search state and the derived values computed from it.
//!
//! [`SearchStore`] holds the four inputs of the refinement pipeline: the
//! raw offers, the carrier dictionary, the filter state and the sort key.
//! Everything else (price bounds, airline list, filtered and sorted offers,
//! price statistics and histogram) is derived on read and memoized against
//! the versions of the inputs it depends on:
//!
//! ```text
//! offers ──┬──────────────▶ price_bounds
//!          ├─ carriers ───▶ available_airlines
//!          └─ filters, sort ▶ filtered_flights ─┬▶ price_stats
//!                                               └▶ price_distribution
//! ```
//!
//! Mutations take `&mut self`, so no read can interleave with a partially
//! applied update, and every read after a mutation sees values computed from
//! the new inputs.

mod memo;


use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    Airline, CarrierCode, CarrierDictionary, FilterState, FilterUpdate, FlightOffer,
    PriceDataPoint, PriceStats, SearchResults, SortKey,
};
use crate::refine::{self, RefineConfig};

use memo::Memo;

/// Shared, immutable list of offers.
pub type Offers = Arc<Vec<Arc<FlightOffer>>>;

/// Version counters for the store inputs.
#[derive(Debug, Clone, Copy, Default)]
struct Versions {
    offers: u64,
    carriers: u64,
    filters: u64,
    sort: u64,
}

/// Every derived value, read from one state of the store.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub flights: Offers,
    pub price_bounds: (f64, f64),
    pub available_airlines: Arc<Vec<Airline>>,
    pub price_stats: PriceStats,
    pub price_distribution: Arc<Vec<PriceDataPoint>>,
    pub filters: FilterState,
    pub sort_key: Option<SortKey>,
    pub has_active_filters: bool,
}

/// Application state for one search session.
pub struct SearchStore {
    config: RefineConfig,

    offers: Offers,
    carriers: CarrierDictionary,
    filters: FilterState,
    sort_key: Option<SortKey>,
    versions: Versions,

    bounds: Memo<u64, (f64, f64)>,
    airlines: Memo<(u64, u64), Vec<Airline>>,
    filtered: Memo<(u64, u64, u64), Vec<Arc<FlightOffer>>>,
    stats: Memo<(u64, u64, u64), PriceStats>,
    distribution: Memo<(u64, u64, u64), Vec<PriceDataPoint>>,
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new(RefineConfig::default())
    }
}

impl SearchStore {
    /// An empty store: no offers, no carrier names, the initial price range
    /// from `config`, and offers sorted by ascending price.
    pub fn new(config: RefineConfig) -> Self {
        let filters = FilterState::unrestricted(config.initial_price_range);
        Self {
            config,
            offers: Arc::new(Vec::new()),
            carriers: CarrierDictionary::new(),
            filters,
            sort_key: Some(SortKey::default()),
            versions: Versions::default(),
            bounds: Memo::new("price_bounds"),
            airlines: Memo::new("available_airlines"),
            filtered: Memo::new("filtered_flights"),
            stats: Memo::new("price_stats"),
            distribution: Memo::new("price_distribution"),
        }
    }

    pub fn config(&self) -> &RefineConfig {
        &self.config
    }

    /// The unfiltered offers of the current search.
    pub fn offers(&self) -> &Offers {
        &self.offers
    }

    pub fn carriers(&self) -> &CarrierDictionary {
        &self.carriers
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    // Input mutations

    /// Install the results of a completed search.
    ///
    /// The carrier dictionary is replaced only if the response carried one.
    /// Filters are reset to span the new offers unless there are none, in
    /// which case the previous filters stay.
    pub fn load_results(&mut self, results: SearchResults) {
        let SearchResults { offers, carriers } = results;
        debug!(
            offers = offers.len(),
            carriers = carriers.as_ref().map(CarrierDictionary::len),
            "loading search results"
        );

        self.offers = Arc::new(offers.into_iter().map(Arc::new).collect());
        self.versions.offers += 1;

        if let Some(carriers) = carriers {
            self.carriers = carriers;
            self.versions.carriers += 1;
        }

        if !self.offers.is_empty() {
            let defaults = refine::default_filters(self.offers.as_slice(), &self.config);
            self.replace_filters(defaults);
        }
    }

    /// Drop all offers, as after a failed search. Filters and carrier names
    /// are kept.
    pub fn clear_results(&mut self) {
        debug!("clearing search results");
        self.offers = Arc::new(Vec::new());
        self.versions.offers += 1;
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.replace_filters(filters);
    }

    /// Merge a partial filter change.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        let mut filters = self.filters.clone();
        filters.apply(update);
        self.replace_filters(filters);
    }

    pub fn toggle_stop(&mut self, stops: u8) {
        let mut filters = self.filters.clone();
        filters.toggle_stop(stops);
        self.replace_filters(filters);
    }

    pub fn toggle_airline(&mut self, code: CarrierCode) {
        let mut filters = self.filters.clone();
        filters.toggle_airline(code);
        self.replace_filters(filters);
    }

    pub fn set_price_range(&mut self, range: (f64, f64)) {
        self.update_filters(FilterUpdate {
            price_range: Some(range),
            ..FilterUpdate::default()
        });
    }

    pub fn set_departure_time_range(&mut self, range: (u32, u32)) {
        self.update_filters(FilterUpdate {
            departure_time_range: Some(range),
            ..FilterUpdate::default()
        });
    }

    /// Store an arrival-hour range. It is kept with the filters but does
    /// not affect which offers match.
    pub fn set_arrival_time_range(&mut self, range: (u32, u32)) {
        self.update_filters(FilterUpdate {
            arrival_time_range: Some(range),
            ..FilterUpdate::default()
        });
    }

    /// Reset filters to the defaults for the current unfiltered offers.
    pub fn reset_filters(&mut self) {
        let defaults = refine::default_filters(self.offers.as_slice(), &self.config);
        self.replace_filters(defaults);
    }

    /// Set the sort order; `None` leaves filtered offers in result order.
    pub fn set_sort_key(&mut self, key: Option<SortKey>) {
        if key != self.sort_key {
            self.sort_key = key;
            self.versions.sort += 1;
        }
    }

    /// Set the sort order from its text form, e.g. `"duration-asc"`.
    ///
    /// Unrecognised text clears the sort order.
    pub fn set_sort_key_text(&mut self, text: &str) {
        let key = match text.parse::<SortKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(error = %e, "unrecognised sort key, keeping result order");
                None
            }
        };
        self.set_sort_key(key);
    }

    fn replace_filters(&mut self, filters: FilterState) {
        if filters != self.filters {
            self.filters = filters;
            self.versions.filters += 1;
        }
    }

    // Derived values

    /// `[floor(min), ceil(max)]` of the unfiltered offers' grand totals.
    pub fn price_bounds(&self) -> (f64, f64) {
        *self.bounds.get(self.versions.offers, || {
            refine::price_bounds(self.offers.as_slice(), &self.config)
        })
    }

    /// Carriers across the unfiltered offers, sorted by display name.
    pub fn available_airlines(&self) -> Arc<Vec<Airline>> {
        let stamp = (self.versions.offers, self.versions.carriers);
        self.airlines.get(stamp, || {
            refine::available_airlines(self.offers.as_slice(), &self.carriers)
        })
    }

    /// Offers passing the filters, in sort order.
    pub fn filtered_flights(&self) -> Offers {
        self.filtered.get(self.filtered_stamp(), || {
            let kept = refine::filter_flights(self.offers.as_slice(), &self.filters);
            refine::sort_flights(&kept, self.sort_key)
        })
    }

    /// Statistics over the filtered offers.
    pub fn price_stats(&self) -> PriceStats {
        *self.stats.get(self.filtered_stamp(), || {
            refine::price_stats(self.filtered_flights().as_slice())
        })
    }

    /// Histogram of the filtered offers' grand totals.
    pub fn price_distribution(&self) -> Arc<Vec<PriceDataPoint>> {
        self.distribution.get(self.filtered_stamp(), || {
            let flights = self.filtered_flights();
            refine::price_distribution(flights.as_slice(), self.config.bucket_count)
        })
    }

    /// Whether the filters narrow the current offers at all.
    pub fn has_active_filters(&self) -> bool {
        refine::has_active_filters(&self.filters, self.price_bounds())
    }

    /// Read every derived value at once.
    pub fn view(&self) -> SearchView {
        SearchView {
            flights: self.filtered_flights(),
            price_bounds: self.price_bounds(),
            available_airlines: self.available_airlines(),
            price_stats: self.price_stats(),
            price_distribution: self.price_distribution(),
            filters: self.filters.clone(),
            sort_key: self.sort_key,
            has_active_filters: self.has_active_filters(),
        }
    }

    fn filtered_stamp(&self) -> (u64, u64, u64) {
        (
            self.versions.offers,
            self.versions.filters,
            self.versions.sort,
        )
    }
}
