//! Configuration for result refinement.

/// Configuration parameters for the refinement pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RefineConfig {
    /// Number of buckets in the price histogram.
    pub bucket_count: usize,

    /// Price bounds reported for an empty result set.
    pub empty_price_bounds: (f64, f64),

    /// Price filter in force before the first search completes.
    pub initial_price_range: (f64, f64),
}

impl RefineConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        bucket_count: usize,
        empty_price_bounds: (f64, f64),
        initial_price_range: (f64, f64),
    ) -> Self {
        Self {
            bucket_count,
            empty_price_bounds,
            initial_price_range,
        }
    }

    /// Returns a copy with a different histogram bucket count.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            bucket_count: 8,
            empty_price_bounds: (0.0, 1000.0),
            initial_price_range: (0.0, 10_000.0),
        }
    }
}
