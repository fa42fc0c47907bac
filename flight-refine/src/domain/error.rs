//! Domain error types.
//!
//! These errors represent structural problems with offer data. They are
//! distinct from the I/O and decoding errors of the API boundary.

/// Domain-level errors for offer construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Offer has no itineraries
    #[error("offer must have at least one itinerary")]
    NoItineraries,

    /// Itinerary has no segments
    #[error("itinerary must have at least one segment")]
    EmptyItinerary,
}
