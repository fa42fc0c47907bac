//! Offer builders shared by unit tests.

use std::borrow::Borrow;

use crate::domain::{
    CarrierCode, Endpoint, FlightOffer, IsoDuration, Itinerary, LocalTimestamp, Price, Segment,
};

pub fn ts(s: &str) -> LocalTimestamp {
    LocalTimestamp::parse(s).unwrap()
}

pub fn carrier(s: &str) -> CarrierCode {
    CarrierCode::parse(s).unwrap()
}

#[derive(Clone)]
struct LegShape {
    segments: usize,
    carriers: Vec<String>,
    departs: String,
    duration: String,
}

impl LegShape {
    fn build(&self) -> Itinerary {
        let segments = (0..self.segments)
            .map(|i| {
                let code = &self.carriers[i % self.carriers.len()];
                Segment::new(
                    Endpoint::new(format!("A{i:02}"), ts(&self.departs)),
                    Endpoint::new(format!("A{:02}", i + 1), ts(&self.departs)),
                    carrier(code),
                    IsoDuration::new("PT1H"),
                )
            })
            .collect();
        Itinerary::new(IsoDuration::new(self.duration.clone()), segments).unwrap()
    }
}

/// Builds a `FlightOffer` with sensible defaults: one nonstop BA
/// itinerary departing 2024-03-15 10:00, duration PT2H, priced 100.00 USD.
#[derive(Clone)]
pub struct OfferBuilder {
    id: String,
    currency: String,
    grand_total: String,
    outbound: LegShape,
    inbound: Option<LegShape>,
}

impl OfferBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            currency: "USD".to_string(),
            grand_total: "100.00".to_string(),
            outbound: LegShape {
                segments: 1,
                carriers: vec!["BA".to_string()],
                departs: "2024-03-15T10:00:00".to_string(),
                duration: "PT2H".to_string(),
            },
            inbound: None,
        }
    }

    pub fn price(mut self, grand_total: &str) -> Self {
        self.grand_total = grand_total.to_string();
        self
    }

    /// Outbound stop count.
    pub fn stops(mut self, stops: usize) -> Self {
        self.outbound.segments = stops + 1;
        self
    }

    /// Outbound carriers, assigned to segments in turn.
    pub fn carriers(mut self, codes: &[&str]) -> Self {
        self.outbound.carriers = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn departs(mut self, at: &str) -> Self {
        self.outbound.departs = at.to_string();
        self
    }

    pub fn duration(mut self, duration: &str) -> Self {
        self.outbound.duration = duration.to_string();
        self
    }

    /// Add a return itinerary.
    pub fn returning(mut self, stops: usize, codes: &[&str]) -> Self {
        self.inbound = Some(LegShape {
            segments: stops + 1,
            carriers: codes.iter().map(|c| c.to_string()).collect(),
            departs: "2024-03-22T18:00:00".to_string(),
            duration: "PT2H".to_string(),
        });
        self
    }

    pub fn build(self) -> FlightOffer {
        let mut itineraries = vec![self.outbound.build()];
        if let Some(inbound) = &self.inbound {
            itineraries.push(inbound.build());
        }
        FlightOffer::new(
            self.id,
            itineraries,
            Price::flat(self.currency, self.grand_total),
        )
        .unwrap()
    }
}

/// A nonstop offer with the given id and grand total.
pub fn priced(id: &str, grand_total: &str) -> FlightOffer {
    OfferBuilder::new(id).price(grand_total).build()
}

/// Ids of offers, in order.
pub fn ids<O: Borrow<FlightOffer>>(offers: &[O]) -> Vec<String> {
    offers
        .iter()
        .map(|o| Borrow::<FlightOffer>::borrow(o).id.clone())
        .collect()
}
