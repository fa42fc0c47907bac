//! Flight search result refinement.
//!
//! Takes the offers returned by a flight search and turns them into what a
//! results page shows: the offers passing the user's filters in the chosen
//! order, price statistics, a price histogram and the list of airlines to
//! filter by. Everything derived is recomputed only when its inputs change.

pub mod amadeus;
pub mod domain;
pub mod format;
pub mod refine;
pub mod store;

#[cfg(test)]
mod fixtures;
