//! Result ordering keys.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0:?}")]
pub struct UnknownSortKey(pub String);

/// How to order the refined result list.
///
/// # Examples
///
/// ```
/// use flight_refine::domain::SortKey;
///
/// let key: SortKey = "duration-asc".parse().unwrap();
/// assert_eq!(key, SortKey::DurationAsc);
/// assert_eq!(key.to_string(), "duration-asc");
///
/// assert!("cheapest".parse::<SortKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Cheapest first
    #[default]
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// By outbound duration text
    DurationAsc,
    /// Earliest outbound departure first
    DepartureAsc,
    /// Latest outbound departure first
    DepartureDesc,
}

impl SortKey {
    /// All keys, in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::DurationAsc,
        SortKey::DepartureAsc,
        SortKey::DepartureDesc,
    ];

    /// The text form of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::DurationAsc => "duration-asc",
            SortKey::DepartureAsc => "departure-asc",
            SortKey::DepartureDesc => "departure-desc",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
