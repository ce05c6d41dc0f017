//! Route rate model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The loyalty-currency conversion rate for one directed route.
///
/// `rate` is the monetary value of a single point on this route: how many
/// units of the booking currency one point is worth. Routes are directed,
/// so LHR→LAX and LAX→LHR are distinct entries. Instances are created once
/// at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRate {
    /// Departure airport code (3 letters, matched case-sensitively).
    pub departure: String,
    /// Arrival airport code (3 letters, matched case-sensitively).
    pub arrival: String,
    /// Monetary units of price consumed per one point. Always positive.
    pub rate: Decimal,
}

impl RouteRate {
    /// Creates a new route rate entry.
    pub fn new(departure: impl Into<String>, arrival: impl Into<String>, rate: Decimal) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
            rate,
        }
    }

    /// Returns true when this entry matches the given directed route exactly.
    ///
    /// Matching is exact string equality on both codes. No normalization,
    /// no partial matches, no reversed-direction lookup.
    pub fn matches(&self, departure: &str, arrival: &str) -> bool {
        self.departure == departure && self.arrival == arrival
    }
}
