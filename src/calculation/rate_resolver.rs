//! Route rate resolution.
//!
//! This module owns the static route table and resolves a directed
//! departure/arrival pair to its value-per-point rate.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::models::RouteRate;

/// The fixed route table, built once and read-only afterwards.
///
/// Five directed entries; a route missing from this table resolves to
/// [`default_rate`]. The table is scanned linearly with first-match-wins
/// semantics.
static ROUTE_RATES: LazyLock<Vec<RouteRate>> = LazyLock::new(|| {
    vec![
        RouteRate::new("LHR", "LAX", Decimal::new(28, 3)),
        RouteRate::new("LHR", "AMS", Decimal::new(25, 3)),
        RouteRate::new("LHR", "JFK", Decimal::new(30, 3)),
        RouteRate::new("LGW", "LAX", Decimal::new(27, 3)),
        RouteRate::new("LGW", "MUC", Decimal::new(24, 3)),
    ]
});

/// The rate applied when no route table entry matches (0.02).
pub fn default_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// Returns the static route table.
pub fn route_rates() -> &'static [RouteRate] {
    &ROUTE_RATES
}

/// Resolves the value-per-point rate for a directed route.
///
/// Performs an exact, case-sensitive match on both codes; the first matching
/// entry wins. An unmatched route is not an error: it resolves to the
/// default rate of 0.02. There is no reversed-direction lookup, so LHR→LAX
/// and LAX→LHR are independent routes.
///
/// # Example
///
/// ```
/// use price_point_engine::calculation::{default_rate, resolve_rate};
/// use rust_decimal::Decimal;
///
/// assert_eq!(resolve_rate("LHR", "LAX"), Decimal::new(28, 3));
/// assert_eq!(resolve_rate("XXX", "YYY"), default_rate());
/// ```
pub fn resolve_rate(departure: &str, arrival: &str) -> Decimal {
    route_rates()
        .iter()
        .find(|route| route.matches(departure, arrival))
        .map(|route| route.rate)
        .unwrap_or_else(default_rate)
}
