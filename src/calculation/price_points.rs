//! Price point calculation.
//!
//! This module owns the per-tier numeric policy: each discount tier of the
//! fixed schedule is applied to the booking price, rounded to a cash amount,
//! and converted to a points cost via the route's rate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::PricePoint;

use super::rate_resolver::resolve_rate;

/// The fixed discount tier schedule, in output order.
pub const DISCOUNT_TIERS: [u32; 4] = [20, 50, 70, 100];

/// Calculates the price points for a booking.
///
/// Returns one [`PricePoint`] per tier of [`DISCOUNT_TIERS`], in schedule
/// order. For each tier percentage `p`:
///
/// 1. `cash_discount = price * p / 100`, rounded to 2 decimal places with
///    half-away-from-zero (conventional currency rounding).
/// 2. `points_required = ceil(cash_discount / rate)`, where `rate` comes
///    from the rate resolver for the directed route. Ceiling, not rounding:
///    callers are never charged fewer points than the discount requires.
///
/// This is a pure function of its inputs: no validation, no side effects,
/// no hidden state. A zero price yields zero points for every tier. The
/// boundary is responsible for rejecting non-numeric input; see
/// [`crate::api`]. Arithmetic never panics: a negative cash discount costs
/// zero points, and a points cost beyond `u64` saturates at `u64::MAX`.
///
/// # Example
///
/// ```
/// use price_point_engine::calculation::calculate_price_points;
/// use rust_decimal::Decimal;
///
/// let points = calculate_price_points("LHR", "LAX", Decimal::from(1000));
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[0].points_required, 7143);
/// ```
pub fn calculate_price_points(departure: &str, arrival: &str, price: Decimal) -> Vec<PricePoint> {
    let rate = resolve_rate(departure, arrival);

    DISCOUNT_TIERS
        .iter()
        .map(|&percent| {
            // The multiplier is percent/100 as a scaled decimal, at most 1,
            // so the product never exceeds the price in magnitude.
            let cash_discount = (price * Decimal::new(percent as i64, 2))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

            // Ceiling division. A cash discount at or below zero costs zero
            // points; a quotient past what Decimal or u64 can hold saturates.
            let points_required = match cash_discount.checked_div(rate) {
                Some(points) if points.is_sign_negative() => 0,
                Some(points) => points.ceil().to_u64().unwrap_or(u64::MAX),
                None => u64::MAX,
            };

            PricePoint {
                discount_percent: percent,
                cash_discount,
                points_required,
            }
        })
        .collect()
}
