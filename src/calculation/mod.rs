//! Calculation logic for the Price Point Engine.
//!
//! This module contains the rate resolver, which maps a directed route to
//! its loyalty-currency conversion rate, and the price point calculator,
//! which turns a booking price into the fixed schedule of discount tiers
//! priced in points.

mod price_points;
mod rate_resolver;

pub use price_points::{DISCOUNT_TIERS, calculate_price_points};
pub use rate_resolver::{default_rate, resolve_rate, route_rates};
