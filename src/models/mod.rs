//! Core data models for the Price Point Engine.
//!
//! This module contains the domain models used throughout the engine.

mod price_point;
mod route_rate;

pub use price_point::PricePoint;
pub use route_rate::RouteRate;
