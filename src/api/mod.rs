//! HTTP API module for the Price Point Engine.
//!
//! This module provides the REST endpoint for converting a booking price
//! into loyalty-point discount tiers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PricePointRequest;
pub use response::{ApiError, PricePointsResponse};
pub use state::AppState;
