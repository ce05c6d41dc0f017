//! Price Point Engine
//!
//! This crate converts a travel booking price into a fixed schedule of
//! percentage discount tiers, each priced in loyalty currency using a
//! per-route conversion rate, and exposes the calculation over a single
//! HTTP endpoint.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
