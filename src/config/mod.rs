//! Process configuration for the Price Point Engine.
//!
//! Configuration is read once at startup from environment-style key/value
//! input and held immutable for the life of the process.
//!
//! # Example
//!
//! ```
//! use price_point_engine::config::Settings;
//!
//! let settings = Settings::from_env();
//! println!("listening on port {}", settings.port);
//! ```

mod settings;

pub use settings::Settings;
