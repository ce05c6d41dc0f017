//! Application state for the Price Point Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::Settings;

/// Shared application state.
///
/// Contains the immutable process settings. The route table itself is a
/// process-wide static, so no further shared state is needed; handlers can
/// run concurrently without coordination.
#[derive(Clone)]
pub struct AppState {
    /// The process settings loaded at startup.
    settings: Arc<Settings>,
}

impl AppState {
    /// Creates a new application state with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns a reference to the process settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
