//! Application state for the shift rotation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::ConfigLoader;
use crate::rotation::{Clock, Rotation, SystemClock, plant_date};
use crate::validation::ConstraintValidator;

/// Shared application state.
///
/// Holds the validator (which owns the rotation) and the clock. The clock
/// is the only source of "now" in the process.
#[derive(Clone)]
pub struct AppState {
    validator: Arc<ConstraintValidator>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state from loaded configuration, reading the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: impl Clock + 'static) -> Self {
        Self {
            validator: Arc::new(ConstraintValidator::new(config.config())),
            clock: Arc::new(clock),
        }
    }

    /// Returns the rotation.
    pub fn rotation(&self) -> &Rotation {
        self.validator.rotation()
    }

    /// Returns the validator.
    pub fn validator(&self) -> &ConstraintValidator {
        &self.validator
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// `date`, or today's plant calendar day when absent.
    pub fn date_or_today(&self, date: Option<NaiveDate>) -> NaiveDate {
        date.unwrap_or_else(|| plant_date(self.clock.now(), self.rotation().zone()))
    }
}
