//! Configuration loading and management for the shift rotation engine.
//!
//! This module loads the plant configuration from YAML files: the reference
//! time zone, the rotation anchor, the slot catalog and the restriction
//! vocabulary used by the validator.
//!
//! # Example
//!
//! ```no_run
//! use shift_rota::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/plant").unwrap();
//! println!("Loaded plant: {}", config.config().name());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Anchor, AnchorFile, PlantConfig, PlantFile, RestrictionsConfig, RuleSlots, SLOT_COUNT,
    SlotsFile,
};

pub(crate) use types::monday_of;
