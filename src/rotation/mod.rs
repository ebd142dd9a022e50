//! The rotating shift scheduler.
//!
//! A [`Rotation`] maps (group, calendar date) to a slot and back. It is
//! built from a validated [`PlantConfig`] and is immutable afterwards, so a
//! single value can be shared across threads without locking.
//!
//! ```
//! use shift_rota::rotation::Rotation;
//! use chrono::NaiveDate;
//!
//! let rotation = Rotation::default();
//! let anchor_monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! assert_eq!(rotation.slot_for_group("A", anchor_monday).unwrap().id, "Evening");
//! assert_eq!(rotation.group_for_slot("Evening", anchor_monday), Some("A"));
//! ```

mod catalog;
mod engine;
mod live_clock;
mod lookup;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::config::{Anchor, PlantConfig};

pub use catalog::SlotCatalog;
pub use engine::{plant_date, rotate, weeks_passed};
pub use live_clock::{Clock, FixedClock, SystemClock};
pub use lookup::RosterEntry;

/// Slot catalog, anchor and reference zone for one plant.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    catalog: SlotCatalog,
    anchor: Anchor,
    zone: Tz,
}

impl Rotation {
    /// Builds the rotation for a validated configuration.
    pub fn new(config: &PlantConfig) -> Self {
        Self {
            catalog: SlotCatalog::new(config.slots().to_vec()),
            anchor: config.anchor().clone(),
            zone: config.zone(),
        }
    }

    /// The slot catalog.
    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    /// The plant's reference zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Monday of the anchor week.
    pub fn anchor_week_start(&self) -> NaiveDate {
        self.anchor.week_start()
    }

    /// Group ids in sorted order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.anchor.groups()
    }

    /// Whole weeks between the anchor week and `date`; negative before it.
    pub fn week_index(&self, date: NaiveDate) -> i64 {
        weeks_passed(self.anchor.week_start(), date)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(&PlantConfig::default())
    }
}
