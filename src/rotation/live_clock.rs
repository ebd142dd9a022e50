//! Live-clock resolution: which slot and group are on duty right now.
//!
//! "Now" is always passed in. The only place that reads the real clock is
//! [`SystemClock`], which the HTTP layer hands to its handlers.

use chrono::{DateTime, Utc};

use crate::models::Slot;

use super::Rotation;
use super::engine::plant_date;

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Rotation {
    /// The slot whose time range contains `now`'s wall-clock time in the
    /// plant zone.
    ///
    /// `None` only for a catalog with gaps, which validation rejects.
    pub fn active_slot(&self, now: DateTime<Utc>) -> Option<&Slot> {
        let local = now.with_timezone(&self.zone);
        self.catalog.slot_at(local.time())
    }

    /// The group on duty at `now`.
    ///
    /// Resolves the active slot, then looks up its holder on the plant's
    /// calendar day of `now`. A night slot starting at midnight therefore
    /// belongs to the day it starts on.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rota::rotation::Rotation;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let rotation = Rotation::default();
    /// // 19:00 in Rome on Monday 2024-01-01: the evening slot, held by group A
    /// let now = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
    /// assert_eq!(rotation.active_group(now), Some("A"));
    /// ```
    pub fn active_group(&self, now: DateTime<Utc>) -> Option<&str> {
        let slot = self.active_slot(now)?;
        self.group_for_slot(&slot.id, plant_date(now, self.zone))
    }
}
