//! Forward and reverse lookups.
//!
//! Forward: which slot does a group work on a date. Reverse: which group
//! holds a slot on a date. The reverse direction scans the four groups.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Slot;

use super::Rotation;
use super::engine::{plant_date, rotate, weeks_passed};

/// One line of a day's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry<'a> {
    /// Group id.
    pub group: &'a str,
    /// The slot the group works.
    pub slot: &'a Slot,
}

impl Rotation {
    /// Slot order (`0..=3`) of `group` on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownGroup`] if `group` is not configured.
    /// Group ids are compared exactly after trimming.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rota::rotation::Rotation;
    /// use chrono::NaiveDate;
    ///
    /// let rotation = Rotation::default();
    /// let anchor_monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let next_monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    ///
    /// assert_eq!(rotation.slot_order_for_group("A", anchor_monday), Ok(2));
    /// assert_eq!(rotation.slot_order_for_group("A", next_monday), Ok(3));
    /// assert!(rotation.slot_order_for_group("E", next_monday).is_err());
    /// ```
    pub fn slot_order_for_group(&self, group: &str, date: NaiveDate) -> EngineResult<u8> {
        let anchor_order =
            self.anchor
                .order_of(group.trim())
                .ok_or_else(|| EngineError::UnknownGroup {
                    group: group.to_string(),
                })?;
        Ok(rotate(
            anchor_order,
            weeks_passed(self.anchor.week_start(), date),
        ))
    }

    /// The slot `group` works on `date`.
    pub fn slot_for_group(&self, group: &str, date: NaiveDate) -> EngineResult<&Slot> {
        let order = self.slot_order_for_group(group, date)?;
        self.catalog
            .by_order(order)
            .ok_or_else(|| EngineError::UnknownSlot {
                slot: format!("order {}", order),
            })
    }

    /// The slot `group` works at `instant`, on the plant's calendar day.
    pub fn slot_for_group_at(&self, group: &str, instant: DateTime<Utc>) -> EngineResult<&Slot> {
        self.slot_for_group(group, plant_date(instant, self.zone))
    }

    /// The group holding a slot on `date`.
    ///
    /// `slot` may be either the slot id or its display name. Returns `None`
    /// if neither matches a configured slot.
    pub fn group_for_slot(&self, slot: &str, date: NaiveDate) -> Option<&str> {
        let target = self.catalog.find(slot)?;
        let weeks = weeks_passed(self.anchor.week_start(), date);

        let mut holders = self.anchor.groups().filter(|group| {
            self.anchor
                .order_of(group)
                .is_some_and(|order| rotate(order, weeks) == target.order)
        });
        let holder = holders.next();
        debug_assert!(
            holder.is_some() && holders.next().is_none(),
            "anchor must be a bijection"
        );
        holder
    }

    /// Every group and its slot on `date`, in slot order.
    pub fn roster_for(&self, date: NaiveDate) -> Vec<RosterEntry<'_>> {
        self.catalog
            .slots()
            .iter()
            .filter_map(|slot| {
                self.group_for_slot(&slot.id, date)
                    .map(|group| RosterEntry { group, slot })
            })
            .collect()
    }
}
