//! The slot catalog.

use chrono::NaiveTime;
use serde::Serialize;

use crate::models::Slot;

/// The four daily slots, ordered by rotation order.
///
/// Built once from a validated [`PlantConfig`](crate::config::PlantConfig)
/// and never modified, so callers may hold on to it for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
}

impl SlotCatalog {
    /// `slots` must already be sorted so that `slots[i].order == i`.
    pub(crate) fn new(slots: Vec<Slot>) -> Self {
        debug_assert!(
            slots
                .iter()
                .enumerate()
                .all(|(i, s)| usize::from(s.order) == i)
        );
        Self { slots }
    }

    /// All slots, ordered by rotation order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot with the given rotation order.
    pub fn by_order(&self, order: u8) -> Option<&Slot> {
        self.slots.get(usize::from(order))
    }

    /// Looks a slot up by id or display name.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rota::rotation::Rotation;
    ///
    /// let rotation = Rotation::default();
    /// let by_id = rotation.catalog().find("Night").unwrap();
    /// let by_name = rotation.catalog().find("Night shift").unwrap();
    /// assert_eq!(by_id, by_name);
    /// assert!(rotation.catalog().find("Lunch").is_none());
    /// ```
    pub fn find(&self, key: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.matches(key))
    }

    /// The slot whose time range contains the wall-clock time.
    ///
    /// Always `Some` for a validated catalog, whose ranges partition the day.
    pub fn slot_at(&self, time: NaiveTime) -> Option<&Slot> {
        self.slots.iter().find(|s| s.contains(time))
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the catalog has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
