//! Slot model.
//!
//! A slot is one of the four fixed daily work periods. Slots come from
//! configuration and never change for the life of the process.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// One of the four daily work periods.
///
/// `start` is inclusive and `end` exclusive. A range whose end is not after
/// its start wraps midnight (`18:00:00`-`00:00:00` covers the evening up to
/// midnight).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Short stable code, e.g. `"Night"`.
    pub id: String,
    /// Human label shown to planners.
    pub display_name: String,
    /// Wall-clock start of the slot.
    pub start: NaiveTime,
    /// Wall-clock end of the slot.
    pub end: NaiveTime,
    /// Rotation position in `0..=3`. Forward rotation adds one per week.
    pub order: u8,
}

impl Slot {
    /// Returns true when the range crosses midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// Returns true if the wall-clock time falls inside this slot.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rota::models::Slot;
    /// use chrono::NaiveTime;
    ///
    /// let evening = Slot {
    ///     id: "Evening".to_string(),
    ///     display_name: "Evening shift".to_string(),
    ///     start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
    ///     order: 2,
    /// };
    /// assert!(evening.contains(NaiveTime::from_hms_opt(23, 59, 0).unwrap()));
    /// assert!(!evening.contains(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
    /// ```
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.wraps_midnight() {
            time >= self.start || time < self.end
        } else {
            time >= self.start && time < self.end
        }
    }

    /// Length of the slot in minutes, accounting for midnight wrap.
    pub fn duration_minutes(&self) -> i64 {
        let seconds = match (second_of_day(self.end) - second_of_day(self.start))
            .rem_euclid(SECONDS_PER_DAY)
        {
            // equal bounds mean a full day, not an empty slot
            0 => SECONDS_PER_DAY,
            s => s,
        };
        seconds / 60
    }

    /// Length of the slot in hours.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::new(self.duration_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Returns true if `key` is this slot's id or display name.
    ///
    /// Both comparisons ignore ASCII case and surrounding whitespace, since
    /// planners type either form.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.eq_ignore_ascii_case(key) || self.display_name.eq_ignore_ascii_case(key)
    }
}

/// Whole seconds elapsed since midnight.
pub(crate) fn second_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(id: &str, start: NaiveTime, end: NaiveTime) -> Slot {
        Slot {
            id: id.to_string(),
            display_name: format!("{} shift", id),
            start,
            end,
            order: 0,
        }
    }

    #[test]
    fn test_contains_is_start_inclusive_end_exclusive() {
        let morning = slot("Morning", time(6, 0), time(12, 0));
        assert!(!morning.contains(time(5, 59)));
        assert!(morning.contains(time(6, 0)));
        assert!(morning.contains(time(11, 59)));
        assert!(!morning.contains(time(12, 0)));
    }

    #[test]
    fn test_contains_wrapping_range() {
        let evening = slot("Evening", time(18, 0), time(0, 0));
        assert!(evening.wraps_midnight());
        assert!(evening.contains(time(18, 0)));
        assert!(evening.contains(time(23, 59)));
        assert!(!evening.contains(time(0, 0)));
        assert!(!evening.contains(time(17, 59)));

        let late = slot("Late", time(22, 0), time(6, 0));
        assert!(late.contains(time(2, 30)));
        assert!(!late.contains(time(6, 0)));
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(
            slot("Night", time(0, 0), time(6, 0)).duration_hours(),
            Decimal::new(6, 0)
        );
        assert_eq!(
            slot("Evening", time(18, 0), time(0, 0)).duration_hours(),
            Decimal::new(6, 0)
        );
        assert_eq!(
            slot("Late", time(22, 0), time(5, 30)).duration_hours(),
            Decimal::new(75, 1)
        );
    }

    #[test]
    fn test_matches_id_and_display_name() {
        let night = slot("Night", time(0, 0), time(6, 0));
        assert!(night.matches("Night"));
        assert!(night.matches("night"));
        assert!(night.matches(" Night shift "));
        assert!(!night.matches("Nigh"));
        assert!(!night.matches(""));
    }

    #[test]
    fn test_slot_serialization() {
        let night = slot("Night", time(0, 0), time(6, 0));
        let json = serde_json::to_string(&night).unwrap();
        assert!(json.contains("\"start\":\"00:00:00\""));
        assert!(json.contains("\"end\":\"06:00:00\""));

        let back: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, night);
    }
}
