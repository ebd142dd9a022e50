//! Configuration types for the shift rotation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PlantConfig`] they are assembled into.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{RestrictionTag, Slot, second_of_day};

/// Number of slots (and groups) in a rotation.
pub const SLOT_COUNT: usize = 4;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Contents of `plant.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantFile {
    /// Plant name, used in logs.
    pub name: String,
    /// IANA name of the reference zone, e.g. `Europe/Rome`.
    pub timezone: String,
    /// The rotation origin.
    pub anchor: AnchorFile,
}

/// The anchor section of `plant.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnchorFile {
    /// Any day of the anchor week.
    pub week_of: NaiveDate,
    /// Slot id (or display name) each group works during the anchor week.
    pub groups: BTreeMap<String, String>,
}

/// Contents of `slots.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotsFile {
    /// The four slots, in any order.
    pub slots: Vec<Slot>,
}

/// Slots the restriction rules apply to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleSlots {
    /// Slot blocked by [`RestrictionTag::NoNightShift`].
    pub night_slot: String,
    /// Slot blocked by [`RestrictionTag::NoChemicalRisk`].
    pub chemical_exposure_slot: String,
}

/// Contents of `restrictions.yaml`.
///
/// The keyword lists are matched as case-insensitive substrings of an
/// employee's note. They are ad hoc and expected to be tuned with the people
/// who write the notes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestrictionsConfig {
    /// Rule targets.
    pub rules: RuleSlots,
    /// Keywords per tag.
    pub keywords: BTreeMap<RestrictionTag, Vec<String>>,
}

/// The rotation origin: a Monday and each group's slot order on that week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    week_start: NaiveDate,
    orders: BTreeMap<String, u8>,
}

impl Anchor {
    /// Monday of the anchor week.
    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Slot order of `group` during the anchor week.
    pub fn order_of(&self, group: &str) -> Option<u8> {
        self.orders.get(group).copied()
    }

    /// Group ids in sorted order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.orders.keys().map(String::as_str)
    }
}

/// Returns the Monday of the week containing `date`.
pub(crate) fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The complete, validated plant configuration.
///
/// Construction checks every invariant the rotation relies on, so a
/// `PlantConfig` value is always usable as is.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantConfig {
    name: String,
    zone: Tz,
    anchor: Anchor,
    /// Sorted by order.
    slots: Vec<Slot>,
    restrictions: RestrictionsConfig,
}

impl PlantConfig {
    /// Validates and assembles the configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeZone`] for an unknown zone and
    /// [`EngineError::InvalidConfig`] when:
    /// - there are not exactly four slots, or slot ids repeat
    /// - slot orders are not a permutation of `0..=3`
    /// - slot ranges do not partition the 24-hour day
    /// - the anchor does not map exactly four groups onto distinct slots
    /// - a rule names an unknown slot, or a keyword is blank
    pub fn new(
        plant: PlantFile,
        slots: Vec<Slot>,
        restrictions: RestrictionsConfig,
    ) -> EngineResult<Self> {
        let zone: Tz = plant
            .timezone
            .trim()
            .parse()
            .map_err(|_| EngineError::InvalidTimeZone {
                zone: plant.timezone.clone(),
            })?;

        let mut slots = slots;
        slots.sort_by_key(|s| s.order);
        validate_slots(&slots)?;

        let anchor = build_anchor(&plant.anchor, &slots)?;
        validate_restrictions(&restrictions, &slots)?;

        Ok(Self {
            name: plant.name,
            zone,
            anchor,
            slots,
            restrictions,
        })
    }

    /// Returns the plant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the reference zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Returns the anchor.
    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Returns the slots, ordered by rotation order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the restriction vocabulary and rule targets.
    pub fn restrictions(&self) -> &RestrictionsConfig {
        &self.restrictions
    }
}

impl Default for PlantConfig {
    /// The configuration shipped in `config/plant`.
    fn default() -> Self {
        let hm = |h: u32| NaiveTime::from_hms_opt(h, 0, 0).expect("Valid slot boundary");
        let slot = |id: &str, start: u32, end: u32, order: u8| Slot {
            id: id.to_string(),
            display_name: format!("{} shift", id),
            start: hm(start),
            end: hm(end),
            order,
        };
        fn strings(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        let mut orders = BTreeMap::new();
        orders.insert("A".to_string(), 2);
        orders.insert("B".to_string(), 1);
        orders.insert("C".to_string(), 0);
        orders.insert("D".to_string(), 3);

        let mut keywords = BTreeMap::new();
        keywords.insert(
            RestrictionTag::DisabilityLeave,
            strings(&["l.104", "legge 104", "disability leave"]),
        );
        keywords.insert(
            RestrictionTag::NoNightShift,
            strings(&["no night", "no notte", "niente notte", "non notte"]),
        );
        keywords.insert(
            RestrictionTag::NoChemicalRisk,
            strings(&["chemical risk", "rischio chimico", "no chemical", "no chimic"]),
        );
        keywords.insert(
            RestrictionTag::PartTime,
            strings(&["part time", "part-time", "parttime", "tempo parziale"]),
        );

        Self {
            name: "Main plant".to_string(),
            zone: chrono_tz::Europe::Rome,
            anchor: Anchor {
                week_start: NaiveDate::from_ymd_opt(2024, 1, 1).expect("Valid anchor date"),
                orders,
            },
            slots: vec![
                slot("Morning", 6, 12, 0),
                slot("Night", 0, 6, 1),
                slot("Evening", 18, 0, 2),
                slot("Afternoon", 12, 18, 3),
            ],
            restrictions: RestrictionsConfig {
                rules: RuleSlots {
                    night_slot: "Night".to_string(),
                    chemical_exposure_slot: "Afternoon".to_string(),
                },
                keywords,
            },
        }
    }
}

/// Expects `slots` sorted by order.
fn validate_slots(slots: &[Slot]) -> EngineResult<()> {
    if slots.len() != SLOT_COUNT {
        return Err(EngineError::invalid_config(format!(
            "expected {} slots, found {}",
            SLOT_COUNT,
            slots.len()
        )));
    }

    for (expected, slot) in slots.iter().enumerate() {
        if usize::from(slot.order) != expected {
            return Err(EngineError::invalid_config(format!(
                "slot orders must be a permutation of 0..{}; slot '{}' has order {}",
                SLOT_COUNT, slot.id, slot.order
            )));
        }
        if slot.id.trim().is_empty() {
            return Err(EngineError::invalid_config("slot id must not be blank"));
        }
    }

    // Keys are id and display name together, so a name cannot shadow another slot's id.
    let mut keys = BTreeSet::new();
    for slot in slots {
        let own: BTreeSet<String> = [&slot.id, &slot.display_name]
            .iter()
            .map(|k| k.trim().to_ascii_lowercase())
            .collect();
        for key in own {
            if !keys.insert(key.clone()) {
                return Err(EngineError::invalid_config(format!(
                    "duplicate slot key '{}'",
                    key
                )));
            }
        }
    }

    validate_day_partition(slots)
}

fn validate_day_partition(slots: &[Slot]) -> EngineResult<()> {
    if let Some(slot) = slots
        .iter()
        .find(|s| s.start.nanosecond() != 0 || s.end.nanosecond() != 0)
    {
        return Err(EngineError::invalid_config(format!(
            "slot '{}' has a fractional-second boundary",
            slot.id
        )));
    }

    let mut ranges: Vec<&Slot> = slots.iter().collect();
    ranges.sort_by_key(|s| s.start);

    let mut covered = 0;
    for (i, slot) in ranges.iter().enumerate() {
        let length =
            (second_of_day(slot.end) - second_of_day(slot.start)).rem_euclid(SECONDS_PER_DAY);
        if length == 0 {
            return Err(EngineError::invalid_config(format!(
                "slot '{}' has an empty time range",
                slot.id
            )));
        }
        let next = ranges[(i + 1) % ranges.len()];
        if slot.end != next.start {
            return Err(EngineError::invalid_config(format!(
                "slot '{}' ends at {} but slot '{}' starts at {}",
                slot.id, slot.end, next.id, next.start
            )));
        }
        covered += length;
    }

    if covered != SECONDS_PER_DAY {
        return Err(EngineError::invalid_config(format!(
            "slot ranges cover {} seconds instead of a full day",
            covered
        )));
    }
    Ok(())
}

fn build_anchor(anchor: &AnchorFile, slots: &[Slot]) -> EngineResult<Anchor> {
    if anchor.groups.len() != SLOT_COUNT {
        return Err(EngineError::invalid_config(format!(
            "anchor must map {} groups, found {}",
            SLOT_COUNT,
            anchor.groups.len()
        )));
    }

    let mut orders = BTreeMap::new();
    let mut taken = BTreeSet::new();
    for (group, slot_key) in &anchor.groups {
        let group = group.trim();
        if group.is_empty() {
            return Err(EngineError::invalid_config("group id must not be blank"));
        }
        let slot = slots
            .iter()
            .find(|s| s.matches(slot_key))
            .ok_or_else(|| {
                EngineError::invalid_config(format!(
                    "anchor maps group '{}' to unknown slot '{}'",
                    group, slot_key
                ))
            })?;
        if !taken.insert(slot.order) {
            return Err(EngineError::invalid_config(format!(
                "anchor maps more than one group to slot '{}'",
                slot.id
            )));
        }
        if orders.insert(group.to_string(), slot.order).is_some() {
            return Err(EngineError::invalid_config(format!(
                "duplicate group '{}' in anchor",
                group
            )));
        }
    }

    Ok(Anchor {
        week_start: monday_of(anchor.week_of),
        orders,
    })
}

fn validate_restrictions(restrictions: &RestrictionsConfig, slots: &[Slot]) -> EngineResult<()> {
    for (rule, slot_key) in [
        ("night_slot", &restrictions.rules.night_slot),
        (
            "chemical_exposure_slot",
            &restrictions.rules.chemical_exposure_slot,
        ),
    ] {
        if !slots.iter().any(|s| s.matches(slot_key)) {
            return Err(EngineError::invalid_config(format!(
                "rule '{}' names unknown slot '{}'",
                rule, slot_key
            )));
        }
    }

    for (tag, words) in &restrictions.keywords {
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(EngineError::invalid_config(format!(
                "blank keyword for tag '{}'",
                tag
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant_file(groups: &[(&str, &str)]) -> PlantFile {
        PlantFile {
            name: "Test plant".to_string(),
            timezone: "Europe/Rome".to_string(),
            anchor: AnchorFile {
                week_of: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                groups: groups
                    .iter()
                    .map(|(g, s)| (g.to_string(), s.to_string()))
                    .collect(),
            },
        }
    }

    fn standard_groups() -> Vec<(&'static str, &'static str)> {
        vec![
            ("A", "Evening"),
            ("B", "Night"),
            ("C", "Morning"),
            ("D", "Afternoon"),
        ]
    }

    fn default_parts() -> (Vec<Slot>, RestrictionsConfig) {
        let config = PlantConfig::default();
        (config.slots().to_vec(), config.restrictions().clone())
    }

    #[test]
    fn test_default_config_is_valid() {
        let (slots, restrictions) = default_parts();
        let config = PlantConfig::new(plant_file(&standard_groups()), slots, restrictions);
        assert!(config.is_ok(), "{:?}", config.err());
    }

    #[test]
    fn test_anchor_normalized_to_monday() {
        let (slots, restrictions) = default_parts();
        let config =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap();
        // 2024-01-03 is a Wednesday
        assert_eq!(
            config.anchor().week_start(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_slots_are_sorted_by_order() {
        let (mut slots, restrictions) = default_parts();
        slots.reverse();
        let config =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap();
        let orders: Vec<u8> = config.slots().iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rejects_three_slots() {
        let (mut slots, restrictions) = default_parts();
        slots.pop();
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        assert_eq!(err, EngineError::invalid_config("expected 4 slots, found 3"));
    }

    #[test]
    fn test_rejects_duplicate_order() {
        let (mut slots, restrictions) = default_parts();
        slots[3].order = 2;
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_gap_in_day() {
        let (mut slots, restrictions) = default_parts();
        // Morning ends at 11:00, leaving 11:00-12:00 uncovered
        slots[0].end = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        match err {
            EngineError::InvalidConfig { message } => assert!(message.contains("Morning")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_overlap_in_day() {
        let (mut slots, restrictions) = default_parts();
        slots[0].end = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_boundary_off_by_seconds() {
        let (mut slots, restrictions) = default_parts();
        // Morning runs into Afternoon by half a minute
        slots[0].end = NaiveTime::from_hms_opt(12, 0, 30).unwrap();
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        match err {
            EngineError::InvalidConfig { message } => {
                assert!(message.contains("Morning"));
                assert!(message.contains("12:00:30"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_boundaries_with_seconds() {
        let (mut slots, restrictions) = default_parts();
        let boundary = NaiveTime::from_hms_opt(12, 0, 30).unwrap();
        slots[0].end = boundary;
        slots[3].start = boundary;
        let config =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap();

        let noon_ish = NaiveTime::from_hms_opt(12, 0, 10).unwrap();
        let holders: Vec<&str> = config
            .slots()
            .iter()
            .filter(|s| s.contains(noon_ish))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(holders, vec!["Morning"]);
    }

    #[test]
    fn test_rejects_fractional_second_boundary() {
        let (mut slots, restrictions) = default_parts();
        let boundary = NaiveTime::from_hms_milli_opt(12, 0, 0, 500).unwrap();
        slots[0].end = boundary;
        slots[3].start = boundary;
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_anchor_collision() {
        let (slots, restrictions) = default_parts();
        let groups = vec![
            ("A", "Evening"),
            ("B", "Evening"),
            ("C", "Morning"),
            ("D", "Afternoon"),
        ];
        let err = PlantConfig::new(plant_file(&groups), slots, restrictions).unwrap_err();
        assert_eq!(
            err,
            EngineError::invalid_config("anchor maps more than one group to slot 'Evening'")
        );
    }

    #[test]
    fn test_rejects_groups_equal_after_trimming() {
        let (slots, restrictions) = default_parts();
        let groups = vec![
            ("A", "Evening"),
            (" A", "Night"),
            ("C", "Morning"),
            ("D", "Afternoon"),
        ];
        let err = PlantConfig::new(plant_file(&groups), slots, restrictions).unwrap_err();
        assert_eq!(
            err,
            EngineError::invalid_config("duplicate group 'A' in anchor")
        );
    }

    #[test]
    fn test_rejects_anchor_with_three_groups() {
        let (slots, restrictions) = default_parts();
        let groups = vec![("A", "Evening"), ("B", "Night"), ("C", "Morning")];
        let err = PlantConfig::new(plant_file(&groups), slots, restrictions).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_anchor_accepts_display_names() {
        let (slots, restrictions) = default_parts();
        let groups = vec![
            ("A", "Evening shift"),
            ("B", "night"),
            ("C", "Morning"),
            ("D", "Afternoon shift"),
        ];
        let config = PlantConfig::new(plant_file(&groups), slots, restrictions).unwrap();
        assert_eq!(config.anchor().order_of("A"), Some(2));
        assert_eq!(config.anchor().order_of("B"), Some(1));
    }

    #[test]
    fn test_rejects_unknown_zone() {
        let (slots, restrictions) = default_parts();
        let mut plant = plant_file(&standard_groups());
        plant.timezone = "Mars/Olympus".to_string();
        let err = PlantConfig::new(plant, slots, restrictions).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidTimeZone {
                zone: "Mars/Olympus".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_unknown_rule_slot() {
        let (slots, mut restrictions) = default_parts();
        restrictions.rules.chemical_exposure_slot = "Paint".to_string();
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_blank_keyword() {
        let (slots, mut restrictions) = default_parts();
        restrictions
            .keywords
            .insert(RestrictionTag::PartTime, vec!["  ".to_string()]);
        let err =
            PlantConfig::new(plant_file(&standard_groups()), slots, restrictions).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_monday_of() {
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(monday_of(sunday), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(monday_of(monday), monday);
    }
}
