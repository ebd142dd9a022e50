//! Restriction tag derivation from free-text notes.
//!
//! Notes are typed by operators and are messy, so derivation is a plain
//! keyword scan. It over-matches and under-matches; the [`TagDeriver`]
//! trait lets a structured source replace it without touching the rules.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::RestrictionsConfig;
use crate::models::RestrictionTag;

/// Turns an employee note into restriction tags.
pub trait TagDeriver: Send + Sync {
    /// Tags present in `note`. `None` and blank notes yield the empty set.
    fn derive_tags(&self, note: Option<&str>) -> BTreeSet<RestrictionTag>;
}

/// Case-insensitive substring matching against a keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTagDeriver {
    /// Lowercased keywords per tag.
    keywords: BTreeMap<RestrictionTag, Vec<String>>,
}

impl KeywordTagDeriver {
    /// Builds a deriver from a keyword table.
    pub fn new(keywords: &BTreeMap<RestrictionTag, Vec<String>>) -> Self {
        let keywords = keywords
            .iter()
            .map(|(tag, words)| {
                let words = words
                    .iter()
                    .map(|w| w.trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
                (*tag, words)
            })
            .collect();
        Self { keywords }
    }

    /// Builds a deriver from the restriction section of the configuration.
    pub fn from_config(restrictions: &RestrictionsConfig) -> Self {
        Self::new(&restrictions.keywords)
    }
}

impl TagDeriver for KeywordTagDeriver {
    /// # Example
    ///
    /// ```
    /// use shift_rota::config::PlantConfig;
    /// use shift_rota::models::RestrictionTag;
    /// use shift_rota::validation::{KeywordTagDeriver, TagDeriver};
    ///
    /// let deriver = KeywordTagDeriver::from_config(PlantConfig::default().restrictions());
    /// let tags = deriver.derive_tags(Some("Part-time; NO NIGHT shifts"));
    /// assert!(tags.contains(&RestrictionTag::PartTime));
    /// assert!(tags.contains(&RestrictionTag::NoNightShift));
    /// assert!(deriver.derive_tags(None).is_empty());
    /// ```
    fn derive_tags(&self, note: Option<&str>) -> BTreeSet<RestrictionTag> {
        let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) else {
            return BTreeSet::new();
        };
        let note = note.to_lowercase();

        self.keywords
            .iter()
            .filter(|(_, words)| words.iter().any(|w| note.contains(w.as_str())))
            .map(|(tag, _)| *tag)
            .collect()
    }
}
