//! Office and candidate name normalization for published output
//!
//! The published record set uses display names from two small lookup
//! tables. Offices missing from the office table are not published at
//! all: the report prints down-ballot races the published office list
//! deliberately omits, and the filter lives here rather than in the
//! parser so the core stays total. Candidates missing from the
//! candidate table fall back to title-casing.

use crate::constants::{CANDIDATE_DISPLAY_NAMES, OFFICE_DISPLAY_NAMES};
use std::collections::HashMap;

/// Normalization registry for office and candidate display names.
#[derive(Debug, Clone)]
pub struct OfficeRegistry {
    offices: HashMap<&'static str, &'static str>,
    candidates: HashMap<&'static str, &'static str>,
}

impl OfficeRegistry {
    pub fn new() -> Self {
        Self {
            offices: OFFICE_DISPLAY_NAMES.iter().copied().collect(),
            candidates: CANDIDATE_DISPLAY_NAMES.iter().copied().collect(),
        }
    }

    /// Display name for a raw office, or `None` when the office is not
    /// in the published list.
    pub fn display_office(&self, raw_office: &str) -> Option<&'static str> {
        self.offices.get(raw_office).copied()
    }

    /// True when the office appears in the published list.
    pub fn is_published_office(&self, raw_office: &str) -> bool {
        self.offices.contains_key(raw_office)
    }

    /// Display name for a raw candidate label; unmapped names are
    /// title-cased.
    pub fn display_candidate(&self, raw_candidate: &str) -> String {
        match self.candidates.get(raw_candidate) {
            Some(display) => (*display).to_string(),
            None => title_case(raw_candidate),
        }
    }

    /// Number of published offices
    pub fn office_count(&self) -> usize {
        self.offices.len()
    }
}

impl Default for OfficeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-case a label: the first letter of every alphabetic run is
/// uppercased and the rest lowercased. Non-alphabetic characters start
/// a new run, so "O'BRIEN" becomes "O'Brien".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_run_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_run_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_run_start = false;
        } else {
            out.push(c);
            at_run_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_office_lookup() {
        let registry = OfficeRegistry::new();

        assert_eq!(registry.display_office("GOVERNOR"), Some("Governor"));
        assert_eq!(registry.display_office("U S PRESIDENT"), Some("President"));
        assert_eq!(registry.display_office("SENATOR"), Some("State Senate"));
        assert_eq!(registry.office_count(), 9);
    }

    #[test]
    fn test_unpublished_office_is_filtered() {
        let registry = OfficeRegistry::new();

        assert_eq!(registry.display_office("COUNTY COMMISSIONER"), None);
        assert!(!registry.is_published_office("COUNTY COMMISSIONER"));
        assert!(registry.is_published_office("STATE TREASURER"));
    }

    #[test]
    fn test_special_candidate_labels() {
        let registry = OfficeRegistry::new();

        assert_eq!(registry.display_candidate("WRITE-IN"), "Write-in");
        assert_eq!(registry.display_candidate("OVER VOTES"), "Over Votes");
        assert_eq!(registry.display_candidate("UNDER VOTES"), "Under Votes");
    }

    #[test]
    fn test_candidate_fallback_title_casing() {
        let registry = OfficeRegistry::new();

        assert_eq!(registry.display_candidate("JOHN SMITH"), "John Smith");
        assert_eq!(registry.display_candidate("MARY O'BRIEN"), "Mary O'Brien");
    }

    #[test]
    fn test_title_case_runs() {
        assert_eq!(title_case("ABC-DEF"), "Abc-Def");
        assert_eq!(title_case("a b c"), "A B C");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("123"), "123");
    }
}
