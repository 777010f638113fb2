//! Per-record relevance scoring.
//!
//! Each field group contributes at most one rule; groups add up. Matching is
//! plain substring/equality on lowercased text, nothing else is normalized.

use catalog_core::types::{EquipmentRecord, Score};

pub const NAME_EXACT: Score = 100;
pub const NAME_PREFIX: Score = 80;
pub const NAME_CONTAINS: Score = 60;
pub const CATEGORY_EXACT: Score = 50;
pub const CATEGORY_CONTAINS: Score = 40;
pub const DESCRIPTION_CONTAINS: Score = 20;
pub const SPECIFICATIONS_CONTAINS: Score = 10;

/// Lowercased form of a non-blank query, ready for [`score_record`].
///
/// Only emptiness is judged on the trimmed text; surrounding whitespace
/// stays part of the needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    pub fn new(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            None
        } else {
            Some(Self(query.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn score_record(record: &EquipmentRecord, needle: &Needle) -> Score {
    let needle = needle.as_str();
    name_score(&record.equipment_name, needle)
        + category_score(&record.categories, needle)
        + contains_score(&record.professional_description, needle, DESCRIPTION_CONTAINS)
        + contains_score(&record.technical_specifications, needle, SPECIFICATIONS_CONTAINS)
}

fn name_score(name: &str, needle: &str) -> Score {
    let name = name.to_lowercase();
    if name == needle {
        NAME_EXACT
    } else if name.starts_with(needle) {
        NAME_PREFIX
    } else if name.contains(needle) {
        NAME_CONTAINS
    } else {
        0
    }
}

fn category_score(categories: &[String], needle: &str) -> Score {
    let lowered: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();
    if lowered.iter().any(|c| c == needle) {
        CATEGORY_EXACT
    } else if lowered.iter().any(|c| c.contains(needle)) {
        CATEGORY_CONTAINS
    } else {
        0
    }
}

fn contains_score(text: &str, needle: &str, points: Score) -> Score {
    if text.to_lowercase().contains(needle) { points } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, categories: &[&str], desc: &str, specs: &str) -> EquipmentRecord {
        EquipmentRecord {
            id: 1,
            equipment_name: name.to_string(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            primary_category: String::new(),
            category: String::new(),
            professional_description: desc.to_string(),
            technical_specifications: specs.to_string(),
            specifications_object: Default::default(),
            image_url: String::new(),
            slug: String::new(),
        }
    }

    fn score(r: &EquipmentRecord, q: &str) -> Score {
        score_record(r, &Needle::new(q).unwrap())
    }

    #[test]
    fn blank_queries_have_no_needle() {
        assert!(Needle::new("").is_none());
        assert!(Needle::new("   \t").is_none());
        assert_eq!(Needle::new(" Oven").unwrap().as_str(), " oven");
    }

    #[test]
    fn name_rules_are_mutually_exclusive() {
        let r = record("Oven", &["X"], "", "");
        assert_eq!(score(&r, "OVEN"), NAME_EXACT);
        let r = record("Oven Mitt", &["X"], "", "");
        assert_eq!(score(&r, "oven"), NAME_PREFIX);
        let r = record("Combi Oven", &["X"], "", "");
        assert_eq!(score(&r, "oven"), NAME_CONTAINS);
    }

    #[test]
    fn category_exact_beats_contains() {
        let r = record("Thing", &["Ovens", "Oven"], "", "");
        assert_eq!(score(&r, "oven"), CATEGORY_EXACT);
        let r = record("Thing", &["Ovens"], "", "");
        assert_eq!(score(&r, "oven"), CATEGORY_CONTAINS);
    }

    #[test]
    fn groups_add_up() {
        let r = record("Combi Oven", &["Ovens", "Cooking Equipment"], "Steam combi oven", "");
        // prefix + description
        assert_eq!(score(&r, "combi"), NAME_PREFIX + DESCRIPTION_CONTAINS);
        assert_eq!(score(&r, "ovens"), CATEGORY_EXACT);
        let r = record("Oven", &["Oven"], "oven", "oven");
        assert_eq!(score(&r, "oven"), 180);
    }

    #[test]
    fn no_match_scores_zero() {
        let r = record("Fryer", &["Cooking Equipment"], "Deep fryer", "");
        assert_eq!(score(&r, "blender"), 0);
    }
}
