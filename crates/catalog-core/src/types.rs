//! Domain types shared by the search and site crates.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Synthetic category label meaning "no category restriction".
pub const ALL_CATEGORY: &str = "All";

pub type RecordId = u64;
pub type Score = u32;

/// One piece of equipment as it appears in the bundled product list.
///
/// - `id`: stable identifier, unique within a catalog
/// - `categories`: every label the record is filed under (never empty)
/// - `primary_category`/`category`: display grouping only, ignored by ranking
/// - `technical_specifications`: free text, searchable, may be empty
/// - `specifications_object`: ordered key/value pairs for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: RecordId,
    pub equipment_name: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub primary_category: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub professional_description: String,
    #[serde(default)]
    pub technical_specifications: String,
    #[serde(default)]
    pub specifications_object: IndexMap<String, String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub slug: String,
}

impl EquipmentRecord {
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// First `n` specification entries in insertion order; product cards show two.
    pub fn spec_preview(&self, n: usize) -> impl Iterator<Item = (&str, &str)> {
        self.specifications_object
            .iter()
            .take(n)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn validate(&self) -> Result<()> {
        if self.equipment_name.trim().is_empty() {
            return Err(Error::invalid_record(self.id, "equipment_name is empty"));
        }
        if self.categories.is_empty() {
            return Err(Error::invalid_record(self.id, "categories is empty"));
        }
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(Error::invalid_record(self.id, "blank category label"));
        }
        if self.categories.iter().any(|c| c == ALL_CATEGORY) {
            return Err(Error::invalid_record(
                self.id,
                format!("category label '{ALL_CATEGORY}' is reserved"),
            ));
        }
        Ok(())
    }
}

/// Position of a matching record inside its catalog plus its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch {
    pub position: usize,
    pub score: Score,
}

/// The immutable, validated product list.
///
/// Cloning is cheap: records and the derived category list are shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[EquipmentRecord]>,
    categories: Arc<[String]>,
}

impl Catalog {
    /// Validate `records` and freeze them in their given order.
    pub fn new(records: Vec<EquipmentRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id) {
                return Err(Error::invalid_record(record.id, "duplicate id"));
            }
        }

        let labels: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.categories.iter().map(String::as_str))
            .collect();
        let categories: Vec<String> = std::iter::once(ALL_CATEGORY)
            .chain(labels)
            .map(str::to_string)
            .collect();

        Ok(Self { records: records.into(), categories: categories.into() })
    }

    pub fn empty() -> Self {
        Self { records: Arc::from(Vec::new()), categories: Arc::from(vec![ALL_CATEGORY.to_string()]) }
    }

    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `"All"` followed by every distinct label, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn get(&self, position: usize) -> Option<&EquipmentRecord> {
        self.records.get(position)
    }

    pub fn by_id(&self, id: RecordId) -> Option<&EquipmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn by_slug(&self, slug: &str) -> Option<&EquipmentRecord> {
        self.records.iter().find(|r| !r.slug.is_empty() && r.slug == slug)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: RecordId, name: &str, categories: &[&str]) -> EquipmentRecord {
        EquipmentRecord {
            id,
            equipment_name: name.to_string(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            primary_category: categories.first().map(|c| (*c).to_string()).unwrap_or_default(),
            category: String::new(),
            professional_description: String::new(),
            technical_specifications: String::new(),
            specifications_object: IndexMap::new(),
            image_url: String::new(),
            slug: format!("item-{id}"),
        }
    }

    #[test]
    fn categories_are_sorted_with_all_first() {
        let catalog = Catalog::new(vec![
            record(1, "Combi Oven", &["Ovens", "Cooking Equipment"]),
            record(2, "Oven Mitt", &["Tools"]),
            record(3, "Deck Oven", &["Ovens", "Bakery"]),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), ["All", "Bakery", "Cooking Equipment", "Ovens", "Tools"]);
    }

    #[test]
    fn rejects_record_without_categories() {
        let err = Catalog::new(vec![record(7, "Bare", &[])]).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { id: 7, .. }), "{err}");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![record(1, "A", &["X"]), record(1, "B", &["Y"])]).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn rejects_reserved_all_label() {
        assert!(Catalog::new(vec![record(1, "A", &["All"])]).is_err());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), ["All"]);
    }

    #[test]
    fn lookups_by_id_and_slug() {
        let catalog = Catalog::new(vec![record(4, "Fryer", &["Cooking Equipment"])]).unwrap();
        assert_eq!(catalog.by_id(4).map(|r| r.equipment_name.as_str()), Some("Fryer"));
        assert_eq!(catalog.by_slug("item-4").map(|r| r.id), Some(4));
        assert!(catalog.by_slug("").is_none());
    }

    #[test]
    fn spec_preview_keeps_insertion_order() {
        let mut r = record(1, "Mixer", &["Bakery"]);
        r.specifications_object.insert("Power".into(), "1.5 kW".into());
        r.specifications_object.insert("Capacity".into(), "20 L".into());
        r.specifications_object.insert("Voltage".into(), "230 V".into());
        let preview: Vec<_> = r.spec_preview(2).collect();
        assert_eq!(preview, [("Power", "1.5 kW"), ("Capacity", "20 L")]);
    }
}
