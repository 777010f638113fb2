//! Category counts and the filter choices worth showing for them.

use std::collections::BTreeMap;

use serde::Serialize;

use catalog_core::types::{EquipmentRecord, ALL_CATEGORY};

/// Category label → number of records carrying it, plus `"All"` for the total.
///
/// Labels absent from the map count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<String, usize>);

impl CategoryCounts {
    pub fn get(&self, label: &str) -> usize {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.get(ALL_CATEGORY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Count records per category. A record with N labels adds to N entries.
pub fn aggregate<'a, I>(records: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a EquipmentRecord>,
{
    let mut counts = BTreeMap::new();
    let mut total = 0;
    for record in records {
        total += 1;
        for label in &record.categories {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
    }
    counts.insert(ALL_CATEGORY.to_string(), total);
    CategoryCounts(counts)
}

/// Filter choices to present.
///
/// Browsing without a query shows every category. While a query is active,
/// every category without matches is hidden, `"All"` included.
pub fn visible_categories(all_categories: &[String], counts: &CategoryCounts, query_active: bool) -> Vec<String> {
    if !query_active {
        return all_categories.to_vec();
    }
    all_categories
        .iter()
        .filter(|c| counts.get(c) > 0)
        .cloned()
        .collect()
}

/// Every real category (no `"All"`) with its count, in category order.
pub fn category_overview(all_categories: &[String], counts: &CategoryCounts) -> Vec<(String, usize)> {
    all_categories
        .iter()
        .filter(|c| c.as_str() != ALL_CATEGORY)
        .map(|c| (c.clone(), counts.get(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::CatalogLoader;

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn multi_label_records_count_in_each_label() {
        let catalog = CatalogLoader::new()
            .from_json_str(
                r#"[
                {"id": 1, "equipment_name": "Combi Oven", "categories": ["Ovens", "Cooking Equipment"]},
                {"id": 2, "equipment_name": "Oven Mitt", "categories": ["Tools"]}
            ]"#,
            )
            .unwrap();
        let counts = aggregate(catalog.records());
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.get("Ovens"), 1);
        assert_eq!(counts.get("Cooking Equipment"), 1);
        assert_eq!(counts.get("Tools"), 1);
        assert_eq!(counts.get("Laundry"), 0);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn empty_input_has_only_all() {
        let counts = aggregate(std::iter::empty());
        assert_eq!(counts.iter().collect::<Vec<_>>(), [("All", 0)]);
    }

    #[test]
    fn hides_empty_categories_only_while_searching() {
        let all = labels(&["All", "Bakery", "Ovens", "Tools"]);
        let mut map = BTreeMap::new();
        map.insert("All".to_string(), 1);
        map.insert("Ovens".to_string(), 1);
        let counts = CategoryCounts(map);

        assert_eq!(visible_categories(&all, &counts, false), all);
        assert_eq!(visible_categories(&all, &counts, true), labels(&["All", "Ovens"]));
    }

    #[test]
    fn search_with_no_matches_hides_all_too() {
        let all = labels(&["All", "Ovens"]);
        let counts = aggregate(std::iter::empty());
        assert_eq!(counts.total(), 0);
        assert!(visible_categories(&all, &counts, true).is_empty());
        assert_eq!(visible_categories(&all, &counts, false), all);
    }

    #[test]
    fn overview_skips_all() {
        let all = labels(&["All", "Bakery", "Ovens"]);
        let counts = aggregate(std::iter::empty());
        assert_eq!(category_overview(&all, &counts), [("Bakery".to_string(), 0), ("Ovens".to_string(), 0)]);
    }
}
