//! Query/category state for a catalog view and everything derived from it.
//!
//! State is the pair `(query, selected_category)`. The search stage is
//! recomputed on every query change; category counts always come from the
//! search stage, never from the category-filtered list, so picking a
//! category does not move the other counts.

use serde::Serialize;
use tracing::debug;

use catalog_core::traits::CatalogSearch;
use catalog_core::types::{Catalog, EquipmentRecord, ScoredMatch, ALL_CATEGORY};

use crate::facets::{aggregate, category_overview, visible_categories, CategoryCounts};
use crate::filter::filter_by_category;
use crate::search::{is_query_active, resolve, LinearScan};

/// A consistent read of every derived output for one state.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub query: &'a str,
    pub selected_category: &'a str,
    pub records: Vec<&'a EquipmentRecord>,
    pub counts: CategoryCounts,
    pub visible_categories: Vec<String>,
}

pub struct CatalogSession<S = LinearScan> {
    catalog: Catalog,
    engine: S,
    query: String,
    selected_category: String,
    matches: Vec<ScoredMatch>,
}

impl CatalogSession<LinearScan> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_engine(catalog, LinearScan)
    }
}

impl<S: CatalogSearch> CatalogSession<S> {
    pub fn with_engine(catalog: Catalog, engine: S) -> Self {
        let matches = engine.rank(&catalog, "");
        Self { catalog, engine, query: String::new(), selected_category: ALL_CATEGORY.to_string(), matches }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn is_query_active(&self) -> bool {
        is_query_active(&self.query)
    }

    /// Replace the query. The selected category is kept even if it no
    /// longer has matches.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.matches = self.engine.rank(&self.catalog, &query);
        self.query = query;
        debug!(query = %self.query, matches = self.matches.len(), "query changed");
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        debug!(category = %self.selected_category, "category changed");
    }

    /// Back to the initial state: no query, `"All"` selected.
    pub fn clear_all(&mut self) {
        self.set_query(String::new());
        self.set_selected_category(ALL_CATEGORY);
    }

    /// Search results before the category filter.
    pub fn search_results(&self) -> Vec<&EquipmentRecord> {
        resolve(&self.catalog, &self.matches)
    }

    /// Search results paired with their scores, before the category filter.
    pub fn scored_results(&self) -> Vec<(&EquipmentRecord, u32)> {
        self.matches
            .iter()
            .filter_map(|m| self.catalog.get(m.position).map(|r| (r, m.score)))
            .collect()
    }

    pub fn displayed_records(&self) -> Vec<&EquipmentRecord> {
        filter_by_category(&self.search_results(), &self.selected_category)
    }

    pub fn category_counts(&self) -> CategoryCounts {
        aggregate(self.search_results())
    }

    pub fn visible_categories(&self) -> Vec<String> {
        visible_categories(self.catalog.categories(), &self.category_counts(), self.is_query_active())
    }

    /// Real categories with their counts, for browsing with no query.
    pub fn category_overview(&self) -> Vec<(String, usize)> {
        category_overview(self.catalog.categories(), &self.category_counts())
    }

    pub fn snapshot(&self) -> CatalogView<'_> {
        let search_results = self.search_results();
        let counts = aggregate(search_results.iter().copied());
        let visible = visible_categories(self.catalog.categories(), &counts, self.is_query_active());
        CatalogView {
            query: &self.query,
            selected_category: &self.selected_category,
            records: filter_by_category(&search_results, &self.selected_category),
            counts,
            visible_categories: visible,
        }
    }
}

/// Records to display for `(query, selected_category)`.
pub fn displayed_records<'a>(catalog: &'a Catalog, query: &str, selected_category: &str) -> Vec<&'a EquipmentRecord> {
    filter_by_category(&crate::search::search(catalog, query), selected_category)
}

/// Per-category counts of the search results for `query`.
pub fn category_counts(catalog: &Catalog, query: &str) -> CategoryCounts {
    aggregate(crate::search::search(catalog, query))
}

/// Filter choices for `query`.
pub fn category_choices(catalog: &Catalog, query: &str) -> Vec<String> {
    visible_categories(catalog.categories(), &category_counts(catalog, query), is_query_active(query))
}
