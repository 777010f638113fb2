use tracing::debug;

use catalog_core::traits::CatalogSearch;
use catalog_core::types::{Catalog, EquipmentRecord, ScoredMatch};

use crate::score::{score_record, Needle};

/// Scores every record on each query. Fine for catalogs of a few hundred items.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScan;

impl CatalogSearch for LinearScan {
    fn rank(&self, catalog: &Catalog, query: &str) -> Vec<ScoredMatch> {
        let Some(needle) = Needle::new(query) else {
            return (0..catalog.len()).map(|position| ScoredMatch { position, score: 0 }).collect();
        };

        let mut matches: Vec<ScoredMatch> = catalog
            .records()
            .iter()
            .enumerate()
            .map(|(position, record)| ScoredMatch { position, score: score_record(record, &needle) })
            .filter(|m| m.score > 0)
            .collect();
        // stable: equal scores keep catalog order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(query, scanned = catalog.len(), matched = matches.len(), "ranked catalog");
        matches
    }
}

/// True when `query` narrows the catalog at all.
pub fn is_query_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Ranked records for `query`; the whole catalog in order when the query is blank.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a EquipmentRecord> {
    resolve(catalog, &LinearScan.rank(catalog, query))
}

/// Like [`search`] but keeps the score next to each record.
pub fn search_scored<'a>(catalog: &'a Catalog, query: &str) -> Vec<(&'a EquipmentRecord, u32)> {
    LinearScan
        .rank(catalog, query)
        .into_iter()
        .filter_map(|m| catalog.get(m.position).map(|r| (r, m.score)))
        .collect()
}

pub(crate) fn resolve<'a>(catalog: &'a Catalog, matches: &[ScoredMatch]) -> Vec<&'a EquipmentRecord> {
    matches.iter().filter_map(|m| catalog.get(m.position)).collect()
}
