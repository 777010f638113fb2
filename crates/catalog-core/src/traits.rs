use crate::types::{Catalog, ScoredMatch};

/// Produces the search stage for a query: matching catalog positions,
/// best first.
///
/// A blank query must return every position in catalog order; ties must
/// keep catalog order.
pub trait CatalogSearch: Send + Sync {
    fn rank(&self, catalog: &Catalog, query: &str) -> Vec<ScoredMatch>;
}
