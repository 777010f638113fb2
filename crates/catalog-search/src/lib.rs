//! catalog-search
//!
//! Relevance search over an in-memory [`Catalog`](catalog_core::Catalog),
//! category counts and filtering, and the query/category session that ties
//! them together.

pub mod facets;
pub mod filter;
pub mod score;
pub mod search;
pub mod session;

pub use facets::{aggregate, visible_categories, CategoryCounts};
pub use filter::filter_by_category;
pub use search::{is_query_active, search, search_scored, LinearScan};
pub use session::{category_choices, category_counts, displayed_records, CatalogSession, CatalogView};
