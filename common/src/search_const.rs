//! Constants shared by the query-string grammar, loaders and UI.

/// Every collection filter parameter starts with this prefix.
pub const FILTER_PARAM_PREFIX: &str = "filter.";
pub const ENTITY_FILTER_PREFIX: &str = "filter.p";
pub const VARIANT_FILTER_PREFIX: &str = "filter.v";

/// Facet keys that filter on the product record itself; everything else is a variant filter.
pub const ENTITY_LEVEL_FACET_KEYS: [&str; 3] = ["type", "vendor", "tag"];

pub const SORT_PARAM: &str = "sort_by";
pub const SEARCH_TERM_PARAM: &str = "q";
pub const CURSOR_PARAM: &str = "cursor";
pub const DIRECTION_PARAM: &str = "direction";
pub const DIRECTION_NEXT: &str = "next";
pub const DIRECTION_PREVIOUS: &str = "previous";

pub const PRICE_MIN_FACET_KEY: &str = "price.gte";
pub const PRICE_MAX_FACET_KEY: &str = "price.lte";

pub const COLLECTION_PAGE_SIZE: u64 = 20;
pub const SEARCH_PAGE_SIZE: u64 = 20;
pub const PREDICTIVE_SEARCH_LIMIT: u32 = 10;
pub const PREDICTIVE_SEARCH_DEBOUNCE_MS: u32 = 250;
