//! Search loaders and module exports.

mod predictive_search;
pub use predictive_search::predictive_search;

mod regular_search;
pub use regular_search::regular_search;
