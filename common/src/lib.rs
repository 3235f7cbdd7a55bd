//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod query_string;
pub mod facet_filters;
pub mod facet_catalog;
pub mod sort_selection;
pub mod predictive_search;
pub mod search_result;
pub mod pagination;
pub mod product_detail;
pub mod content_page;
