pub mod collection_filters;
pub mod error_boundary;
pub mod navbar;
pub mod page_links;
pub mod predictive_search_aside;
pub mod product_item;
pub mod suspend_boundary;
