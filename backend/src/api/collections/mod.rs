//! Collection loaders and module exports.

mod collection_products;
pub use collection_products::{load_collection, placeholder_facet_catalog};

pub mod product_filters;
