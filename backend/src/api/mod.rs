pub mod search;
pub mod collections;
pub mod products;
pub mod content;
