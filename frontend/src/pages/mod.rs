pub mod collection_page;
pub mod content_page;
pub mod home_page;
pub mod product_page;
pub mod search_page;
