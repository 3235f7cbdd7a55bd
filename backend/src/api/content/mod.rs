//! Shop page and blog article loaders.

mod content_page;
pub use content_page::{load_article, load_page};
