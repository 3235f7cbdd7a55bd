mod featured_products;
pub use featured_products::{featured_products, featured_rows, placeholder_lineup};

mod product_detail;
pub use product_detail::load_product;
