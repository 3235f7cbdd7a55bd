//! Storefront data loaders shared by the frontend server functions.

pub mod api;
pub mod storefront_utils;
pub mod server_extra;
