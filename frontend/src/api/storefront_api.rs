//! Server functions wrapping the storefront loaders.

use common::{
    content_page::ContentPage,
    pagination::PageCursor,
    predictive_search::{PredictiveSearchRequest, PredictiveSearchResult},
    product_detail::ProductDetail,
    search_result::{CatalogProduct, CollectionPage, RegularSearchResult},
};
use dioxus::prelude::*;

#[server]
pub async fn load_collection(handle: String, query: String) -> Result<CollectionPage, ServerFnError> {
    let client = backend::storefront_utils::graphql_client::get_storefront_client();
    let x = backend::api::collections::load_collection(&client, &handle, &query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn predictive_search(request: PredictiveSearchRequest) -> Result<PredictiveSearchResult, ServerFnError> {
    let client = backend::storefront_utils::graphql_client::get_storefront_client();
    let x = backend::api::search::predictive_search(&client, &request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn regular_search(term: String, cursor: PageCursor) -> Result<RegularSearchResult, ServerFnError> {
    let client = backend::storefront_utils::graphql_client::get_storefront_client();
    let x = backend::api::search::regular_search(&client, &term, &cursor).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn featured_rows(handles: Vec<String>) -> Result<Vec<(String, Vec<CatalogProduct>)>, ServerFnError> {
    let client = backend::storefront_utils::graphql_client::get_storefront_client();
    let x = backend::api::products::featured_rows(&client, &handles).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn load_product(handle: String, query: String) -> Result<ProductDetail, ServerFnError> {
    let client = backend::storefront_utils::graphql_client::get_storefront_client();
    let x = backend::api::products::load_product(&client, &handle, &query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn load_page(handle: String) -> Result<ContentPage, ServerFnError> {
    let client = backend::storefront_utils::graphql_client::get_storefront_client();
    let x = backend::api::content::load_page(&client, &handle).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn load_article(blog: String, handle: String) -> Result<ContentPage, ServerFnError> {
    let client = backend::storefront_utils::graphql_client::get_storefront_client();
    let x = backend::api::content::load_article(&client, &blog, &handle).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
