//! Home page product row.

use common::search_result::{CatalogProduct, PlaceholderProduct};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::storefront_utils::{
    graphql_client::StorefrontClient,
    raw_types::{PRODUCT_ITEM_FRAGMENT, RawConnection, RawProductItem},
};

const FEATURED_PRODUCTS_QUERY: &str = "
  query FeaturedProducts(
    $handle: String!
    $first: Int
    $country: CountryCode
    $language: LanguageCode
  ) @inContext(country: $country, language: $language) {
    collection(handle: $handle) {
      products(first: $first) {
        nodes {
          ...ProductItem
        }
      }
    }
  }
";

const FEATURED_PRODUCTS_COUNT: u64 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeaturedProductsData {
    #[serde(default)]
    collection: Option<RawFeaturedCollection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFeaturedCollection {
    products: RawConnection<RawProductItem>,
}

/// Demo lineup used until the featured collection has products.
pub fn placeholder_lineup() -> Vec<CatalogProduct> {
    [
        ("1", "A. SOCIETY", "Navy", "$160"),
        ("2", "RICK OWENS", "Deep V Si T", "$465"),
        ("3", "RICK OWENS", "Brad T", "$350"),
        ("4", "PUMA", "Speedcat OG", "$140"),
        ("5", "STONE ISLAND", "60/2 Cotton Jersey Short-Sleeve T-Shirt Compass Patch", "$250"),
    ]
    .into_iter()
    .map(|(id, brand, name, price)| {
        CatalogProduct::Placeholder(PlaceholderProduct {
            id: format!("placeholder-{}", id),
            brand: brand.to_string(),
            name: name.to_string(),
            price_label: price.to_string(),
            is_new: true,
        })
    })
    .collect()
}

/// Storefront cards for the first products of `handle`, or the placeholder lineup when the
/// collection is missing or empty.
pub async fn featured_products(client: &StorefrontClient, handle: &str) -> anyhow::Result<Vec<CatalogProduct>> {
    let variables = json!({
        "handle": handle,
        "first": FEATURED_PRODUCTS_COUNT,
    });
    let query_text = format!("{}{}", PRODUCT_ITEM_FRAGMENT, FEATURED_PRODUCTS_QUERY);
    let data: FeaturedProductsData = client.query("FeaturedProducts", &query_text, variables).await?;
    let products = data.collection.map(|c| c.products.nodes).unwrap_or_default();
    if products.is_empty() {
        info!("FEATURED {}: no products, using placeholders", handle);
        return Ok(placeholder_lineup());
    }
    Ok(products.into_iter().map(CatalogProduct::from).collect())
}

/// Several featured rows fetched concurrently, in the order of `handles`.
pub async fn featured_rows(client: &StorefrontClient, handles: &[String]) -> anyhow::Result<Vec<(String, Vec<CatalogProduct>)>> {
    let rows = futures::future::try_join_all(handles.iter().map(|handle| featured_products(client, handle))).await?;
    Ok(handles.iter().cloned().zip(rows).collect())
}
