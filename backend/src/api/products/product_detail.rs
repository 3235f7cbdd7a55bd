//! Product page loader: the product, its selected variant and recommendations.

use common::{
    product_detail::{ProductDetail, ProductOption, ProductOptionValue, ProductVariant, SelectedOption, selected_options_from_query},
    search_result::{CatalogProduct, ImageRef},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::storefront_utils::{
    graphql_client::StorefrontClient,
    raw_types::{PRODUCT_ITEM_FRAGMENT, RawImage, RawMoney, RawProductItem},
};

const PRODUCT_QUERY: &str = "
  fragment ProductVariant on ProductVariant {
    availableForSale
    compareAtPrice {
      amount
      currencyCode
    }
    id
    image {
      id
      url
      altText
      width
      height
    }
    price {
      amount
      currencyCode
    }
    selectedOptions {
      name
      value
    }
    title
  }
  query Product(
    $country: CountryCode
    $handle: String!
    $language: LanguageCode
    $selectedOptions: [SelectedOptionInput!]!
  ) @inContext(country: $country, language: $language) {
    product(handle: $handle) {
      id
      title
      vendor
      handle
      descriptionHtml
      images(first: 25) {
        nodes {
          id
          altText
          url
        }
      }
      options {
        name
        optionValues {
          name
          firstSelectableVariant {
            availableForSale
          }
        }
      }
      selectedOrFirstAvailableVariant(selectedOptions: $selectedOptions, ignoreUnknownOptions: true, caseInsensitiveMatch: true) {
        ...ProductVariant
      }
    }
  }
";

const RELATED_PRODUCTS_QUERY: &str = "
  query RelatedProducts($handle: String!) {
    productRecommendations(productHandle: $handle) {
      ...ProductItem
    }
  }
";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductData {
    #[serde(default)]
    product: Option<RawProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    id: String,
    title: String,
    #[serde(default)]
    vendor: String,
    handle: String,
    #[serde(default)]
    description_html: String,
    #[serde(default)]
    images: Option<RawImageNodes>,
    #[serde(default)]
    options: Vec<RawOption>,
    #[serde(default)]
    selected_or_first_available_variant: Option<RawVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawImageNodes {
    nodes: Vec<RawImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOption {
    name: String,
    #[serde(default)]
    option_values: Vec<RawOptionValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptionValue {
    name: String,
    #[serde(default)]
    first_selectable_variant: Option<RawAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAvailability {
    #[serde(default)]
    available_for_sale: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVariant {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    available_for_sale: bool,
    price: RawMoney,
    #[serde(default)]
    compare_at_price: Option<RawMoney>,
    #[serde(default)]
    image: Option<RawImage>,
    #[serde(default)]
    selected_options: Vec<RawSelectedOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSelectedOption {
    name: String,
    value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelatedProductsData {
    #[serde(default)]
    product_recommendations: Option<Vec<RawProductItem>>,
}

impl From<RawVariant> for ProductVariant {
    fn from(variant: RawVariant) -> Self {
        ProductVariant {
            id: variant.id,
            title: variant.title,
            available_for_sale: variant.available_for_sale,
            price: variant.price.into(),
            compare_at_price: variant.compare_at_price.map(Into::into),
            image: variant.image.map(ImageRef::from),
            selected_options: variant
                .selected_options
                .into_iter()
                .map(|o| SelectedOption { name: o.name, value: o.value })
                .collect(),
        }
    }
}

impl From<RawOption> for ProductOption {
    fn from(option: RawOption) -> Self {
        ProductOption {
            name: option.name,
            values: option
                .option_values
                .into_iter()
                .map(|value| ProductOptionValue {
                    available: value.first_selectable_variant.map(|v| v.available_for_sale).unwrap_or(false),
                    name: value.name,
                })
                .collect(),
        }
    }
}

async fn related_products(client: &StorefrontClient, handle: &str) -> anyhow::Result<Vec<CatalogProduct>> {
    let query_text = format!("{}{}", PRODUCT_ITEM_FRAGMENT, RELATED_PRODUCTS_QUERY);
    let data: RelatedProductsData = client.query("RelatedProducts", &query_text, json!({ "handle": handle })).await?;
    Ok(data
        .product_recommendations
        .unwrap_or_default()
        .into_iter()
        .map(CatalogProduct::from)
        .collect())
}

/// Loads `handle` with the variant picked by the option parameters in `query`.
/// Recommendations are best effort: their failure leaves the list empty.
pub async fn load_product(client: &StorefrontClient, handle: &str, query: &str) -> anyhow::Result<ProductDetail> {
    let handle = handle.trim();
    if handle.is_empty() {
        anyhow::bail!("Product handle is empty");
    }
    let selected_options = selected_options_from_query(query);
    let variables = json!({
        "handle": handle,
        "selectedOptions": selected_options,
    });
    let (product, related) = futures::join!(
        client.query::<ProductData>("Product", PRODUCT_QUERY, variables),
        related_products(client, handle),
    );
    let Some(product) = product?.product else {
        anyhow::bail!("Product {} not found", handle);
    };
    let related = related.unwrap_or_else(|e| {
        warn!("PRODUCT {}: recommendations failed: {}", handle, e);
        Vec::new()
    });
    info!("PRODUCT {}: {} options selected, {} related", handle, selected_options.len(), related.len());

    Ok(ProductDetail {
        id: product.id,
        handle: product.handle,
        title: product.title,
        vendor: product.vendor,
        description_html: product.description_html,
        images: product.images.map(|i| i.nodes).unwrap_or_default().into_iter().map(ImageRef::from).collect(),
        options: product.options.into_iter().map(ProductOption::from).collect(),
        selected_variant: product.selected_or_first_available_variant.map(ProductVariant::from),
        related,
    })
}
