//! Wire shapes shared by several storefront queries, and their conversion into `common` types.

use common::search_result::{CatalogProduct, ImageRef, Money, PageInfo, ProductSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImage {
    pub url: String,
    #[serde(rename = "altText", default)]
    pub alt_text: Option<String>,
}

impl From<RawImage> for ImageRef {
    fn from(image: RawImage) -> Self {
        ImageRef { url: image.url, alt_text: image.alt_text }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMoney {
    pub amount: String,
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
}

impl From<RawMoney> for Money {
    fn from(money: RawMoney) -> Self {
        Money { amount: money.amount, currency_code: money.currency_code }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl From<RawPageInfo> for PageInfo {
    fn from(page_info: RawPageInfo) -> Self {
        PageInfo {
            has_next_page: page_info.has_next_page,
            has_previous_page: page_info.has_previous_page,
            end_cursor: page_info.end_cursor,
            start_cursor: page_info.start_cursor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRange {
    pub min_variant_price: RawMoney,
}

/// `ProductItem` fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductItem {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub featured_image: Option<RawImage>,
    #[serde(default)]
    pub price_range: Option<RawPriceRange>,
}

impl From<RawProductItem> for CatalogProduct {
    fn from(product: RawProductItem) -> Self {
        CatalogProduct::Storefront(ProductSummary {
            id: product.id,
            handle: product.handle,
            title: product.title,
            vendor: product.vendor,
            featured_image: product.featured_image.map(ImageRef::from),
            min_price: product.price_range.map(|range| range.min_variant_price.into()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConnection<T> {
    pub nodes: Vec<T>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: RawPageInfo,
}

pub const PRODUCT_ITEM_FRAGMENT: &str = "
  fragment MoneyProductItem on MoneyV2 {
    amount
    currencyCode
  }
  fragment ProductItem on Product {
    id
    handle
    title
    vendor
    featuredImage {
      id
      altText
      url
      width
      height
    }
    priceRange {
      minVariantPrice {
        ...MoneyProductItem
      }
      maxVariantPrice {
        ...MoneyProductItem
      }
    }
  }
";
