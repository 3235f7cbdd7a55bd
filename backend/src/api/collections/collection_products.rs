//! Collection page loader: products, available facets and paging for one query string.

use common::{
    facet_catalog::{FacetCatalog, FacetDefinition, FacetKind, FacetValue},
    facet_filters::decode_from_query_string,
    pagination::PageCursor,
    search_const::COLLECTION_PAGE_SIZE,
    search_result::{CatalogProduct, CollectionPage},
    sort_selection::SortSelection,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    api::collections::product_filters::product_filters,
    storefront_utils::{
        graphql_client::StorefrontClient,
        raw_types::{PRODUCT_ITEM_FRAGMENT, RawConnection, RawProductItem},
    },
};

const COLLECTION_QUERY: &str = "
  query Collection(
    $handle: String!
    $country: CountryCode
    $language: LanguageCode
    $first: Int
    $last: Int
    $startCursor: String
    $endCursor: String
    $sortKey: ProductCollectionSortKeys
    $reverse: Boolean
    $filters: [ProductFilter!]
  ) @inContext(country: $country, language: $language) {
    collection(handle: $handle) {
      id
      handle
      title
      description
      products(
        first: $first,
        last: $last,
        before: $startCursor,
        after: $endCursor,
        sortKey: $sortKey,
        reverse: $reverse,
        filters: $filters
      ) {
        nodes {
          ...ProductItem
        }
        pageInfo {
          hasPreviousPage
          hasNextPage
          endCursor
          startCursor
        }
        filters {
          id
          label
          type
          values {
            id
            label
            count
            input
          }
        }
      }
    }
  }
";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CollectionData {
    #[serde(default)]
    collection: Option<RawCollection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCollection {
    handle: String,
    title: String,
    #[serde(default)]
    description: String,
    products: RawCollectionProducts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCollectionProducts {
    #[serde(flatten)]
    connection: RawConnection<RawProductItem>,
    #[serde(default)]
    filters: Vec<RawFilter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFilter {
    id: String,
    label: String,
    #[serde(rename = "type")]
    filter_type: String,
    #[serde(default)]
    values: Vec<RawFilterValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFilterValue {
    id: String,
    label: String,
    #[serde(default)]
    count: u64,
    input: Value,
}

/// The platform sends `input` as JSON text, but some gateways hand back the decoded object.
fn filter_input_text(input: Value) -> String {
    match input {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl From<RawFilter> for FacetDefinition {
    fn from(filter: RawFilter) -> Self {
        FacetDefinition {
            kind: FacetKind::from_platform(&filter.filter_type),
            id: filter.id,
            label: filter.label,
            values: filter
                .values
                .into_iter()
                .map(|value| FacetValue {
                    id: value.id,
                    label: value.label,
                    count: value.count,
                    input: filter_input_text(value.input),
                })
                .collect(),
        }
    }
}

fn list_facet(id: &str, label: &str, values: &[(&str, &str, u64, &str)]) -> FacetDefinition {
    FacetDefinition {
        id: id.to_string(),
        label: label.to_string(),
        kind: FacetKind::List,
        values: values
            .iter()
            .map(|(value_id, value_label, count, input)| FacetValue {
                id: value_id.to_string(),
                label: value_label.to_string(),
                count: *count,
                input: input.to_string(),
            })
            .collect(),
    }
}

/// Facets offered when the store has not configured any for the collection.
pub fn placeholder_facet_catalog() -> FacetCatalog {
    FacetCatalog {
        facets: vec![
            list_facet("filter.p.type", "Type", &[
                ("filter.p.typeshoes", "Shoes", 15, r#"{"productType":"shoes"}"#),
                ("filter.p.typeclothing", "Clothing", 25, r#"{"productType":"clothing"}"#),
                ("filter.p.typeaccessories", "Accessories", 10, r#"{"productType":"accessories"}"#),
                ("filter.p.typebags", "Bags", 12, r#"{"productType":"bags"}"#),
                ("filter.p.typejewelry", "Jewelry", 8, r#"{"productType":"jewelry"}"#),
            ]),
            list_facet("filter.p.vendor", "Vendor", &[
                ("filter.p.vendornike", "Nike", 8, r#"{"productVendor":"nike"}"#),
                ("filter.p.vendoradidas", "Adidas", 12, r#"{"productVendor":"adidas"}"#),
                ("filter.p.vendorpuma", "Puma", 6, r#"{"productVendor":"puma"}"#),
                ("filter.p.vendorunder-armour", "Under Armour", 4, r#"{"productVendor":"under-armour"}"#),
                ("filter.p.vendornew-balance", "New Balance", 7, r#"{"productVendor":"new-balance"}"#),
            ]),
            list_facet("filter.v.availability", "Availability", &[
                ("filter.v.availability0", "Out of Stock", 3, r#"{"available":false}"#),
                ("filter.v.availability1", "In Stock", 1, r#"{"available":true}"#),
            ]),
        ],
    }
}

/// Loads one page of `handle` for the filters, sort and paging encoded in `query`.
pub async fn load_collection(client: &StorefrontClient, handle: &str, query: &str) -> anyhow::Result<CollectionPage> {
    let handle = handle.trim();
    if handle.is_empty() {
        anyhow::bail!("Collection handle is empty");
    }
    let active_filters = decode_from_query_string(query);
    let sort = SortSelection::from_query_string(query);
    let filters = product_filters(&active_filters);
    let page = PageCursor::from_query_string(query).connection_args(COLLECTION_PAGE_SIZE);
    let variables = json!({
        "handle": handle,
        "first": page.first,
        "last": page.last,
        "startCursor": page.start_cursor,
        "endCursor": page.end_cursor,
        "sortKey": sort.sort_key(),
        "reverse": sort.reverse(),
        "filters": if filters.is_empty() { Value::Null } else { Value::Array(filters) },
    });
    let query_text = format!("{}{}", PRODUCT_ITEM_FRAGMENT, COLLECTION_QUERY);
    let data: CollectionData = client.query("Collection", &query_text, variables).await?;
    let Some(collection) = data.collection else {
        anyhow::bail!("Collection {} not found", handle);
    };

    let facets = if collection.products.filters.is_empty() {
        placeholder_facet_catalog()
    } else {
        FacetCatalog {
            facets: collection.products.filters.into_iter().map(FacetDefinition::from).collect(),
        }
    };
    let products = collection
        .products
        .connection
        .nodes
        .into_iter()
        .map(CatalogProduct::from)
        .collect::<Vec<_>>();
    info!(
        "COLLECTION {}: {} products, {} active filters, sort {}",
        handle,
        products.len(),
        active_filters.active_count(),
        sort.param_value()
    );

    Ok(CollectionPage {
        handle: collection.handle,
        title: collection.title,
        description: collection.description,
        products,
        facets,
        page_info: collection.products.connection.page_info.into(),
    })
}
