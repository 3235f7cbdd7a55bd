//! Predictive search endpoint and response shaping.

use common::{
    predictive_search::{PredictiveSearchItem, PredictiveSearchRequest, PredictiveSearchResult, url_with_tracking_params},
    search_const::PREDICTIVE_SEARCH_LIMIT,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::storefront_utils::{
    graphql_client::StorefrontClient,
    raw_types::{RawImage, RawMoney},
};

const PREDICTIVE_SEARCH_QUERY: &str = "
  fragment PredictiveArticle on Article {
    __typename
    id
    title
    handle
    blog {
      handle
    }
    image {
      url
      altText
      width
      height
    }
    trackingParameters
  }
  fragment PredictiveCollection on Collection {
    __typename
    id
    title
    handle
    image {
      url
      altText
      width
      height
    }
    trackingParameters
  }
  fragment PredictivePage on Page {
    __typename
    id
    title
    handle
    trackingParameters
  }
  fragment PredictiveProduct on Product {
    __typename
    id
    title
    handle
    trackingParameters
    selectedOrFirstAvailableVariant(
      selectedOptions: []
      ignoreUnknownOptions: true
      caseInsensitiveMatch: true
    ) {
      id
      image {
        url
        altText
        width
        height
      }
      price {
        amount
        currencyCode
      }
    }
  }
  fragment PredictiveQuery on SearchQuerySuggestion {
    __typename
    text
    styledText
    trackingParameters
  }
  query PredictiveSearch(
    $country: CountryCode
    $language: LanguageCode
    $limit: Int!
    $limitScope: PredictiveSearchLimitScope!
    $term: String!
    $types: [PredictiveSearchType!]
  ) @inContext(country: $country, language: $language) {
    predictiveSearch(
      limit: $limit,
      limitScope: $limitScope,
      query: $term,
      types: $types,
    ) {
      articles {
        ...PredictiveArticle
      }
      collections {
        ...PredictiveCollection
      }
      pages {
        ...PredictivePage
      }
      products {
        ...PredictiveProduct
      }
      queries {
        ...PredictiveQuery
      }
    }
  }
";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PredictiveSearchData {
    #[serde(rename = "predictiveSearch", default)]
    predictive_search: Option<RawPredictiveSearch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
struct RawPredictiveSearch {
    articles: Vec<RawArticle>,
    collections: Vec<RawCollection>,
    pages: Vec<RawPage>,
    products: Vec<RawProduct>,
    queries: Vec<RawQuerySuggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawHandle {
    handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    id: String,
    title: String,
    handle: String,
    blog: RawHandle,
    #[serde(default)]
    image: Option<RawImage>,
    #[serde(default)]
    tracking_parameters: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCollection {
    id: String,
    title: String,
    handle: String,
    #[serde(default)]
    image: Option<RawImage>,
    #[serde(default)]
    tracking_parameters: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    id: String,
    title: String,
    handle: String,
    #[serde(default)]
    tracking_parameters: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawVariant {
    #[serde(default)]
    image: Option<RawImage>,
    #[serde(default)]
    price: Option<RawMoney>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    id: String,
    title: String,
    handle: String,
    #[serde(default)]
    tracking_parameters: Option<String>,
    #[serde(default)]
    selected_or_first_available_variant: Option<RawVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuerySuggestion {
    text: String,
    #[serde(default)]
    tracking_parameters: Option<String>,
}

fn shape_predictive_results(term: &str, raw: RawPredictiveSearch) -> PredictiveSearchResult {
    let articles = raw.articles.into_iter().map(|article| PredictiveSearchItem {
        url: url_with_tracking_params(
            &format!("/blogs/{}/{}", article.blog.handle, article.handle),
            article.tracking_parameters.as_deref(),
            term,
        ),
        id: article.id,
        title: article.title,
        thumbnail: article.image.map(Into::into),
        price: None,
    });
    let collections = raw.collections.into_iter().map(|collection| PredictiveSearchItem {
        url: url_with_tracking_params(
            &format!("/collections/{}", collection.handle),
            collection.tracking_parameters.as_deref(),
            term,
        ),
        id: collection.id,
        title: collection.title,
        thumbnail: collection.image.map(Into::into),
        price: None,
    });
    let pages = raw.pages.into_iter().map(|page| PredictiveSearchItem {
        url: url_with_tracking_params(&format!("/pages/{}", page.handle), page.tracking_parameters.as_deref(), term),
        id: page.id,
        title: page.title,
        thumbnail: None,
        price: None,
    });
    let products = raw.products.into_iter().map(|product| {
        let variant = product.selected_or_first_available_variant;
        PredictiveSearchItem {
            url: url_with_tracking_params(
                &format!("/products/{}", product.handle),
                product.tracking_parameters.as_deref(),
                term,
            ),
            id: product.id,
            title: product.title,
            thumbnail: variant.as_ref().and_then(|v| v.image.clone()).map(Into::into),
            price: variant.and_then(|v| v.price).map(Into::into),
        }
    });
    let queries = raw.queries.into_iter().map(|suggestion| PredictiveSearchItem {
        url: url_with_tracking_params("/search", suggestion.tracking_parameters.as_deref(), &suggestion.text),
        id: suggestion.text.clone(),
        title: suggestion.text,
        thumbnail: None,
        price: None,
    });

    PredictiveSearchResult {
        queries: queries.collect(),
        products: products.collect(),
        collections: collections.collect(),
        articles: articles.collect(),
        pages: pages.collect(),
    }
}

/// Grouped search-as-you-type results for `request.term`. Source order is kept per category.
pub async fn predictive_search(client: &StorefrontClient, request: &PredictiveSearchRequest) -> anyhow::Result<PredictiveSearchResult> {
    let term = request.term.trim();
    if term.is_empty() {
        return Ok(PredictiveSearchResult::default());
    }
    let limit = if request.limit == 0 { PREDICTIVE_SEARCH_LIMIT } else { request.limit };
    let variables = json!({
        "limit": limit,
        "limitScope": "EACH",
        "term": term,
        "types": ["ARTICLE", "COLLECTION", "PAGE", "PRODUCT", "QUERY"],
    });
    let data: PredictiveSearchData = client.query("PredictiveSearch", PREDICTIVE_SEARCH_QUERY, variables).await?;
    let result = shape_predictive_results(term, data.predictive_search.unwrap_or_default());
    info!("PREDICTIVE SEARCH {:?}: {} results", term, result.total_count());
    Ok(result)
}
