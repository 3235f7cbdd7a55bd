//! Full search results page: products, articles and pages for one term.

use common::{
    pagination::PageCursor,
    search_const::SEARCH_PAGE_SIZE,
    search_result::{CatalogProduct, RegularSearchResult, SearchResultLink},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::storefront_utils::{
    graphql_client::StorefrontClient,
    raw_types::{PRODUCT_ITEM_FRAGMENT, RawConnection, RawProductItem},
};

const REGULAR_SEARCH_QUERY: &str = "
  query RegularSearch(
    $country: CountryCode
    $endCursor: String
    $first: Int
    $language: LanguageCode
    $last: Int
    $linkLimit: Int
    $startCursor: String
    $term: String!
  ) @inContext(country: $country, language: $language) {
    articles: search(
      query: $term,
      types: [ARTICLE],
      first: $linkLimit,
    ) {
      nodes {
        ...on Article {
          id
          handle
          title
          blog {
            handle
          }
        }
      }
    }
    pages: search(
      query: $term,
      types: [PAGE],
      first: $linkLimit,
    ) {
      nodes {
        ...on Page {
          id
          handle
          title
        }
      }
    }
    products: search(
      after: $endCursor,
      before: $startCursor,
      first: $first,
      last: $last,
      query: $term,
      sortKey: RELEVANCE,
      types: [PRODUCT],
      unavailableProducts: HIDE,
    ) {
      nodes {
        ...on Product {
          ...ProductItem
        }
      }
      pageInfo {
        hasNextPage
        hasPreviousPage
        startCursor
        endCursor
      }
      totalCount
    }
  }
";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegularSearchData {
    articles: RawConnection<RawArticleNode>,
    pages: RawConnection<RawPageNode>,
    products: RawProductSearch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBlog {
    handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawArticleNode {
    id: String,
    handle: String,
    title: String,
    blog: RawBlog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPageNode {
    id: String,
    handle: String,
    title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProductSearch {
    #[serde(flatten)]
    connection: RawConnection<RawProductItem>,
    #[serde(rename = "totalCount", default)]
    total_count: u64,
}

/// Products page through `cursor`; articles and pages always show their first hits.
pub async fn regular_search(client: &StorefrontClient, term: &str, cursor: &PageCursor) -> anyhow::Result<RegularSearchResult> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(RegularSearchResult::default());
    }
    let query = format!("{}{}", PRODUCT_ITEM_FRAGMENT, REGULAR_SEARCH_QUERY);
    let page = cursor.connection_args(SEARCH_PAGE_SIZE);
    let variables = json!({
        "term": term,
        "first": page.first,
        "last": page.last,
        "startCursor": page.start_cursor,
        "endCursor": page.end_cursor,
        "linkLimit": SEARCH_PAGE_SIZE,
    });
    let data: RegularSearchData = client.query("RegularSearch", &query, variables).await?;

    let articles = data
        .articles
        .nodes
        .into_iter()
        .map(|article| SearchResultLink {
            url: format!("/blogs/{}/{}", article.blog.handle, article.handle),
            id: article.id,
            title: article.title,
        })
        .collect::<Vec<_>>();
    let pages = data
        .pages
        .nodes
        .into_iter()
        .map(|page| SearchResultLink {
            url: format!("/pages/{}", page.handle),
            id: page.id,
            title: page.title,
        })
        .collect::<Vec<_>>();
    let total = data.products.total_count + articles.len() as u64 + pages.len() as u64;

    Ok(RegularSearchResult {
        term: term.to_string(),
        products: data.products.connection.nodes.into_iter().map(CatalogProduct::from).collect(),
        articles,
        pages,
        page_info: data.products.connection.page_info.into(),
        total,
    })
}
