use common::{
    content_page::{ContentKind, ContentPage},
    search_result::ImageRef,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::storefront_utils::{graphql_client::StorefrontClient, raw_types::RawImage};

const PAGE_QUERY: &str = "
  query Page($country: CountryCode, $language: LanguageCode, $handle: String!)
  @inContext(language: $language, country: $country) {
    page(handle: $handle) {
      handle
      title
      body
    }
  }
";

const ARTICLE_QUERY: &str = "
  query Article(
    $articleHandle: String!
    $blogHandle: String!
    $country: CountryCode
    $language: LanguageCode
  ) @inContext(language: $language, country: $country) {
    blog(handle: $blogHandle) {
      handle
      title
      articleByHandle(handle: $articleHandle) {
        handle
        title
        contentHtml
        publishedAt
        author: authorV2 {
          name
        }
        image {
          url
          altText
        }
      }
    }
  }
";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PageData {
    #[serde(default)]
    page: Option<RawPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPage {
    handle: String,
    title: String,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArticleData {
    #[serde(default)]
    blog: Option<RawBlog>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlog {
    handle: String,
    title: String,
    #[serde(default)]
    article_by_handle: Option<RawArticle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    handle: String,
    title: String,
    #[serde(default)]
    content_html: String,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    author: Option<RawAuthor>,
    #[serde(default)]
    image: Option<RawImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAuthor {
    name: String,
}

pub async fn load_page(client: &StorefrontClient, handle: &str) -> anyhow::Result<ContentPage> {
    let data: PageData = client.query("Page", PAGE_QUERY, json!({ "handle": handle })).await?;
    let Some(page) = data.page else {
        anyhow::bail!("Page {} not found", handle);
    };
    info!("PAGE {}: {} bytes", page.handle, page.body.len());
    Ok(ContentPage {
        kind: ContentKind::Page,
        handle: page.handle,
        title: page.title,
        body_html: page.body,
        author: None,
        published_at: None,
        image: None,
    })
}

/// A missing blog and a missing article are the same "not found" to the reader.
pub async fn load_article(client: &StorefrontClient, blog_handle: &str, article_handle: &str) -> anyhow::Result<ContentPage> {
    let variables = json!({ "blogHandle": blog_handle, "articleHandle": article_handle });
    let data: ArticleData = client.query("Article", ARTICLE_QUERY, variables).await?;
    let Some((blog, article)) = data.blog.and_then(|mut blog| {
        let article = blog.article_by_handle.take()?;
        Some((blog, article))
    }) else {
        anyhow::bail!("Article {}/{} not found", blog_handle, article_handle);
    };
    info!("ARTICLE {}/{}: {} bytes", blog.handle, article.handle, article.content_html.len());
    Ok(ContentPage {
        kind: ContentKind::Article { blog_handle: blog.handle, blog_title: blog.title },
        handle: article.handle,
        title: article.title,
        body_html: article.content_html,
        author: article.author.map(|a| a.name),
        published_at: article.published_at,
        image: article.image.map(ImageRef::from),
    })
}
