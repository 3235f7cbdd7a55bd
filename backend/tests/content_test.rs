mod support;

use backend::api::content::{load_article, load_page};
use common::content_page::ContentKind;
use pretty_assertions::assert_eq;
use serde_json::json;
use support::{GRAPHQL_PATH, client_for};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

#[tokio::test]
async fn search_result_urls_resolve_to_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "handle": "about" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "page": { "handle": "about", "title": "About us", "body": "<p>Since 1999.</p>" } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "blogHandle": "journal", "articleHandle": "lace" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "blog": {
                "handle": "journal",
                "title": "Journal",
                "articleByHandle": {
                    "handle": "lace",
                    "title": "Lacing",
                    "contentHtml": "<p>Loop twice.</p>",
                    "publishedAt": "2024-05-01T10:00:00Z",
                    "author": { "name": "Sam" },
                    "image": null
                }
            } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = load_page(&client, "about").await.unwrap();
    assert_eq!(page.kind, ContentKind::Page);
    assert_eq!(page.body_html, "<p>Since 1999.</p>");

    let article = load_article(&client, "journal", "lace").await.unwrap();
    assert_eq!(article.blog_title(), Some("Journal"));
    assert_eq!(article.author.as_deref(), Some("Sam"));
    assert_eq!(article.published_date(), Some("2024-05-01"));
}

#[tokio::test]
async fn missing_article_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "blog": { "handle": "journal", "title": "Journal", "articleByHandle": null } }
        })))
        .mount(&server)
        .await;

    let err = load_article(&client_for(&server), "journal", "gone").await.unwrap_err();
    assert_eq!(err.to_string(), "Article journal/gone not found");
}
