mod support;

use serde::Deserialize;
use serde_json::json;
use support::{GRAPHQL_PATH, TEST_TOKEN, client_for};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

#[derive(Debug, Deserialize, PartialEq)]
struct ShopName {
    shop: Shop,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Shop {
    name: String,
}

#[tokio::test]
async fn query_sends_token_and_variables_and_returns_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Storefront-Access-Token", TEST_TOKEN))
        .and(body_partial_json(json!({ "variables": { "first": 3 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "shop": { "name": "Anticommerce" } } })))
        .expect(1)
        .mount(&server)
        .await;

    let data: ShopName = client_for(&server)
        .query("Shop", "query Shop { shop { name } }", json!({ "first": 3 }))
        .await
        .expect("query should succeed");
    assert_eq!(data, ShopName { shop: Shop { name: "Anticommerce".to_string() } });
}

#[tokio::test]
async fn graphql_errors_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Field 'nope' doesn't exist on type 'Shop'" }, { "message": "second" }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query::<ShopName>("Shop", "query Shop { shop { nope } }", json!({}))
        .await
        .expect_err("errors must fail the query");
    let message = err.to_string();
    assert!(message.contains("Field 'nope' doesn't exist"), "{}", message);
    assert!(message.contains("second"), "{}", message);
}

#[tokio::test]
async fn http_failures_are_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query::<ShopName>("Shop", "query Shop { shop { name } }", json!({}))
        .await
        .expect_err("502 must fail the query");
    let message = err.to_string();
    assert!(message.contains("502"), "{}", message);
    assert!(message.contains("upstream unavailable"), "{}", message);
}

#[tokio::test]
async fn missing_data_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .query::<ShopName>("Shop", "query Shop { shop { name } }", json!({}))
        .await;
    assert!(result.is_err());
}
