mod support;

use backend::api::{
    collections::load_collection,
    products::{featured_products, featured_rows},
};
use common::{
    facet_catalog::FacetKind,
    search_result::CatalogProduct,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use support::{GRAPHQL_PATH, client_for};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn product_node(id: &str, handle: &str, title: &str) -> Value {
    json!({
        "id": id,
        "handle": handle,
        "title": title,
        "vendor": "Acme",
        "featuredImage": { "url": format!("https://cdn.example.com/{}.jpg", handle), "altText": title },
        "priceRange": { "minVariantPrice": { "amount": "40.0", "currencyCode": "EUR" } }
    })
}

fn collection_payload(filters: Value) -> Value {
    json!({
        "data": {
            "collection": {
                "id": "gid://shopify/Collection/1",
                "handle": "shoes",
                "title": "Shoes",
                "description": "All the shoes",
                "products": {
                    "nodes": [product_node("p1", "runner", "Runner"), product_node("p2", "loafer", "Loafer")],
                    "pageInfo": { "hasNextPage": true, "hasPreviousPage": false, "startCursor": "c0", "endCursor": "c2" },
                    "filters": filters
                }
            }
        }
    })
}

#[tokio::test]
async fn url_state_becomes_collection_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": {
                "handle": "shoes",
                "first": 20,
                "endCursor": "c2",
                "sortKey": "PRICE",
                "reverse": true,
                "filters": [{ "productVendor": "nike" }, { "price": { "min": 50.0 } }]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_payload(json!([{
            "id": "filter.p.vendor",
            "label": "Vendor",
            "type": "LIST",
            "values": [
                { "id": "filter.p.vendor.nike", "label": "Nike", "count": 3, "input": "{\"productVendor\":\"nike\"}" },
                { "id": "filter.p.vendor.puma", "label": "Puma", "count": 1, "input": { "productVendor": "puma" } }
            ]
        }]))))
        .expect(1)
        .mount(&server)
        .await;

    let page = load_collection(
        &client_for(&server),
        "shoes",
        "?filter.p.vendor=nike&sort_by=price-descending&filter.v.price.gte=50&cursor=c2&utm_source=mail",
    )
    .await
    .unwrap();

    assert_eq!(page.title, "Shoes");
    assert_eq!(page.products.iter().map(CatalogProduct::title).collect::<Vec<_>>(), vec!["Runner", "Loafer"]);
    assert_eq!(page.products[0].price_label().as_deref(), Some("€40.00"));
    assert!(page.page_info.has_next_page);
    assert_eq!(page.page_info.end_cursor.as_deref(), Some("c2"));

    assert_eq!(page.facets.facets.len(), 1);
    let vendor = &page.facets.facets[0];
    assert_eq!(vendor.kind, FacetKind::List);
    assert_eq!(vendor.facet_key(), "vendor");
    assert_eq!(vendor.values[1].input, r#"{"productVendor":"puma"}"#);
}

#[tokio::test]
async fn previous_direction_pages_back_from_the_start_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": { "handle": "shoes", "first": null, "last": 20, "startCursor": "c0", "endCursor": null }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_payload(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let page = load_collection(&client_for(&server), "shoes", "filter.p.vendor=nike&direction=previous&cursor=c0")
        .await
        .unwrap();
    assert_eq!(page.page_info.start_cursor.as_deref(), Some("c0"));
}

#[tokio::test]
async fn collection_without_configured_facets_gets_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "filters": null, "sortKey": "COLLECTION_DEFAULT", "reverse": false } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_payload(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let page = load_collection(&client_for(&server), "shoes", "").await.unwrap();
    let labels = page.facets.facets.iter().map(|f| f.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Type", "Vendor", "Availability"]);
}

#[tokio::test]
async fn missing_collection_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "collection": null } })))
        .mount(&server)
        .await;

    let err = load_collection(&client_for(&server), "nope", "").await.unwrap_err();
    assert_eq!(err.to_string(), "Collection nope not found");
}

#[tokio::test]
async fn blank_handle_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_payload(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    assert!(load_collection(&client_for(&server), "  ", "").await.is_err());
}

#[tokio::test]
async fn featured_rows_fall_back_to_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "handle": "frontpage" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "collection": { "products": { "nodes": [product_node("p9", "boot", "Boot")] } } }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "handle": "new-arrivals" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "collection": null } })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rows = featured_rows(&client, &["frontpage".to_string(), "new-arrivals".to_string()]).await.unwrap();

    assert_eq!(rows[0].0, "frontpage");
    assert_eq!(rows[0].1.iter().map(CatalogProduct::title).collect::<Vec<_>>(), vec!["Boot"]);
    assert_eq!(rows[1].0, "new-arrivals");
    assert_eq!(rows[1].1.len(), 5);
    assert!(rows[1].1.iter().all(|p| p.url().is_none()));

    let direct = featured_products(&client, "new-arrivals").await.unwrap();
    assert_eq!(direct, rows[1].1);
}
