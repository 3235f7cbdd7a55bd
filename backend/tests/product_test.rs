mod support;

use backend::api::products::load_product;
use common::{product_detail::SelectedOption, search_result::CatalogProduct};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use support::{GRAPHQL_PATH, client_for};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, body_string_contains, method, path},
};

fn product_payload() -> Value {
    json!({
        "data": {
            "product": {
                "id": "gid://shopify/Product/7",
                "title": "Trail Runner",
                "vendor": "Acme",
                "handle": "trail-runner",
                "descriptionHtml": "<p>Grippy.</p>",
                "images": { "nodes": [{ "id": "i1", "url": "https://cdn.example.com/trail.jpg", "altText": null }] },
                "options": [{
                    "name": "Size",
                    "optionValues": [
                        { "name": "42", "firstSelectableVariant": { "availableForSale": true } },
                        { "name": "43", "firstSelectableVariant": { "availableForSale": false } },
                        { "name": "44", "firstSelectableVariant": null }
                    ]
                }],
                "selectedOrFirstAvailableVariant": {
                    "id": "gid://shopify/ProductVariant/71",
                    "title": "43",
                    "availableForSale": false,
                    "price": { "amount": "90.0", "currencyCode": "EUR" },
                    "compareAtPrice": { "amount": "120.0", "currencyCode": "EUR" },
                    "image": null,
                    "selectedOptions": [{ "name": "Size", "value": "43" }]
                }
            }
        }
    })
}

fn related_payload() -> Value {
    json!({
        "data": {
            "productRecommendations": [{
                "id": "p8",
                "handle": "road-runner",
                "title": "Road Runner",
                "vendor": "Acme",
                "featuredImage": null,
                "priceRange": { "minVariantPrice": { "amount": "80.0", "currencyCode": "EUR" } }
            }]
        }
    })
}

#[tokio::test]
async fn option_params_select_the_variant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": { "handle": "trail-runner", "selectedOptions": [{ "name": "Size", "value": "43" }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_payload()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("productRecommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(related_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let product = load_product(&client_for(&server), "trail-runner", "?Size=43&_pos=2&q=runner").await.unwrap();

    assert_eq!(product.title, "Trail Runner");
    assert_eq!(product.images.len(), 1);
    let variant = product.selected_variant.as_ref().unwrap();
    assert_eq!(variant.selected_options, vec![SelectedOption { name: "Size".to_string(), value: "43".to_string() }]);
    assert!(!variant.available_for_sale);
    assert!(product.is_selected("Size", "43"));
    let availability = product.options[0].values.iter().map(|v| v.available).collect::<Vec<_>>();
    assert_eq!(availability, vec![true, false, false]);
    assert_eq!(product.related.iter().map(CatalogProduct::title).collect::<Vec<_>>(), vec!["Road Runner"]);
}

#[tokio::test]
async fn failed_recommendations_leave_the_row_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("productRecommendations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "handle": "trail-runner", "selectedOptions": [] } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_payload()))
        .mount(&server)
        .await;

    let product = load_product(&client_for(&server), "trail-runner", "").await.unwrap();
    assert_eq!(product.handle, "trail-runner");
    assert!(product.related.is_empty());
}

#[tokio::test]
async fn missing_product_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("productRecommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "productRecommendations": null } })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "product": null } })))
        .mount(&server)
        .await;

    let err = load_product(&client_for(&server), "gone", "").await.unwrap_err();
    assert_eq!(err.to_string(), "Product gone not found");
}
