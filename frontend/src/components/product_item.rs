//! Product card for collection grids, search results and home page rows.

use common::search_result::CatalogProduct;
use dioxus::prelude::*;

#[component]
pub fn ProductItem(product: ReadSignal<CatalogProduct>) -> Element {
    let product = product.read().clone();
    let price_label = product.price_label().unwrap_or_default();

    let body = match &product {
        CatalogProduct::Storefront(summary) => rsx! {
            ProductImage {
                url: summary.featured_image.as_ref().map(|i| i.url.clone()),
                alt: summary.featured_image.as_ref().and_then(|i| i.alt_text.clone()).unwrap_or_else(|| summary.title.clone()),
            }
            if !summary.vendor.is_empty() {
                div { style: "font-size: 12px; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase;", "{summary.vendor}" }
            }
            div { style: "font-size: 14px; color: #374151;", "{summary.title}" }
            div { style: "font-size: 14px; font-weight: 500;", "{price_label}" }
        },
        CatalogProduct::Placeholder(placeholder) => rsx! {
            ProductImage { url: None, alt: placeholder.name.clone() }
            if placeholder.is_new {
                div { style: "font-size: 11px; color: #6B7280; text-transform: uppercase;", "New" }
            }
            div { style: "font-size: 12px; font-weight: 600; letter-spacing: 0.08em;", "{placeholder.brand}" }
            div { style: "font-size: 14px; color: #374151;", "{placeholder.name}" }
            div { style: "font-size: 14px; font-weight: 500;", "{price_label}" }
        },
    };

    rsx! {
        div {
            class: "x-product-item",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                min-width: 0;
            ",
            {match product.url() {
                Some(url) => rsx! {
                    Link { to: url, style: "display: flex; flex-direction: column; gap: 6px;", {body} }
                },
                None => body,
            }}
        }
    }
}

#[component]
fn ProductImage(url: Option<String>, alt: String) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                aspect-ratio: 4 / 5;
                background: #E5E7EB;
                overflow: hidden;
            ",
            if let Some(url) = url {
                img {
                    src: "{url}",
                    alt: "{alt}",
                    loading: "lazy",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
            }
        }
    }
}
