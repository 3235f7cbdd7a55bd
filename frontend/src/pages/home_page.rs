use dioxus::prelude::*;

use crate::api::storefront_api::featured_rows;
use crate::components::{error_boundary::ComponentErrorDisplay, product_item::ProductItem, suspend_boundary::{LoadingSkeleton, SuspendWrapper}};
use crate::routes::Route;

const FEATURED_ROWS: [(&str, &str); 2] = [("frontpage", "Featured"), ("new-arrivals", "New Arrivals")];

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Storefront - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 40px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",

            HeroBanner {}
            SuspendWrapper { skeleton: LoadingSkeleton::ProductGrid { cards: 5 }, FeaturedRows {} }
        }
    }
}

#[component]
fn HeroBanner() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                padding: 48px 32px;
                background: #111827;
                color: white;
            ",
            div { style: "font-size: 40px; font-weight: 500; letter-spacing: -0.02em;", "New season, new arrivals" }
            div { style: "font-size: 18px; color: rgba(255,255,255,0.8); max-width: 560px;", "Browse the latest drops from the brands we carry." }
            div {
                style: "display:flex; flex-direction: row;",
                Link {
                    to: Route::collection("new-arrivals", String::new()),
                    style: "background: white; color: #111827; padding: 10px 18px; font-size: 14px; text-transform: uppercase; letter-spacing: 0.08em;",
                    "Shop now"
                }
            }
        }
    }
}

#[component]
fn FeaturedRows() -> Element {
    let rows = use_resource(move || {
        featured_rows(FEATURED_ROWS.iter().map(|(handle, _)| handle.to_string()).collect())
    }).suspend()?.cloned();
    let rows = match rows {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Ok(rows) => rows,
    };

    rsx! {
        for (handle, products) in rows {
            div {
                key: "{handle}",
                style: "display:flex; flex-direction: column; gap: 16px;",
                div {
                    style: "display:flex; flex-direction: row; align-items: baseline; justify-content: space-between;",
                    h2 {
                        style: "margin: 0; font-size: 20px; font-weight: 500; text-transform: uppercase; letter-spacing: 0.08em;",
                        "{row_title(&handle)}"
                    }
                    Link { to: Route::collection(&handle, String::new()), style: "font-size: 13px; text-decoration: underline;", "View all" }
                }
                div {
                    class: "x-product-grid",
                    for product in products {
                        ProductItem { key: "{product.key()}", product: product.clone() }
                    }
                }
            }
        }
    }
}

fn row_title(handle: &str) -> &'static str {
    FEATURED_ROWS
        .iter()
        .find(|(h, _)| *h == handle)
        .map(|(_, title)| *title)
        .unwrap_or("Featured")
}
