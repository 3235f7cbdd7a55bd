use common::pagination::{next_page_query, previous_page_query};
use dioxus::prelude::*;

use crate::{
    api::storefront_api::load_collection,
    components::{
        collection_filters::CollectionFilters,
        error_boundary::ComponentErrorDisplay,
        page_links::PageLinks,
        product_item::ProductItem,
        suspend_boundary::{LoadingSkeleton, SuspendWrapper},
    },
    data_definitions::url_query::UrlQuery,
    routes::Route,
};

/// Collection listing; filter, sort and paging state live in the query string.
#[component]
pub fn CollectionPage(handle: String, query: UrlQuery) -> Element {
    rsx! {
        Title { "Storefront - {handle}" }
        div {
            id: "x-collection-page",
            style: "padding: 32px 40px; box-sizing: border-box; width: 100%;",
            SuspendWrapper {
                skeleton: LoadingSkeleton::ProductGrid { cards: 8 },
                CollectionPageRoot { handle: handle.clone(), query: query.0.clone() }
            }
        }
    }
}

#[component]
fn CollectionPageRoot(handle: ReadSignal<String>, query: ReadSignal<String>) -> Element {
    let page = use_resource(move || load_collection(handle.read().clone(), query.read().clone())).suspend()?.cloned();
    let page = match page {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Ok(page) => page,
    };
    let previous = previous_page_query(&query.read(), &page.page_info).map(|q| Route::collection(&page.handle, q));
    let next = next_page_query(&query.read(), &page.page_info).map(|q| Route::collection(&page.handle, q));

    rsx! {
        h1 { style: "margin: 0 0 8px 0; font-size: 28px; font-weight: 500;", "{page.title}" }
        if !page.description.is_empty() {
            p { style: "margin: 0 0 24px 0; color: #4B5563; max-width: 720px;", "{page.description}" }
        }

        CollectionFilters { handle, query, facets: page.facets.clone() }

        if page.products.is_empty() {
            p { style: "color: #6B7280; padding: 32px 0;", "No products match these filters." }
        } else {
            div {
                class: "x-product-grid",
                for product in page.products.iter() {
                    ProductItem { key: "{product.key()}", product: product.clone() }
                }
            }
        }

        PageLinks { previous, next }
    }
}
