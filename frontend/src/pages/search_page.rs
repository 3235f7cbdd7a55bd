use common::{
    pagination::{PageCursor, next_page_query, previous_page_query},
    search_result::SearchResultLink,
};
use dioxus::prelude::*;

use crate::{
    api::storefront_api::regular_search,
    components::{
        error_boundary::ComponentErrorDisplay,
        page_links::PageLinks,
        product_item::ProductItem,
        suspend_boundary::{LoadingSkeleton, SuspendWrapper},
    },
    data_definitions::url_query::UrlQuery,
    routes::Route,
};

fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Full results page for `?q=`.
#[component]
pub fn SearchPage(query: UrlQuery) -> Element {
    let term = query.search_term();
    rsx! {
        Title { "Storefront - Search: {title_ellipsis(term.clone())}" }
        div {
            id: "x-search-page",
            style: "padding: 32px 40px; box-sizing: border-box; width: 100%;",
            SearchTermInput { term: term.clone() }
            SuspendWrapper {
                skeleton: LoadingSkeleton::ProductGrid { cards: 4 },
                SearchResultsRoot { query: query.0.clone() }
            }
        }
    }
}

#[component]
fn SearchTermInput(term: ReadSignal<String>) -> Element {
    let mut typed = use_signal(|| term.read().clone());
    // navigation does not reset signals, so follow the url
    use_effect(move || typed.set(term.read().clone()));

    rsx! {
        input {
            r#type: "search",
            placeholder: "Search",
            value: "{typed}",
            style: "width: 100%; max-width: 520px; border: 1px solid #D1D5DB; padding: 10px 14px; font-size: 16px; margin-bottom: 24px;",
            oninput: move |e: Event<FormData>| typed.set(e.value()),
            onkeydown: move |e: Event<KeyboardData>| {
                if e.key() == Key::Enter {
                    navigator().push(Route::search_page_for_term(typed.read().trim()));
                }
            },
        }
    }
}

#[component]
fn SearchResultsRoot(query: ReadSignal<String>) -> Element {
    let result = use_resource(move || {
        let query = query.read().clone();
        let term = UrlQuery(query.clone()).search_term();
        regular_search(term, PageCursor::from_query_string(&query))
    }).suspend()?.cloned();
    let result = match result {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Ok(result) => result,
    };

    if result.term.is_empty() {
        return rsx! {
            p { style: "color: #6B7280;", "Enter a search term to find products, articles and pages." }
        };
    }
    if result.is_empty() {
        return rsx! {
            p { style: "color: #6B7280; padding: 32px 0;", "No results found for “{result.term}”." }
        };
    }

    let previous = previous_page_query(&query.read(), &result.page_info).map(|q| Route::SearchPage { query: UrlQuery(q) });
    let next = next_page_query(&query.read(), &result.page_info).map(|q| Route::SearchPage { query: UrlQuery(q) });

    rsx! {
        p { style: "color: #4B5563; margin: 0 0 24px 0;", "{result.total} results for “{result.term}”" }

        if !result.products.is_empty() {
            h2 { style: "font-size: 16px; text-transform: uppercase; letter-spacing: 0.08em;", "Products" }
            div {
                class: "x-product-grid",
                for product in result.products.iter() {
                    ProductItem { key: "{product.key()}", product: product.clone() }
                }
            }
        }
        PageLinks { previous, next }

        ResultLinkList { heading: "Articles", links: result.articles.clone() }
        ResultLinkList { heading: "Pages", links: result.pages.clone() }
    }
}

#[component]
fn ResultLinkList(heading: String, links: Vec<SearchResultLink>) -> Element {
    if links.is_empty() {
        return rsx! {};
    }
    rsx! {
        h2 { style: "font-size: 16px; text-transform: uppercase; letter-spacing: 0.08em; margin-top: 32px;", "{heading}" }
        ul {
            style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 8px;",
            for link in links.iter() {
                li { key: "{link.id}", Link { to: link.url.clone(), style: "text-decoration: underline;", "{link.title}" } }
            }
        }
    }
}
