use common::product_detail::{ProductDetail, ProductOption, option_selection_query};
use dioxus::prelude::*;

use crate::{
    api::storefront_api::load_product,
    components::{
        error_boundary::ComponentErrorDisplay,
        product_item::ProductItem,
        suspend_boundary::{LoadingSkeleton, SuspendWrapper},
    },
    data_definitions::url_query::UrlQuery,
    routes::Route,
};

/// Product detail; the selected variant is addressed by option params (`?Size=M`).
#[component]
pub fn ProductPage(handle: String, query: UrlQuery) -> Element {
    rsx! {
        div {
            id: "x-product-page",
            style: "padding: 32px 40px; box-sizing: border-box; width: 100%;",
            SuspendWrapper {
                skeleton: LoadingSkeleton::ProductDetail,
                ProductPageRoot { handle: handle.clone(), query: query.0.clone() }
            }
        }
    }
}

#[component]
fn ProductPageRoot(handle: ReadSignal<String>, query: ReadSignal<String>) -> Element {
    let product = use_resource(move || load_product(handle.read().clone(), query.read().clone())).suspend()?.cloned();
    let product = match product {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Ok(product) => product,
    };
    let variant = product.selected_variant.clone();
    let image = variant
        .as_ref()
        .and_then(|v| v.image.clone())
        .or_else(|| product.images.first().cloned());

    rsx! {
        Title { "Storefront - {product.title}" }
        div {
            class: "x-product-detail",
            div {
                style: "width: 100%; aspect-ratio: 4 / 5; background: #E5E7EB; overflow: hidden;",
                if let Some(image) = image {
                    img {
                        src: "{image.url}",
                        alt: "{image.alt_text.clone().unwrap_or_else(|| product.title.clone())}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                if !product.vendor.is_empty() {
                    div { style: "font-size: 12px; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase;", "{product.vendor}" }
                }
                h1 { style: "margin: 0; font-size: 28px; font-weight: 500;", "{product.title}" }
                {match variant.as_ref() {
                    Some(variant) => rsx! {
                        div {
                            style: "display: flex; gap: 10px; align-items: baseline; font-size: 18px;",
                            span { "{variant.price}" }
                            if let Some(compare_at) = variant.compare_at_price.as_ref() {
                                span { style: "color: #9CA3AF; font-size: 15px; text-decoration: line-through;", "{compare_at}" }
                            }
                        }
                        if !variant.available_for_sale {
                            div { style: "color: #B91C1C; font-size: 13px; text-transform: uppercase;", "Sold out" }
                        }
                    },
                    None => rsx! {
                        div { style: "color: #6B7280;", "Unavailable" }
                    },
                }}
                for option in product.selectable_options() {
                    OptionPicker {
                        key: "{option.name}",
                        product: product.clone(),
                        option: option.clone(),
                        query: query.read().clone(),
                    }
                }
                div {
                    class: "x-rich-text",
                    style: "color: #374151; line-height: 1.6;",
                    dangerous_inner_html: "{product.description_html}",
                }
            }
        }

        if !product.related.is_empty() {
            h2 { style: "margin: 48px 0 16px 0; font-size: 16px; text-transform: uppercase; letter-spacing: 0.08em;", "You may also like" }
            div {
                class: "x-product-grid",
                for related in product.related.iter() {
                    ProductItem { key: "{related.key()}", product: related.clone() }
                }
            }
        }
    }
}

/// One row of option values; unavailable values stay clickable but are struck through.
#[component]
fn OptionPicker(product: ProductDetail, option: ProductOption, query: String) -> Element {
    let current = product.selected_variant.as_ref().map(|v| v.selected_options.clone()).unwrap_or_default();
    rsx! {
        fieldset {
            style: "border: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px;",
            legend { style: "font-size: 13px; font-weight: 500; margin-bottom: 8px;", "{option.name}" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for value in option.values.iter() {
                    OptionValueLink {
                        key: "{value.name}",
                        to: Route::product(&product.handle, option_selection_query(&query, &current, &option.name, &value.name)),
                        label: value.name.clone(),
                        selected: product.is_selected(&option.name, &value.name),
                        available: value.available,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionValueLink(to: Route, label: String, selected: bool, available: bool) -> Element {
    let border = if selected { "#111827" } else { "#D1D5DB" };
    let (opacity, decoration) = if available { ("1", "none") } else { ("0.5", "line-through") };
    rsx! {
        Link {
            to,
            style: "padding: 8px 14px; font-size: 13px; border: 1px solid {border}; opacity: {opacity}; text-decoration: {decoration};",
            "{label}"
        }
    }
}
