//! Shop pages and blog articles linked from search results.

use common::content_page::ContentPage;
use dioxus::prelude::*;

use crate::{
    api::storefront_api::{load_article, load_page},
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
};

#[component]
pub fn ShopPage(handle: String) -> Element {
    rsx! {
        div {
            id: "x-content-page",
            style: "padding: 32px 40px; box-sizing: border-box; width: 100%;",
            SuspendWrapper { ShopPageRoot { handle: handle.clone() } }
        }
    }
}

#[component]
fn ShopPageRoot(handle: ReadSignal<String>) -> Element {
    let page = use_resource(move || load_page(handle.read().clone())).suspend()?.cloned();
    match page {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Ok(page) => rsx! { ContentBody { page } },
    }
}

#[component]
pub fn ArticlePage(blog: String, handle: String) -> Element {
    rsx! {
        div {
            id: "x-content-page",
            style: "padding: 32px 40px; box-sizing: border-box; width: 100%;",
            SuspendWrapper { ArticlePageRoot { blog: blog.clone(), handle: handle.clone() } }
        }
    }
}

#[component]
fn ArticlePageRoot(blog: ReadSignal<String>, handle: ReadSignal<String>) -> Element {
    let article = use_resource(move || load_article(blog.read().clone(), handle.read().clone())).suspend()?.cloned();
    match article {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Ok(page) => rsx! { ContentBody { page } },
    }
}

#[component]
fn ContentBody(page: ContentPage) -> Element {
    rsx! {
        Title { "Storefront - {page.title}" }
        article {
            style: "max-width: 760px; margin: 0 auto; display: flex; flex-direction: column; gap: 16px;",
            if let Some(blog_title) = page.blog_title() {
                div { style: "font-size: 12px; letter-spacing: 0.1em; text-transform: uppercase; color: #6B7280;", "{blog_title}" }
            }
            h1 { style: "margin: 0; font-size: 32px; font-weight: 500;", "{page.title}" }
            if page.author.is_some() || page.published_at.is_some() {
                div {
                    style: "font-size: 13px; color: #6B7280;",
                    if let Some(author) = page.author.as_ref() { span { "{author}" } }
                    if page.author.is_some() && page.published_at.is_some() { span { " · " } }
                    if let Some(date) = page.published_date() { time { datetime: "{date}", "{date}" } }
                }
            }
            if let Some(image) = page.image.as_ref() {
                img {
                    src: "{image.url}",
                    alt: "{image.alt_text.clone().unwrap_or_default()}",
                    style: "width: 100%; object-fit: cover;",
                }
            }
            div {
                class: "x-rich-text",
                style: "line-height: 1.7; color: #374151;",
                dangerous_inner_html: "{page.body_html}",
            }
        }
    }
}
