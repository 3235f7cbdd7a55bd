//! Search-as-you-type panel opened from the header.

use std::rc::Rc;

use common::{
    predictive_search::{PredictiveSearchRequest, PredictiveSearchResult, PredictiveSearchSession, SearchSnapshot},
    search_const::PREDICTIVE_SEARCH_DEBOUNCE_MS,
};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowForward, MdClose};
use gloo_timers::future::TimeoutFuture;

use crate::{api::storefront_api::predictive_search, components::suspend_boundary::LoadingIndicator, routes::Route};

/// Waits out the debounce, then fetches unless a newer term has been typed meanwhile.
/// The session decides whether the response still applies when it arrives.
fn spawn_predictive_fetch(mut session: Signal<PredictiveSearchSession>, request: PredictiveSearchRequest, debounce: bool) {
    spawn(async move {
        if debounce {
            TimeoutFuture::new(PREDICTIVE_SEARCH_DEBOUNCE_MS).await;
        }
        if !session.peek().is_current_term(&request.term) {
            debug!("predictive search for {:?} skipped, term changed", request.term);
            return;
        }
        let term = request.term.clone();
        match predictive_search(request).await {
            Ok(results) => {
                if !session.write().on_result(&term, results) {
                    debug!("stale predictive results for {:?} dropped", term);
                }
            }
            Err(e) => {
                warn!("predictive search for {:?} failed: {}", term, e);
                session.write().on_failure(&term, e.to_string());
            }
        }
    });
}

#[component]
pub fn PredictiveSearchAside(on_close: EventHandler<()>) -> Element {
    let mut session = use_signal(PredictiveSearchSession::new);
    let mut input_value = use_signal(String::new);
    let mut input_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let close_search = use_callback(move |_: ()| {
        session.write().close_session();
        input_value.set(String::new());
        if let Some(element) = input_element.peek().clone() {
            spawn(async move {
                let _ = element.set_focus(false).await;
            });
        }
        on_close.call(());
    });

    let search_oninput = move |event: Event<FormData>| {
        let value = event.value();
        input_value.set(value.clone());
        let request = session.write().submit_term(&value);
        if let Some(request) = request {
            spawn_predictive_fetch(session, request, true);
        }
    };
    let search_onkeydown = move |event: Event<KeyboardData>| match event.key() {
        Key::Escape => close_search(()),
        Key::Enter => {
            let term = session.peek().term().to_string();
            if !term.is_empty() {
                navigator().push(Route::search_page_for_term(&term));
                close_search(());
            }
        }
        _ => {}
    };
    let retry = use_callback(move |_: ()| {
        let term = session.peek().term().to_string();
        let request = session.write().submit_term(&term);
        if let Some(request) = request {
            spawn_predictive_fetch(session, request, false);
        }
    });

    let snapshot = session.read().snapshot().clone();

    rsx! {
        // backdrop
        div {
            style: "
                position: fixed;
                inset: 0;
                background-color: rgba(0,0,0,0.2);
                z-index: 900;
            ",
            onclick: move |_| close_search(()),
        }
        aside {
            id: "x-predictive-search-aside",
            style: "
                position: fixed;
                top: 0;
                right: 0;
                width: 420px;
                max-width: 100vw;
                height: 100vh;
                background: white;
                box-shadow: -4px 0 16px rgba(0,0,0,0.12);
                z-index: 1000;
                display: flex;
                flex-direction: column;
                overflow-y: auto;
            ",

            div {
                style: "display:flex; flex-direction: row; align-items: center; justify-content: space-between; padding: 16px; border-bottom: 1px solid #E5E7EB;",
                h3 { style: "margin: 0; font-size: 14px; letter-spacing: 0.1em;", "SEARCH" }
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    onclick: move |_| close_search(()),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
            }

            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    margin: 16px;
                    padding: 10px 14px;
                    border: 1px solid #E5E7EB;
                ",
                input {
                    r#type: "search",
                    name: "q",
                    autofocus: true,
                    placeholder: "Search products, collections...",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        font-size: 14px;
                    ",
                    value: "{input_value}",
                    oninput: search_oninput,
                    onkeydown: search_onkeydown,
                    onmounted: move |e: Event<MountedData>| input_element.set(Some(e.data())),
                }
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #9CA3AF;" }
            }

            div {
                style: "padding: 0 16px 16px 16px;",
                {match snapshot {
                    SearchSnapshot::Idle => rsx! {
                        p {
                            style: "text-align: center; color: #9CA3AF; font-size: 14px; padding: 32px 0;",
                            "Start typing to search products and collections"
                        }
                    },
                    SearchSnapshot::Loading { .. } => rsx! { LoadingIndicator {} },
                    SearchSnapshot::Empty { term, failure: None } => rsx! {
                        p {
                            style: "text-align: center; color: #6B7280; font-size: 14px; padding: 32px 0;",
                            "No results found for "
                            span { style: "font-weight: 500;", "“{term}”" }
                        }
                    },
                    SearchSnapshot::Empty { term, failure: Some(failure) } => rsx! {
                        div {
                            style: "text-align: center; color: #6B7280; font-size: 14px; padding: 32px 0;",
                            p { "Search for “{term}” failed." }
                            p { style: "font-size: 12px; color: #9CA3AF;", "{failure}" }
                            button {
                                style: "border: 1px solid #D1D5DB; background: white; padding: 8px 14px; cursor: pointer;",
                                onclick: move |_| retry(()),
                                "Try again"
                            }
                        }
                    },
                    SearchSnapshot::Ready { term, results } => rsx! {
                        PredictiveResultGroups { term, results, on_navigate: close_search }
                    },
                }}
            }
        }
    }
}

#[component]
fn PredictiveResultGroups(term: String, results: PredictiveSearchResult, on_navigate: Callback<()>) -> Element {
    let total = results.total_count();
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            for (category, items) in results.render_groups() {
                div {
                    key: "{category:?}",
                    h4 {
                        style: "margin: 0 0 10px 0; font-size: 12px; letter-spacing: 0.1em; color: #6B7280; text-transform: uppercase;",
                        "{category.heading()}"
                    }
                    ul {
                        style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 10px;",
                        for item in items.iter() {
                            li {
                                key: "{item.id}",
                                Link {
                                    to: item.url.clone(),
                                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                                    onclick: move |_| on_navigate(()),
                                    if let Some(thumbnail) = item.thumbnail.as_ref() {
                                        img {
                                            src: "{thumbnail.url}",
                                            alt: "{thumbnail.alt_text.clone().unwrap_or_default()}",
                                            style: "width: 48px; height: 48px; object-fit: cover; flex-shrink: 0;",
                                        }
                                    }
                                    div {
                                        style: "display: flex; flex-direction: column; min-width: 0;",
                                        span { style: "font-size: 14px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{item.title}" }
                                        if let Some(price) = item.price.as_ref() {
                                            span { style: "font-size: 12px; color: #6B7280;", "{price}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "padding-top: 16px; border-top: 1px solid #F3F4F6;",
                Link {
                    to: Route::search_page_for_term(&term),
                    onclick: move |_| on_navigate(()),
                    style: "display: flex; align-items: center; justify-content: center; gap: 6px; padding: 12px; background: #F9FAFB; font-size: 14px; font-weight: 500; color: #374151;",
                    "View all {total} results for “{term}”"
                    Icon { icon: MdArrowForward, style: "width: 16px; height: 16px;" }
                }
            }
        }
    }
}
