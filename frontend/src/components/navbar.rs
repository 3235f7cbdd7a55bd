//! Storefront header with the predictive search aside.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::predictive_search_aside::PredictiveSearchAside;
use crate::routes::Route;

const HEADER_COLLECTIONS: [(&str, &str); 4] = [
    ("new-arrivals", "New Arrivals"),
    ("clothing", "Clothing"),
    ("shoes", "Shoes"),
    ("accessories", "Accessories"),
];

/// Shared layout: header on top, routed page below.
#[component]
pub fn Navbar() -> Element {
    let mut search_open = use_signal(|| false);

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            div {
                id: "x-nav-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    height: 64px;
                    padding: 0 32px;
                    background-color: white;
                    border-bottom: 1px solid #E5E7EB;
                    position: sticky;
                    top: 0;
                    z-index: 500;
                ",

                NavbarLogo {}
                NavbarCollectionLinks {}

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                IconButton {
                    icon: MdSearch,
                    label: "Search",
                    onclick: move |_| search_open.set(true),
                }
            }

            if search_open() {
                PredictiveSearchAside {
                    on_close: move |_| search_open.set(false),
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            style: "font-size: 22px; font-weight: 700; letter-spacing: 0.2em; color: #0F172A;",
            "STOREFRONT"
        }
    }
}

#[component]
fn NavbarCollectionLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                gap: 20px;
                font-size: 13px;
                text-transform: uppercase;
                letter-spacing: 0.08em;
            ",
            for (handle, label) in HEADER_COLLECTIONS {
                Link {
                    key: "{handle}",
                    to: Route::collection(handle, String::new()),
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn IconButton<T: IconShape + Clone + PartialEq + 'static>(icon: T, label: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            title: "{label}",
            style: "
                border: none;
                background: none;
                cursor: pointer;
                display: flex;
                align-items: center;
            ",
            onclick: move |e| onclick.call(e),
            Icon { icon: icon, style: "width: 24px; height: 24px; color: #111827;" }
        }
    }
}
