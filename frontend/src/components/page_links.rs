use dioxus::prelude::*;

use crate::routes::Route;

const PAGE_LINK_STYLE: &str = "border: 1px solid #111827; padding: 10px 18px; font-size: 13px; text-transform: uppercase; letter-spacing: 0.08em;";

/// "Previous" / "Next" links for a cursor-paged listing. Renders nothing on a single page.
#[component]
pub fn PageLinks(previous: Option<Route>, next: Option<Route>) -> Element {
    if previous.is_none() && next.is_none() {
        return rsx! {};
    }
    rsx! {
        nav {
            class: "x-page-links",
            style: "display: flex; justify-content: center; gap: 16px; padding: 32px 0;",
            if let Some(previous) = previous {
                Link { to: previous, style: PAGE_LINK_STYLE, "Previous" }
            }
            if let Some(next) = next {
                Link { to: next, style: PAGE_LINK_STYLE, "Next" }
            }
        }
    }
}
