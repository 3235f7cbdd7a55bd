//! Loading states: shimmering storefront placeholders shaped like the content on its way.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shape of the placeholder shown while a server function below the boundary is pending.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LoadingSkeleton {
    #[default]
    Lines,
    ProductGrid { cards: usize },
    ProductDetail,
}

#[component]
pub fn SuspendWrapper(#[props(default)] skeleton: LoadingSkeleton, children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: move |_s: SuspenseContext| match skeleton {
                LoadingSkeleton::Lines => rsx! { LoadingIndicator {} },
                LoadingSkeleton::ProductGrid { cards } => rsx! { ProductGridSkeleton { cards } },
                LoadingSkeleton::ProductDetail => rsx! { ProductDetailSkeleton {} },
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
fn SkeletonBar(width: String, height: String) -> Element {
    rsx! {
        div {
            class: "x-skeleton",
            style: "width: {width}; height: {height}; background: #E5E7EB; border-radius: 2px;",
        }
    }
}

/// A few grey text lines; also used inside the predictive search panel.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            role: "status",
            aria_label: "Loading",
            style: "display: flex; flex-direction: column; gap: 10px; padding: 16px 0;",
            for width in ["70%", "90%", "55%"] {
                SkeletonBar { key: "{width}", width: "{width}", height: "14px" }
            }
        }
    }
}

#[component]
pub fn ProductGridSkeleton(cards: usize) -> Element {
    rsx! {
        div {
            class: "x-product-grid",
            role: "status",
            aria_label: "Loading products",
            for i in 0..cards {
                div {
                    key: "{i}",
                    style: "display: flex; flex-direction: column; gap: 6px;",
                    div { class: "x-skeleton", style: "width: 100%; aspect-ratio: 4 / 5; background: #E5E7EB;" }
                    SkeletonBar { width: "40%", height: "12px" }
                    SkeletonBar { width: "80%", height: "14px" }
                    SkeletonBar { width: "30%", height: "14px" }
                }
            }
        }
    }
}

#[component]
fn ProductDetailSkeleton() -> Element {
    rsx! {
        div {
            class: "x-product-detail",
            role: "status",
            aria_label: "Loading product",
            div { class: "x-skeleton", style: "width: 100%; aspect-ratio: 4 / 5; background: #E5E7EB;" }
            div {
                style: "display: flex; flex-direction: column; gap: 14px;",
                SkeletonBar { width: "30%", height: "12px" }
                SkeletonBar { width: "75%", height: "28px" }
                SkeletonBar { width: "20%", height: "18px" }
                SkeletonBar { width: "100%", height: "44px" }
                LoadingIndicator {}
            }
        }
    }
}
