//! Error boundaries for rendering and loader failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in boundary {}: {:?}", boundary_name.read(), err);
                rsx! {
                    h1 {
                        style: "color: #B91C1C; font-size: 40px; padding: 10px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color: #7F1D1D; font-size: 18px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color: #1D4ED8; font-size: 18px; border: 1px solid #1D4ED8; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Return to Home Page"
                    }
                    pre {
                        style: "color: black; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #1D4ED8; font-size: 16px; border: 1px solid #1D4ED8; background: white; padding: 8px 14px; border-radius: 5px; margin: 15px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error card for a failed loader.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "24px 0",

            h2 {
                style: "color: #B91C1C; font-size: 24px; margin: 5px;",
                "Could not load this section",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
