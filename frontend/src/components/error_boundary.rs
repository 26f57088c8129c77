//! Error boundaries for render failures and failed catalog calls.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in boundary {}: {:?}", boundary_name.peek(), err);
                rsx! {
                    div {
                        class: "x-error-page",
                        style: "padding: 32px; max-width: 720px; margin: 0 auto;",
                        h1 {
                            style: "color: #9B1C1C; font-size: 36px; margin-bottom: 12px;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: #4B5563; font-size: 18px; margin-bottom: 24px;",
                            "The page could not be displayed ({boundary_name})."
                        }
                        a {
                            href: "/",
                            style: "color: #1D4ED8; font-size: 18px;",
                            "Back to the shop"
                        }
                        pre {
                            style: "margin-top: 24px; color: #6B7280; white-space: pre-wrap; font-size: 12px;",
                            "{err:#?}"
                        }
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
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-button-secondary",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
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

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-component-error",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                padding: 24px;
                border: 1px solid #FCA5A5;
                border-radius: 8px;
                background-color: #FEF2F2;
            ",
            h2 {
                style: "color: #9B1C1C; font-size: 20px;",
                "Could not load this section",
            }
            pre {
                style: "color: #7F1D1D; white-space: pre-wrap; max-width: 520px; max-height: 240px; overflow-y: auto; font-size: 12px;",
                "{error_txt}"
            }
            {children}
        }
    }
}
