//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:#B91C1C; font-size: 44px; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:#7F1D1D; font-size: 24px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:#1D4ED8; font-size: 24px; border: 1px solid #1D4ED8; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Back to Dashboard"
                    }
                    pre {
                        style: "color:black; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}
