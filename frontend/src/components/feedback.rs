//! Loading and error surfaces shared by the search views.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::api::search_api::SearchError;

#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                height: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            div {
                style: "color:black; font-size: 24px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
                "{label}"
            }
        }
    }
}

/// Small pill shown while fresh results are loading behind a stale list.
#[component]
pub fn InlineUpdatingBadge() -> Element {
    rsx! {
        span {
            style: "
                font-size: 14px;
                font-weight: 400;
                color: #1D4ED8;
                background-color: #DBEAFE;
                border-radius: 1000px;
                padding: 4px 12px;
            ",
            "Updating..."
        }
    }
}

/// Blocking surface for auth failures. Covers the page until dismissed; no
/// auto-redirect to login.
#[component]
pub fn BlockingAlert(error: ReadSignal<SearchError>, ondismiss: Callback<()>) -> Element {
    rsx! {
        div {
            id: "x-search-blocking-alert-backdrop",
            style: "
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                height: 100%;
                background-color: rgba(0,0,0,0.4);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 2000;
            ",
            div {
                style: "
                    background: white;
                    border-radius: 10px;
                    padding: 28px 32px;
                    max-width: 440px;
                    box-shadow: 0 0 20px 0 rgba(0, 0, 0, 0.2);
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                ",
                h2 {
                    style: "font-size: 22px; font-weight: 500; color: #B91C1C; margin: 0;",
                    "Sign-in required"
                }
                p {
                    style: "font-size: 16px; color: #1C212D; margin: 0;",
                    "{error}"
                }
                button {
                    style: "
                        align-self: flex-end;
                        cursor: pointer;
                        border: 1px solid #1D4ED8;
                        color: #1D4ED8;
                        background: white;
                        border-radius: 6px;
                        padding: 8px 18px;
                        font-size: 15px;
                    ",
                    onclick: move |_| ondismiss(()),
                    "Dismiss"
                }
            }
        }
    }
}

/// Non-blocking toast for generic search failures.
#[component]
pub fn ErrorToast(error: ReadSignal<SearchError>, ondismiss: Callback<()>) -> Element {
    rsx! {
        div {
            id: "x-search-error-toast",
            style: "
                position: fixed;
                bottom: 24px;
                right: 24px;
                background-color: #1C212D;
                color: white;
                border-radius: 8px;
                padding: 14px 16px;
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                max-width: 420px;
                box-shadow: 0 2px 10px 0 rgba(0, 0, 0, 0.3);
                z-index: 1500;
            ",
            span {
                style: "font-size: 15px;",
                "{error}"
            }
            button {
                style: "border: none; background: none; cursor: pointer; color: white; display: flex;",
                onclick: move |_| ondismiss(()),
                Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
            }
        }
    }
}
