use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::pages::advanced_search_page::CandidateSearchControl;

/// Free-text query input. Every keystroke goes through the page callback and
/// rides the same debounce as the filter widgets.
#[component]
pub fn SearchTopBar() -> Element {
    let control = use_context::<CandidateSearchControl>();
    let search_text = control.search_text;

    rsx! {
        div {
            id: "x-search-input-box",
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                max-width: calc(100% - 32px);
                margin: 16px;
                box-sizing: border-box;
            ",

            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search candidates by name, skill or keyword",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 17px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{search_text}",
                oninput: move |event| (control.on_query_input)(event.value()),
            }
        }
    }
}
