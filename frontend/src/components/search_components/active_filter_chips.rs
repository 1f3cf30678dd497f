//! Chip bar listing every active filter, grouped by category.
//!
//! Chips are re-derived from filter state on every render; removing one
//! resets just that filter through the page callback.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use common::filter_chips::{grouped, project};

use crate::pages::advanced_search_page::CandidateSearchControl;

#[component]
pub fn ActiveFilterChipBar() -> Element {
    let control = use_context::<CandidateSearchControl>();
    let chips =
        use_memo(move || project(&control.filters.read(), &control.defaults.read()));

    if chips.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-active-filter-chip-bar",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 14px;
                padding: 10px 16px;
                background-color: #F8FCFF;
                border-bottom: 1px solid rgba(164, 164, 164, 0.5);
            ",
            for group in grouped(&chips.read()) {
                div {
                    key: "{group.category}",
                    style: "display: flex; flex-direction: row; align-items: center; gap: 6px;",
                    span {
                        style: "font-size: 13px; font-weight: 500; color: rgba(28, 33, 45, 0.6);",
                        "{group.category}:"
                    }
                    for chip in group.chips {
                        span {
                            key: "{chip.key}",
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 5px;
                                background-color: #E0E7FF;
                                color: #1C212D;
                                border-radius: 1000px;
                                padding: 3px 10px;
                                font-size: 14px;
                            ",
                            "{chip.value}"
                            button {
                                style: "border: none; background: none; cursor: pointer; display: flex; padding: 0;",
                                onclick: move |_| (control.on_remove_chip)(chip.key),
                                Icon { icon: MdClose, style: "width: 14px; height: 14px; color: #1C212D;" }
                            }
                        }
                    }
                }
            }
            button {
                style: "border: none; background: none; cursor: pointer; color: #1D4ED8; font-size: 14px;",
                onclick: move |_| (control.on_clear_filters)(()),
                "Clear all"
            }
        }
    }
}
