//! Controls for the candidate result list: hit count, sort order, page size
//! and pagination.

use common::search_const::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use common::search_query::SortBy;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdArrowForward};

use crate::components::feedback::InlineUpdatingBadge;
use crate::pages::advanced_search_page::CandidateSearchControl;

const SORT_CHOICES: [SortBy; 4] = [
    SortBy::Relevance,
    SortBy::ExperienceDesc,
    SortBy::ExperienceAsc,
    SortBy::RecentlyUpdated,
];

fn sort_key(sort: SortBy) -> &'static str {
    match sort {
        SortBy::Relevance => "RELEVANCE",
        SortBy::ExperienceDesc => "EXPERIENCE_DESC",
        SortBy::ExperienceAsc => "EXPERIENCE_ASC",
        SortBy::RecentlyUpdated => "RECENTLY_UPDATED",
    }
}

fn sort_label(sort: SortBy) -> &'static str {
    match sort {
        SortBy::Relevance => "Relevance",
        SortBy::ExperienceDesc => "Experience: high to low",
        SortBy::ExperienceAsc => "Experience: low to high",
        SortBy::RecentlyUpdated => "Recently updated",
    }
}

fn sort_from_key(key: &str) -> SortBy {
    SORT_CHOICES
        .iter()
        .copied()
        .find(|s| sort_key(*s) == key)
        .unwrap_or_default()
}

#[component]
pub fn SearchResultListControls() -> Element {
    let control = use_context::<CandidateSearchControl>();
    let session = control.session;

    let total = use_memo(move || session.read().results.total_count);
    let updating = use_memo(move || session.read().show_inline_updating());
    let current_sort = use_memo(move || *control.sort_by.read());
    let page_size = use_memo(move || session.read().items_per_page);

    rsx! {
        div {
            id: "x-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 7px 10px;
                height: 56px;
                width: 100%;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112); margin: 0;",
                "{total} candidates found"
            }
            if updating() {
                InlineUpdatingBadge {}
            }
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            select {
                style: "
                    border: 1px solid rgba(101, 101, 101, 0.5);
                    border-radius: 6px;
                    padding: 6px 8px;
                    font-size: 14px;
                    background: white;
                    cursor: pointer;
                ",
                onchange: move |event| (control.on_sort_change)(sort_from_key(&event.value())),
                for choice in SORT_CHOICES {
                    option {
                        value: sort_key(choice),
                        selected: current_sort() == choice,
                        "{sort_label(choice)}"
                    }
                }
            }
            select {
                style: "
                    border: 1px solid rgba(101, 101, 101, 0.5);
                    border-radius: 6px;
                    padding: 6px 8px;
                    font-size: 14px;
                    background: white;
                    cursor: pointer;
                ",
                onchange: move |event| {
                    let size = event.value().parse::<u32>().unwrap_or(DEFAULT_PAGE_SIZE);
                    (control.on_page_size_change)(size);
                },
                for size in PAGE_SIZE_OPTIONS {
                    option {
                        value: "{size}",
                        selected: page_size() == size,
                        "{size} / page"
                    }
                }
            }
            PaginationControls {}
        }
    }
}


#[component]
fn PaginationControls() -> Element {
    let control = use_context::<CandidateSearchControl>();
    let session = control.session;

    let page = use_memo(move || session.read().page);
    let max_pages = use_memo(move || session.read().results.total_pages);
    let can_go_to_previous_page = use_memo(move || page() > 1);
    let can_go_to_next_page = use_memo(move || page() < max_pages());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 10px;
            ",

            // prev page
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| { (control.on_page_change)(page() - 1); }
            }
            // current page counter
            div {
                style: "
                    font-size: 15px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    border-left: 1px solid rgba(0,0,0,0.1);
                    border-right: 1px solid rgba(0,0,0,0.1);
                    padding: 4px 14px;
                ",
                "{page()}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{max_pages()}"
                }
            }
            // next page
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| {
                    (control.on_page_change)(page() + 1);
                }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
