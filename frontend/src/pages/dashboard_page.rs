use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdBookmark, MdSearch};

use crate::api::saved_search_store::SavedSearchStore;
use crate::routes::Route;


/// Dashboard page
#[component]
pub fn DashboardPage() -> Element {
    let saved_count = use_hook(|| SavedSearchStore::load().len());

    rsx! {
        Title { "TalentDesk - Dashboard" }
        div {
            id: "x-dashboard-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                CandidateSearchCard {}
                SavedSearchesCard { count: saved_count }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color:#4F46E5;", "TalentDesk!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        p {
            style: "color: rgba(15, 23, 42, 0.7); font-size: 18px; margin: 0;",
            "Find, filter and track candidates across every open position."
        }
    }
}

#[component]
fn CandidateSearchCard() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                background: white;
                border-radius: 12px;
                padding: 24px;
                width: 320px;
                box-shadow: 0 1px 4px 0 rgba(0, 0, 0, 0.08);
            ",
            Icon { icon: MdSearch, style: "width: 32px; height: 32px; color: #4F46E5;" }
            h2 {
                style: "font-size: 22px; font-weight: 500; margin: 0; color: #0F172A;",
                "Candidate Search"
            }
            p {
                style: "font-size: 15px; color: rgba(15, 23, 42, 0.7); margin: 0;",
                "Search the candidate pool with skills, experience, compensation and status filters."
            }
            Link {
                to: Route::AdvancedSearchPage {},
                span {
                    style: "color: #1D4ED8; font-size: 15px;",
                    "Start searching →"
                }
            }
        }
    }
}

#[component]
fn SavedSearchesCard(count: usize) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                background: white;
                border-radius: 12px;
                padding: 24px;
                width: 320px;
                box-shadow: 0 1px 4px 0 rgba(0, 0, 0, 0.08);
            ",
            Icon { icon: MdBookmark, style: "width: 32px; height: 32px; color: #4F46E5;" }
            h2 {
                style: "font-size: 22px; font-weight: 500; margin: 0; color: #0F172A;",
                "Saved Searches"
            }
            p {
                style: "font-size: 15px; color: rgba(15, 23, 42, 0.7); margin: 0;",
                "{count} saved searches ready to load from the search page."
            }
            Link {
                to: Route::AdvancedSearchPage {},
                span {
                    style: "color: #1D4ED8; font-size: 15px;",
                    "Open →"
                }
            }
        }
    }
}
