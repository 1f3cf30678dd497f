//! Side navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar layout: icon rail on the left, routed page on the right.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id: "x-nav-container",

            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    box-sizing: border-box;
                ",

                // top part
                NavbarTopLogo {},
                NavbarTopIconLinks {},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                // bottom part
                NavbarBottomIconLinks {},
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::DashboardPage {},
            div {
                style: "
                    width: 38px;
                    height: 38px;
                    border-radius: 8px;
                    background-color: #4F46E5;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 17px;
                    font-weight: 600;
                ",
                "TD"
            }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::DashboardPage {}, icon: MdHome, label: "Dashboard" }
            IconLink { to: Route::AdvancedSearchPage {}, icon: MdSearch, label: "Candidate Search" }
        }
    }
}


#[component]
fn NavbarBottomIconLinks() -> Element {
    rsx! {

        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",

            IconLink { to: Route::DashboardPage {}, icon: MdPerson, label: "Profile" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
