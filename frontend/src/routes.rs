use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::advanced_search_page::AdvancedSearchPage;
use crate::pages::dashboard_page::DashboardPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    DashboardPage {},


    #[route("/candidates/search")]
    AdvancedSearchPage {},

}
