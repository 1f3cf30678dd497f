pub mod advanced_search_page;
pub mod dashboard_page;
