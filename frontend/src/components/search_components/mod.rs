pub mod active_filter_chips;
pub mod candidate_card;
pub mod filter_sidebar;
pub mod filter_widgets;
pub mod saved_search_panel;
pub mod search_result_list_controls;
pub mod search_top_bar;
