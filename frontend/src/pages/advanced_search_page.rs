//! Advanced candidate search page.
//!
//! Owns the filter state, the free-text query, and the search session; wires
//! the debounce timer and the network call into the session state machine.
//! Child components talk back exclusively through the callbacks in
//! [`CandidateSearchControl`].

use std::rc::Rc;

use chrono::Datelike;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::filter_chips;
use common::filter_state::{FilterPatch, FilterState};
use common::saved_search::SavedSearch;
use common::search_const::{DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use common::search_query::{SearchQuery, SortBy};
use common::search_session::{RequestTicket, SearchSession};

use crate::api::credentials::BrowserCredentialStore;
use crate::api::saved_search_store::SavedSearchStore;
use crate::api::search_api::{SearchApi, SearchError, api_base_url};
use crate::components::feedback::{BlockingAlert, ErrorToast, LoadingIndicator};
use crate::components::search_components::active_filter_chips::ActiveFilterChipBar;
use crate::components::search_components::candidate_card::CandidateCard;
use crate::components::search_components::filter_sidebar::FilterSidebar;
use crate::components::search_components::saved_search_panel::SavedSearchPanel;
use crate::components::search_components::search_result_list_controls::SearchResultListControls;
use crate::components::search_components::search_top_bar::SearchTopBar;

/// What kind of change is asking for a search.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SearchTrigger {
    Criteria,
    Page(u32),
    PageSize(u32),
}

/// Shared control surface for every component on this page.
#[derive(Clone, Copy)]
pub struct CandidateSearchControl {
    pub session: Signal<SearchSession>,
    pub filters: Signal<FilterState>,
    pub defaults: Signal<FilterState>,
    pub search_text: Signal<String>,
    pub sort_by: Signal<SortBy>,
    pub error: Signal<Option<SearchError>>,
    pub saved_searches: Signal<Vec<SavedSearch>>,
    pub on_patch: Callback<FilterPatch>,
    pub on_remove_chip: Callback<&'static str>,
    pub on_clear_filters: Callback<()>,
    pub on_query_input: Callback<String>,
    pub on_sort_change: Callback<SortBy>,
    pub on_page_change: Callback<u32>,
    pub on_page_size_change: Callback<u32>,
    pub on_save_search: Callback<String>,
    pub on_load_saved: Callback<SavedSearch>,
    pub on_toggle_favorite: Callback<String>,
    pub on_delete_saved: Callback<String>,
    pub on_dismiss_error: Callback<()>,
}

#[component]
pub fn AdvancedSearchPage() -> Element {
    let current_year = use_hook(|| chrono::Utc::now().year().max(2000) as u16);

    let defaults = use_signal(move || FilterState::defaults(current_year));
    let mut filters = use_signal(move || FilterState::defaults(current_year));
    let mut search_text = use_signal(String::new);
    let mut sort_by = use_signal(SortBy::default);
    let mut session = use_signal(|| SearchSession::new(DEFAULT_PAGE_SIZE));
    let mut error = use_signal(|| None::<SearchError>);
    let mut saved_searches = use_signal(SavedSearchStore::load);
    let mut scroll_pending = use_signal(|| false);
    let results_header = use_signal(|| None::<Event<MountedData>>);

    let api = use_hook(|| {
        Rc::new(SearchApi::new(
            api_base_url(),
            Rc::new(BrowserCredentialStore),
        ))
    });

    // Network leg: build the payload from whatever the state is *now*, fire,
    // and let the session decide whether the response may land.
    let run_search = Callback::new(move |ticket: RequestTicket| {
        let query = SearchQuery::build(
            &search_text.peek(),
            &filters.peek(),
            &defaults.peek(),
            *sort_by.peek(),
            session.peek().page,
            session.peek().items_per_page,
        );
        let api = api.clone();
        spawn(async move {
            tracing::info!(
                "searching candidates: page {}, {} filters",
                query.page,
                query.filters.len()
            );
            match api.search(&query).await {
                Ok(page) => {
                    if session.write().commit_success(ticket, page) {
                        error.set(None);
                    }
                }
                Err(err) => {
                    if session.write().commit_failure(ticket) {
                        tracing::error!("candidate search failed: {err}");
                        error.set(Some(err));
                    }
                }
            }
        });
    });

    // Debounce leg: arm a timer ticket, sleep, and only the newest ticket
    // survives to issue a request.
    let schedule = Callback::new(move |trigger: SearchTrigger| {
        let ticket = {
            let mut session = session.write();
            match trigger {
                SearchTrigger::Criteria => session.note_criteria_changed(),
                SearchTrigger::Page(page) => session.set_page(page),
                SearchTrigger::PageSize(size) => session.set_items_per_page(size),
            }
        };
        spawn(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            let issued = session.write().timer_fired(ticket);
            if let Some(request) = issued {
                run_search(request);
            }
        });
    });

    // Mount-time search goes out immediately, without the debounce.
    use_future(move || async move {
        let ticket = session.write().initial_ticket();
        run_search(ticket);
    });

    // After a page change has rendered, bring the results header back into
    // view. Cosmetic only; skipped on the initial load.
    use_effect(move || {
        let loading = session.read().is_loading();
        let _rendered = session.read().results.results.len();
        if !loading && *scroll_pending.peek() {
            scroll_pending.set(false);
            if let Some(header) = results_header.peek().clone() {
                let _ = header.scroll_to_with_options(ScrollToOptions {
                    behavior: ScrollBehavior::Smooth,
                    vertical: ScrollLogicalPosition::Start,
                    horizontal: ScrollLogicalPosition::Nearest,
                });
            }
        }
    });

    let on_patch = Callback::new(move |patch: FilterPatch| {
        filters.write().apply(patch);
        schedule(SearchTrigger::Criteria);
    });

    let on_remove_chip = Callback::new(move |key: &'static str| {
        let next = filter_chips::remove(&filters.peek(), key, &defaults.peek());
        filters.set(next);
        schedule(SearchTrigger::Criteria);
    });

    let on_clear_filters = Callback::new(move |_: ()| {
        // bar any in-flight response from landing on the cleared state
        session.write().reset();
        filters.set(defaults.peek().clone());
        search_text.set(String::new());
        sort_by.set(SortBy::default());
        schedule(SearchTrigger::Criteria);
    });

    let on_query_input = Callback::new(move |text: String| {
        search_text.set(text);
        schedule(SearchTrigger::Criteria);
    });

    let on_sort_change = Callback::new(move |sort: SortBy| {
        sort_by.set(sort);
        schedule(SearchTrigger::Criteria);
    });

    let on_page_change = Callback::new(move |page: u32| {
        scroll_pending.set(true);
        schedule(SearchTrigger::Page(page));
    });

    let on_page_size_change = Callback::new(move |size: u32| {
        schedule(SearchTrigger::PageSize(size));
    });

    let on_save_search = Callback::new(move |name: String| {
        match SavedSearchStore::add(&name, &search_text.peek(), &filters.peek()) {
            Ok(saved) => {
                tracing::info!("saved search '{}'", saved.name);
                saved_searches.set(SavedSearchStore::load());
            }
            Err(err) => tracing::warn!("could not save search: {err}"),
        }
    });

    let on_load_saved = Callback::new(move |saved: SavedSearch| {
        search_text.set(saved.query.clone());
        filters.set(saved.filters.clone());
        schedule(SearchTrigger::Criteria);
    });

    let on_toggle_favorite =
        Callback::new(move |id: String| match SavedSearchStore::toggle_favorite(&id) {
            Ok(list) => saved_searches.set(list),
            Err(err) => tracing::warn!("could not update saved search: {err}"),
        });

    let on_delete_saved =
        Callback::new(move |id: String| match SavedSearchStore::delete(&id) {
            Ok(list) => saved_searches.set(list),
            Err(err) => tracing::warn!("could not delete saved search: {err}"),
        });

    let on_dismiss_error = Callback::new(move |_: ()| error.set(None));

    use_context_provider(move || CandidateSearchControl {
        session,
        filters,
        defaults,
        search_text,
        sort_by,
        error,
        saved_searches,
        on_patch,
        on_remove_chip,
        on_clear_filters,
        on_query_input,
        on_sort_change,
        on_page_change,
        on_page_size_change,
        on_save_search,
        on_load_saved,
        on_toggle_favorite,
        on_delete_saved,
        on_dismiss_error,
    });

    // Auth failures block; anything else is a toast.
    let error_overlay = match error.read().clone() {
        Some(err) if err.is_auth() => rsx! {
            BlockingAlert { error: err, ondismiss: on_dismiss_error }
        },
        Some(err) => rsx! {
            ErrorToast { error: err, ondismiss: on_dismiss_error }
        },
        None => rsx! {},
    };

    rsx! {
        Title { "Candidate Search | TalentDesk" }
        div {
            id: "x-advanced-search-page",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
                background-color: #ECEEF2;
            ",
            div {
                id: "x-advanced-search-left-rail",
                style: "
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    overflow-y: auto;
                    flex-shrink: 0;
                ",
                FilterSidebar {}
                SavedSearchPanel {}
            }
            div {
                id: "x-advanced-search-main",
                style: "
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                    height: 100%;
                    min-width: 300px;
                ",
                div {
                    id: "x-advanced-search-top-bar",
                    style: "
                        border-bottom: 1px solid rgb(164, 164, 164);
                        background-color: #F8FCFF;
                        flex-shrink: 0;
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        width: 100%;
                    ",
                    SearchTopBar {}
                }
                ActiveFilterChipBar {}
                CandidateResultsView { results_header }
            }
        }
        {error_overlay}
    }
}

#[component]
fn CandidateResultsView(mut results_header: Signal<Option<Event<MountedData>>>) -> Element {
    let control = use_context::<CandidateSearchControl>();
    let session = control.session;

    let full_loading = use_memo(move || session.read().show_full_loading());
    let updating = use_memo(move || session.read().show_inline_updating());
    // stale-while-revalidate: the old list stays visible, just dimmed
    let list_opacity = use_memo(move || if updating() { "0.5" } else { "1" });
    let candidates = use_memo(move || session.read().results.results.clone());

    rsx! {
        div {
            id: "x-candidate-results-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                flex-grow: 1;
                width: 100%;
                min-height: 0;
                box-sizing: border-box;
            ",
            div {
                onmounted: move |event| results_header.set(Some(event)),
                SearchResultListControls {}
            }

            div {
                style: "
                    flex-grow: 1;
                    width: 100%;
                    min-height: 0;
                    overflow-y: auto;
                    opacity: {list_opacity};
                ",
                if full_loading() {
                    LoadingIndicator { label: "Loading candidates..." }
                } else if candidates.read().is_empty() {
                    EmptyResults {}
                } else {
                    ul {
                        id: "x-candidate-results-list",
                        style: "
                            width: 100%;
                            list-style: none;
                            padding: 0;
                            margin: 0;
                        ",
                        for candidate in candidates.read().iter().cloned() {
                            li {
                                key: "{candidate.id}",
                                CandidateCard { candidate: candidate.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmptyResults() -> Element {
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
                style: "color: rgba(28, 33, 45, 0.6); font-size: 18px; padding: 20px;",
                "No candidates match the current search."
            }
        }
    }
}
