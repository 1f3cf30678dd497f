//! The search session state machine.
//!
//! Owns everything about *when* a search runs and *which* response is allowed
//! to land: debounce bookkeeping, the page/page-size reset rules, and a
//! monotonically increasing request sequence that rejects stale responses.
//! The two suspension points (the debounce timer and the network call) live
//! outside; callers hand tickets back in and the machine decides.
//!
//! ```text
//! Idle -> Debouncing -> InFlight -> Idle
//!           ^  |______________________|
//!           |______ any new change
//! ```

use crate::search_result::SearchResultPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Debouncing,
    InFlight,
}

/// Handed out when a debounce timer is armed; the machine only honors the
/// newest generation, so bursts coalesce into one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    generation: u64,
}

/// Handed out when a request is issued; only the newest id may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    phase: SessionPhase,
    timer_generation: u64,
    request_seq: u64,
    loading: bool,
    pub page: u32,
    pub items_per_page: u32,
    pub results: SearchResultPage,
}

impl SearchSession {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            phase: SessionPhase::Idle,
            timer_generation: 0,
            request_seq: 0,
            loading: false,
            page: 1,
            items_per_page,
            results: SearchResultPage::empty(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The mount-time search: issued immediately, no debounce.
    pub fn initial_ticket(&mut self) -> RequestTicket {
        self.issue()
    }

    /// Free-text query, any filter field, or sort order changed.
    /// Always snaps back to page 1.
    pub fn note_criteria_changed(&mut self) -> TimerTicket {
        self.page = 1;
        self.arm_debounce()
    }

    /// Page-only navigation: filters stay put.
    pub fn set_page(&mut self, page: u32) -> TimerTicket {
        self.page = page.max(1);
        self.arm_debounce()
    }

    /// Page size changes always restart from page 1.
    pub fn set_items_per_page(&mut self, items_per_page: u32) -> TimerTicket {
        self.items_per_page = items_per_page;
        self.page = 1;
        self.arm_debounce()
    }

    /// Cancel any pending debounce and bar any in-flight response from
    /// committing. Used by clear/reset before the criteria change that
    /// follows it.
    pub fn reset(&mut self) {
        self.timer_generation += 1;
        self.request_seq += 1;
        self.phase = SessionPhase::Idle;
        self.loading = false;
    }

    /// The debounce timer elapsed. Returns a request ticket iff no newer
    /// change superseded this timer in the meantime.
    pub fn timer_fired(&mut self, ticket: TimerTicket) -> Option<RequestTicket> {
        if ticket.generation != self.timer_generation {
            return None;
        }
        Some(self.issue())
    }

    /// A response arrived. Commits iff the ticket is the newest issued
    /// request; stale responses report `false` and change nothing.
    pub fn commit_success(&mut self, ticket: RequestTicket, page: SearchResultPage) -> bool {
        if ticket.id != self.request_seq {
            return false;
        }
        self.results = page;
        self.finish_if_current();
        true
    }

    /// A failed response clears results to the empty page (no retry).
    pub fn commit_failure(&mut self, ticket: RequestTicket) -> bool {
        if ticket.id != self.request_seq {
            return false;
        }
        self.results = SearchResultPage::empty();
        self.finish_if_current();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Full-screen loading only when there is nothing to show yet.
    pub fn show_full_loading(&self) -> bool {
        self.loading && self.results.results.is_empty()
    }

    /// With a previous result set on screen, loading is the inline
    /// "Updating..." treatment over the dimmed stale list.
    pub fn show_inline_updating(&self) -> bool {
        self.loading && !self.results.results.is_empty()
    }

    fn arm_debounce(&mut self) -> TimerTicket {
        self.timer_generation += 1;
        // Invalidate anything in flight: its response must not overwrite
        // state the user has already moved past.
        self.request_seq += 1;
        self.phase = SessionPhase::Debouncing;
        TimerTicket {
            generation: self.timer_generation,
        }
    }

    fn issue(&mut self) -> RequestTicket {
        self.request_seq += 1;
        self.phase = SessionPhase::InFlight;
        self.loading = true;
        RequestTicket {
            id: self.request_seq,
        }
    }

    fn finish_if_current(&mut self) {
        // A commit while a newer debounce is pending keeps the session in
        // Debouncing; the imminent search owns the loading flag.
        if self.phase == SessionPhase::InFlight {
            self.phase = SessionPhase::Idle;
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_result::Candidate;

    fn page_with(n: usize) -> SearchResultPage {
        SearchResultPage {
            results: vec![Candidate::default(); n],
            total_count: n as u64,
            total_pages: 1,
            page: 1,
            execution_time: None,
        }
    }

    #[test]
    fn burst_of_changes_issues_exactly_one_request() {
        let mut session = SearchSession::new(10);
        let t1 = session.note_criteria_changed();
        let t2 = session.note_criteria_changed();
        let t3 = session.note_criteria_changed();

        assert!(session.timer_fired(t1).is_none());
        assert!(session.timer_fired(t2).is_none());
        let req = session.timer_fired(t3);
        assert!(req.is_some());
        assert_eq!(session.phase(), SessionPhase::InFlight);
    }

    #[test]
    fn filter_change_resets_page_but_page_change_does_not() {
        let mut session = SearchSession::new(10);
        session.set_page(5);
        assert_eq!(session.page, 5);

        session.note_criteria_changed();
        assert_eq!(session.page, 1);

        session.set_page(3);
        assert_eq!(session.page, 3);
    }

    #[test]
    fn page_size_change_snaps_to_page_one() {
        let mut session = SearchSession::new(10);
        session.set_page(4);
        session.set_items_per_page(50);
        assert_eq!(session.page, 1);
        assert_eq!(session.items_per_page, 50);
    }

    #[test]
    fn stale_response_cannot_overwrite_newer_one() {
        let mut session = SearchSession::new(10);

        // request A issued
        let t_a = session.note_criteria_changed();
        let req_a = session.timer_fired(t_a).unwrap();

        // superseding change issues request B
        let t_b = session.note_criteria_changed();
        let req_b = session.timer_fired(t_b).unwrap();

        // B arrives first and commits
        assert!(session.commit_success(req_b, page_with(2)));
        assert_eq!(session.results.results.len(), 2);

        // A limps in later and is dropped
        assert!(!session.commit_success(req_a, page_with(9)));
        assert_eq!(session.results.results.len(), 2);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.is_loading());
    }

    #[test]
    fn in_flight_response_is_barred_after_a_new_change() {
        let mut session = SearchSession::new(10);
        let t = session.note_criteria_changed();
        let req = session.timer_fired(t).unwrap();

        // user keeps editing while the call is out
        let _t2 = session.note_criteria_changed();

        assert!(!session.commit_success(req, page_with(4)));
        assert!(session.results.results.is_empty());
        // still waiting on the newer search
        assert_eq!(session.phase(), SessionPhase::Debouncing);
    }

    #[test]
    fn reset_invalidates_pending_timer_and_in_flight_request() {
        let mut session = SearchSession::new(10);
        let t = session.note_criteria_changed();
        let req = session.timer_fired(t).unwrap();
        let pending = session.note_criteria_changed();

        session.reset();

        assert!(session.timer_fired(pending).is_none());
        assert!(!session.commit_success(req, page_with(3)));
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn failure_clears_results_to_the_empty_page() {
        let mut session = SearchSession::new(10);
        let req = session.initial_ticket();
        assert!(session.commit_success(req, page_with(7)));

        let t = session.note_criteria_changed();
        let req = session.timer_fired(t).unwrap();
        assert!(session.commit_failure(req));
        assert_eq!(session.results, SearchResultPage::empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn loading_presentation_depends_on_current_results() {
        let mut session = SearchSession::new(10);
        let req = session.initial_ticket();
        assert!(session.show_full_loading());
        assert!(!session.show_inline_updating());

        assert!(session.commit_success(req, page_with(3)));
        assert!(!session.is_loading());

        let t = session.set_page(2);
        let _req = session.timer_fired(t).unwrap();
        assert!(session.show_inline_updating());
        assert!(!session.show_full_loading());
    }
}
