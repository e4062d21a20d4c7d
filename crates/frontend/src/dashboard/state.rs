//! View state for the sales dashboard.
//!
//! `FilterState` holds the user-controlled inputs, `DashboardState` owns
//! the last settled report, the pagination cursor and the error flash.
//! Every transition is plain Rust so the whole controller is testable
//! without a DOM.

use contracts::dashboards::sales_overview::{ChartData, SalesReportResponse, Statistics, Transaction};
use contracts::shared::Month;
use leptos::prelude::*;

/// Fixed page size. The data source returns the whole filtered set and
/// the dashboard slices it client-side.
pub const ITEMS_PER_PAGE: usize = 10;

/// Flash message shown when a fetch settles with an error.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load data. Please try again.";

/// User-controlled filter inputs. Every mutation triggers a fetch cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub month: Month,
    pub search_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            month: Month::March,
            search_text: String::new(),
        }
    }
}

/// Everything derived from the last settled fetch plus the pagination
/// cursor. Report fields are swapped wholesale, never merged.
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub transactions: Vec<Transaction>,
    pub statistics: Statistics,
    pub chart_data: ChartData,
    /// 1-based; pinned to 1 even when the result set is empty.
    pub current_page: usize,
    pub total_pages: usize,
    pub error: Option<String>,
    request_seq: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            statistics: Statistics::default(),
            chart_data: ChartData::default(),
            current_page: 1,
            total_pages: 0,
            error: None,
            request_seq: 0,
        }
    }
}

impl DashboardState {
    /// Issue a new request token. A settle is applied only while its token
    /// is still the latest one issued, so the last writer always wins.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Apply a settled fetch result. Stale results are discarded; a fresh
    /// one replaces the report, clears the flash and resets to page 1.
    /// Returns whether the result was applied.
    pub fn apply_success(&mut self, token: u64, report: SalesReportResponse) -> bool {
        if token != self.request_seq {
            return false;
        }
        let count = report.transactions.len();
        self.total_pages = (count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE;
        self.transactions = report.transactions;
        self.statistics = report.statistics;
        self.chart_data = report.chart_data;
        self.current_page = 1;
        self.error = None;
        true
    }

    /// Apply a settled fetch failure: raise the flash and leave the
    /// last-known report untouched. Stale failures are discarded as well;
    /// an error belonging to superseded filters must not shadow newer data.
    pub fn apply_failure(&mut self, token: u64) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
        true
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// The contiguous slice shown at the current pagination position,
    /// clipped to the array bounds.
    pub fn visible_page(&self) -> &[Transaction] {
        let start = ((self.current_page - 1) * ITEMS_PER_PAGE).min(self.transactions.len());
        let end = (start + ITEMS_PER_PAGE).min(self.transactions.len());
        &self.transactions[start..end]
    }
}

pub fn create_filter() -> RwSignal<FilterState> {
    RwSignal::new(FilterState::default())
}

pub fn create_state() -> RwSignal<DashboardState> {
    RwSignal::new(DashboardState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(id: u32) -> Transaction {
        Transaction {
            id,
            title: format!("Item {id}"),
            description: String::new(),
            price: 10.0 * id as f64,
            category: "misc".to_string(),
            sold: id % 2 == 0,
            image_url: String::new(),
            date_of_sale: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        }
    }

    fn report(count: u32) -> SalesReportResponse {
        SalesReportResponse {
            transactions: (1..=count).map(tx).collect(),
            statistics: Statistics::default(),
            chart_data: ChartData::default(),
        }
    }

    fn loaded(count: u32) -> DashboardState {
        let mut state = DashboardState::default();
        let token = state.begin_fetch();
        assert!(state.apply_success(token, report(count)));
        state
    }

    #[test]
    fn twenty_three_items_make_three_pages() {
        let mut state = loaded(23);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.visible_page().len(), 10);
        assert_eq!(state.visible_page()[0].id, 1);

        state.next_page();
        assert_eq!(state.visible_page().len(), 10);
        assert_eq!(state.visible_page()[0].id, 11);

        state.next_page();
        assert_eq!(state.current_page, 3);
        assert_eq!(state.visible_page().len(), 3);
        assert_eq!(state.visible_page()[0].id, 21);

        state.next_page();
        assert_eq!(state.current_page, 3, "next on the last page holds");
    }

    #[test]
    fn navigation_clamps_at_both_bounds() {
        let mut state = loaded(23);
        for _ in 0..10 {
            state.prev_page();
        }
        assert_eq!(state.current_page, 1);

        for _ in 0..10 {
            state.next_page();
        }
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn page_count_is_ceiling_of_count_over_page_size() {
        for count in [1u32, 9, 10, 11, 19, 20, 21, 99, 100] {
            let state = loaded(count);
            let expected = (count as usize + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE;
            assert_eq!(state.total_pages, expected, "count={count}");
        }
    }

    #[test]
    fn earlier_pages_are_full_and_last_page_holds_the_remainder() {
        let mut state = loaded(37);
        assert_eq!(state.total_pages, 4);
        for _ in 0..3 {
            assert_eq!(state.visible_page().len(), 10);
            state.next_page();
        }
        assert_eq!(state.visible_page().len(), 7);
    }

    #[test]
    fn success_resets_to_first_page() {
        let mut state = loaded(30);
        state.next_page();
        state.next_page();
        assert_eq!(state.current_page, 3);

        let token = state.begin_fetch();
        assert!(state.apply_success(token, report(5)));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn empty_result_pins_page_one_of_zero() {
        let mut state = loaded(0);
        assert_eq!(state.total_pages, 0);
        assert_eq!(state.current_page, 1);
        assert!(state.visible_page().is_empty());

        state.next_page();
        state.prev_page();
        assert_eq!(state.current_page, 1);
        assert!(state.visible_page().is_empty());
    }

    #[test]
    fn failure_keeps_data_and_raises_flash() {
        let mut state = loaded(12);
        state.next_page();
        let before = state.clone();

        let token = state.begin_fetch();
        assert!(state.apply_failure(token));
        assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(state.transactions, before.transactions);
        assert_eq!(state.statistics, before.statistics);
        assert_eq!(state.chart_data, before.chart_data);
        assert_eq!(state.current_page, before.current_page);
    }

    #[test]
    fn success_clears_an_earlier_flash() {
        let mut state = loaded(12);
        let token = state.begin_fetch();
        assert!(state.apply_failure(token));
        assert!(state.error.is_some());

        let token = state.begin_fetch();
        assert!(state.apply_success(token, report(4)));
        assert_eq!(state.error, None);
    }

    #[test]
    fn stale_success_is_discarded() {
        let mut state = DashboardState::default();
        let token_a = state.begin_fetch();
        let token_b = state.begin_fetch();

        assert!(state.apply_success(token_b, report(8)));
        assert!(!state.apply_success(token_a, report(2)));
        assert_eq!(state.transactions.len(), 8);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut state = DashboardState::default();
        let token_a = state.begin_fetch();
        let token_b = state.begin_fetch();

        assert!(state.apply_success(token_b, report(8)));
        assert!(!state.apply_failure(token_a));
        assert_eq!(state.error, None);
        assert_eq!(state.transactions.len(), 8);
    }
}
