//! Table orchestrator: owns transient UI state and recomputes the pipeline.

use gridkit_types::{FilterConfig, PaginationConfig, Record, SortSpec, TableConfig};

use crate::dispatch::{self, DispatchOutcome, PendingAction};
use crate::page::PageInfo;
use crate::{apply_filter, apply_sort, paginate};

/// Why the post-filter collection came up empty. The caller distinguishes
/// the two only by message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// The underlying collection itself is empty.
    NoData,
    /// Records exist, but none match the active query.
    NoMatches,
}

/// One visible row: the record's original index plus resolved display text
/// per column and the indices of the actions eligible for this row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Index into the caller's record collection.
    pub index: usize,
    pub cells: Vec<String>,
    /// Positions within `TableConfig::actions`, post `show` filtering.
    /// Empty when the config hides the action strip.
    pub actions: Vec<usize>,
}

/// Derived output of one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub rows: Vec<RowView>,
    pub page: PageInfo,
    pub empty: Option<EmptyKind>,
}

/// The orchestrator. Owns query text, sort spec, current page, and the
/// pending confirmation; everything else is recomputed per cycle from the
/// inputs the caller supplies to [`GridState::snapshot`].
///
/// State here is private to one table instance. When the caller swaps in a
/// semantically different dataset it must call
/// [`GridState::reset_for_dataset`]; the grid never guesses.
#[derive(Debug, Clone)]
pub struct GridState<T> {
    query: String,
    sort: SortSpec,
    page: usize,
    pending: PendingAction<T>,
}

impl<T> Default for GridState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridState<T> {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sort: SortSpec::default(),
            page: 1,
            pending: PendingAction::Idle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn pending(&self) -> &PendingAction<T> {
        &self.pending
    }

    /// Replace the whole query. This is the externally-driven-query entry
    /// point: a caller owning its own search bar pushes text in here and the
    /// grid does not re-derive its own.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.page = 1;
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.page = 1;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.page = 1;
    }

    /// Header click. Only sortable columns participate; the tri-state cycle
    /// lives in [`SortSpec::cycle`].
    pub fn sort_clicked(&mut self, config: &TableConfig<T>, key: &str) {
        let sortable = config.column(key).is_some_and(|column| column.sortable);
        if !sortable {
            return;
        }
        self.sort.cycle(key);
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jump straight to a page; clamped against the collection on the next
    /// snapshot.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Drop all owned state. Callers invoke this when the record
    /// collection's identity changes (switching datasets), so stale query,
    /// sort, page, or pending confirmations never leak across.
    pub fn reset_for_dataset(&mut self) {
        self.query.clear();
        self.sort = SortSpec::default();
        self.page = 1;
        self.pending = PendingAction::Idle;
    }

    /// Dismissal of the confirmation surface by any mechanism.
    pub fn cancel_pending(&mut self) {
        dispatch::cancel(&mut self.pending);
    }
}

impl<T: Record + Clone> GridState<T> {
    /// Run one pipeline cycle: filter, sort, paginate, resolve cells.
    ///
    /// Pure given its inputs apart from re-clamping the owned page number:
    /// a collection that shrank below the previous page's lower bound lands
    /// on a valid page instead of an empty one with stale controls.
    pub fn snapshot(
        &mut self,
        records: &[T],
        config: &TableConfig<T>,
        filter: &FilterConfig,
        pagination: &PaginationConfig,
    ) -> GridView {
        let filtered = apply_filter(records, &self.query, filter);
        let empty = if filtered.is_empty() {
            Some(if records.is_empty() {
                EmptyKind::NoData
            } else {
                EmptyKind::NoMatches
            })
        } else {
            None
        };
        let sorted = apply_sort(records, filtered, &config.columns, &self.sort);
        let page = paginate(sorted.len(), pagination, self.page);
        self.page = page.current_page;

        let rows = sorted[page.start..page.end]
            .iter()
            .map(|&index| {
                let record = &records[index];
                let cells = config
                    .columns
                    .iter()
                    .map(|column| column.display_value(record))
                    .collect();
                let actions = if config.show_actions {
                    config
                        .actions
                        .iter()
                        .enumerate()
                        .filter(|(_, action)| action.is_visible(record))
                        .map(|(position, _)| position)
                        .collect()
                } else {
                    Vec::new()
                };
                RowView { index, cells, actions }
            })
            .collect();

        GridView { rows, page, empty }
    }

    /// Route an action click through the dispatcher.
    pub fn action_clicked(
        &mut self,
        config: &TableConfig<T>,
        action_index: usize,
        record: &T,
        index: usize,
    ) -> DispatchOutcome {
        dispatch::dispatch(&config.actions, action_index, record, index, &mut self.pending)
    }
}

impl<T: Clone + PartialEq> GridState<T> {
    /// Affirmative confirmation resolution; see [`dispatch::confirm`].
    pub fn confirm_pending(&mut self, records: &[T], config: &TableConfig<T>) -> bool {
        dispatch::confirm(records, &config.actions, &mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_types::{Column, ConfirmationConfig, RowAction, Severity};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    fn records(n: usize) -> Vec<Value> {
        (1..=n)
            .map(|i| {
                json!({
                    "name": format!("item-{i:02}"),
                    "price": (i as f64) * 1.5,
                    "group": if i % 2 == 0 { "even" } else { "odd" },
                })
            })
            .collect()
    }

    fn config() -> TableConfig<Value> {
        TableConfig::new(vec![
            Column::new("name", "Name").sortable(true),
            Column::new("price", "Price")
                .sortable(true)
                .render(|raw, _| format!("${:.2}", raw.as_f64().unwrap_or_default())),
            Column::new("group", "Group"),
        ])
    }

    fn filter() -> FilterConfig {
        FilterConfig::keys(["name"])
    }

    fn pages_of(page_size: usize) -> PaginationConfig {
        PaginationConfig::page_size(page_size)
    }

    #[test]
    fn first_page_of_ten_records_at_size_eight() {
        let records = records(10);
        let mut grid: GridState<Value> = GridState::new();
        let view = grid.snapshot(&records, &config(), &filter(), &pages_of(8));

        assert_eq!(view.rows.len(), 8);
        assert_eq!(view.page.total_pages, 2);
        assert_eq!(view.rows[0].cells, vec!["item-01", "$1.50", "odd"]);
        assert!(view.empty.is_none());
        assert!(view.page.controls_visible);
    }

    #[test]
    fn query_with_no_matches_shows_empty_state_and_hides_paging() {
        let records = records(10);
        let mut grid: GridState<Value> = GridState::new();
        grid.set_query("zz");
        let view = grid.snapshot(&records, &config(), &filter(), &pages_of(8));

        assert!(view.rows.is_empty());
        assert_eq!(view.empty, Some(EmptyKind::NoMatches));
        assert_eq!(view.page.total_pages, 1);
        assert!(!view.page.controls_visible);
    }

    #[test]
    fn empty_collection_is_distinguished_from_no_matches() {
        let mut grid: GridState<Value> = GridState::new();
        let view = grid.snapshot(&[], &config(), &filter(), &pages_of(8));
        assert_eq!(view.empty, Some(EmptyKind::NoData));
    }

    #[test]
    fn sort_click_cycle_matches_header_contract() {
        let records = records(3);
        let cfg = config();
        let mut grid: GridState<Value> = GridState::new();

        grid.sort_clicked(&cfg, "price");
        let view = grid.snapshot(&records, &cfg, &filter(), &pages_of(8));
        assert_eq!(view.rows[0].cells[0], "item-01");

        grid.sort_clicked(&cfg, "price");
        let view = grid.snapshot(&records, &cfg, &filter(), &pages_of(8));
        assert_eq!(view.rows[0].cells[0], "item-03");

        // A different sortable column discards the price sort entirely.
        grid.sort_clicked(&cfg, "name");
        assert_eq!(grid.sort().key.as_deref(), Some("name"));
        assert_eq!(grid.sort().direction, gridkit_types::SortDirection::Ascending);
    }

    #[test]
    fn non_sortable_column_clicks_are_ignored() {
        let cfg = config();
        let mut grid: GridState<Value> = GridState::new();
        grid.sort_clicked(&cfg, "group");
        assert!(!grid.sort().is_active());
    }

    #[test]
    fn pipeline_is_idempotent_for_fixed_state() {
        let records = records(25);
        let cfg = config();
        let mut grid: GridState<Value> = GridState::new();
        grid.set_query("item");
        grid.sort_clicked(&cfg, "name");
        grid.set_page(2);

        let first = grid.snapshot(&records, &cfg, &filter(), &pages_of(8));
        let second = grid.snapshot(&records, &cfg, &filter(), &pages_of(8));
        assert_eq!(first, second);
    }

    #[test]
    fn deletion_emptying_last_page_reclamps() {
        let mut records = records(9);
        let cfg = config();
        let mut grid: GridState<Value> = GridState::new();
        grid.set_page(2);
        let view = grid.snapshot(&records, &cfg, &filter(), &pages_of(8));
        assert_eq!(view.page.current_page, 2);
        assert_eq!(view.rows.len(), 1);

        // Caller rebuilds the collection without the page-2 record.
        records.pop();
        let view = grid.snapshot(&records, &cfg, &filter(), &pages_of(8));
        assert_eq!(view.page.current_page, 1);
        assert_eq!(grid.current_page(), 1);
        assert_eq!(view.rows.len(), 8);
    }

    #[test]
    fn query_edits_reset_to_first_page() {
        let mut grid: GridState<Value> = GridState::new();
        grid.set_page(3);
        grid.push_query_char('a');
        assert_eq!(grid.current_page(), 1);
        grid.set_page(3);
        grid.pop_query_char();
        assert_eq!(grid.current_page(), 1);
    }

    #[test]
    fn confirmed_delete_runs_caller_handler() {
        let deleted: Arc<Mutex<Vec<usize>>> = Arc::default();
        let sink = deleted.clone();
        let cfg = config().actions(vec![
            RowAction::new("Delete", move |_, index| sink.lock().unwrap().push(index))
                .with_confirmation(ConfirmationConfig::new(
                    "Delete Record",
                    "This action cannot be undone.",
                    Severity::Danger,
                )),
        ]);
        let records = records(3);
        let mut grid: GridState<Value> = GridState::new();

        let outcome = grid.action_clicked(&cfg, 0, &records[1], 1);
        assert_eq!(outcome, DispatchOutcome::ConfirmationRequested);
        assert!(grid.pending().is_pending());

        assert!(grid.confirm_pending(&records, &cfg));
        assert_eq!(deleted.lock().unwrap().as_slice(), &[1]);
        assert!(!grid.pending().is_pending());
    }

    #[test]
    fn cancel_pending_is_safe_when_idle() {
        let mut grid: GridState<Value> = GridState::new();
        grid.cancel_pending();
        assert!(!grid.pending().is_pending());
    }

    #[test]
    fn hidden_actions_are_omitted_per_row() {
        let cfg = config().actions(vec![
            RowAction::new("Edit", |_, _| {}),
            RowAction::new("Promote", |_: &Value, _| {}).show_if(|row| row["group"] == "even"),
        ]);
        let records = records(2);
        let mut grid: GridState<Value> = GridState::new();
        let view = grid.snapshot(&records, &cfg, &filter(), &pages_of(8));

        assert_eq!(view.rows[0].actions, vec![0]);
        assert_eq!(view.rows[1].actions, vec![0, 1]);
    }

    #[test]
    fn dataset_reset_clears_all_owned_state() {
        let cfg = config();
        let mut grid: GridState<Value> = GridState::new();
        grid.set_query("item");
        grid.sort_clicked(&cfg, "name");
        grid.set_page(2);

        grid.reset_for_dataset();
        assert_eq!(grid.query(), "");
        assert!(!grid.sort().is_active());
        assert_eq!(grid.current_page(), 1);
        assert!(!grid.pending().is_pending());
    }
}
