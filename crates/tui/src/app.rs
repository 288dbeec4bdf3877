//! Application state and update logic for the grid UI.
//!
//! The app owns the record collection and the per-table configuration, and
//! wraps one [`GridState`] instance. Action handlers communicate back by
//! pushing [`GridCommand`]s into a shared sink; the update loop drains the
//! sink after each dispatch, so mutations always happen between cycles and
//! never mid-render.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use gridkit_engine::{DispatchOutcome, GridState, GridView};
use gridkit_types::{FilterConfig, PaginationConfig, TableConfig};

/// Commands emitted by row-action handlers for the app to apply after the
/// update cycle. Deletion rebuilds the collection rather than mutating it
/// in place under the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum GridCommand {
    /// Remove the record (matched by value) from the collection.
    Remove(Value),
    /// Open the read-only detail modal for the record.
    Inspect(Value),
}

/// Shared queue wired into action handler closures.
pub type CommandSink = Arc<Mutex<Vec<GridCommand>>>;

/// Which surface receives plain key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The search bar above the grid.
    Search,
    /// The grid body (row/column selection, actions, paging).
    #[default]
    Grid,
}

/// Modal overlay atop the grid, at most one open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    None,
    /// Confirmation surface for the pending destructive action.
    Confirm,
    /// Field-by-field view of one record.
    Detail(Value),
}

/// Which confirmation button is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    Confirm,
    /// Dismissal is the safe default for destructive actions.
    #[default]
    Cancel,
}

/// User intents the key handler translates events into.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    FocusNext,
    SearchChar(char),
    SearchBackspace,
    SearchClear,
    MoveRow(isize),
    MoveColumn(isize),
    /// Toggle the sort cycle on the selected column header.
    SortSelected,
    NextPage,
    PrevPage,
    FirstPage,
    /// Trigger the n-th configured action on the selected row.
    ActionPressed(usize),
    ConfirmToggle,
    /// Resolve the confirmation modal with the focused choice.
    ConfirmResolve,
    /// Close whichever modal is open; equivalent to cancel.
    ModalClose,
    Quit,
}

/// Side effects the runtime executes after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Quit,
}

pub struct App {
    pub records: Vec<Value>,
    pub config: TableConfig<Value>,
    pub filter: FilterConfig,
    pub pagination: PaginationConfig,
    pub grid: GridState<Value>,
    pub focus: Focus,
    /// Selection within the visible page, clamped each cycle.
    pub selected_row: usize,
    /// Highlighted column header, the target of [`Msg::SortSelected`].
    pub selected_column: usize,
    pub modal: Modal,
    pub confirm_choice: ConfirmChoice,
    /// Suppresses row and pagination rendering entirely while set.
    pub loading: bool,
    /// Caller-supplied empty-state message; falls back to defaults that
    /// distinguish no-data from no-match.
    pub empty_message: Option<String>,
    /// Queue shared with the action handler closures.
    pub commands: CommandSink,
    /// One-line status shown in the footer after an action ran.
    pub status: Option<String>,
}

impl App {
    pub fn new(
        records: Vec<Value>,
        config: TableConfig<Value>,
        filter: FilterConfig,
        pagination: PaginationConfig,
        commands: CommandSink,
    ) -> Self {
        Self {
            records,
            config,
            filter,
            pagination,
            grid: GridState::new(),
            focus: Focus::default(),
            selected_row: 0,
            selected_column: 0,
            modal: Modal::None,
            confirm_choice: ConfirmChoice::default(),
            loading: false,
            empty_message: None,
            commands,
            status: None,
        }
    }

    /// Swap in a different dataset, resetting all grid-owned state.
    pub fn replace_records(&mut self, records: Vec<Value>) {
        self.records = records;
        self.grid.reset_for_dataset();
        self.selected_row = 0;
        self.loading = false;
    }

    /// Toggle the loading placeholder. While set, the grid body and the
    /// paging controls are suppressed entirely; callers preparing a dataset
    /// out of band set this, then clear it via [`App::replace_records`].
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.status = None;
        }
    }

    /// Recompute the pipeline for the current cycle and clamp the row
    /// selection to the visible page.
    pub fn view(&mut self) -> GridView {
        let view = self
            .grid
            .snapshot(&self.records, &self.config, &self.filter, &self.pagination);
        self.selected_row = self.selected_row.min(view.rows.len().saturating_sub(1));
        view
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::Quit => effects.push(Effect::Quit),
            Msg::FocusNext => {
                self.focus = match self.focus {
                    Focus::Search => Focus::Grid,
                    Focus::Grid => Focus::Search,
                };
            }
            Msg::SearchChar(c) => {
                self.grid.push_query_char(c);
                self.selected_row = 0;
            }
            Msg::SearchBackspace => {
                self.grid.pop_query_char();
                self.selected_row = 0;
            }
            Msg::SearchClear => {
                self.grid.clear_query();
                self.selected_row = 0;
            }
            Msg::MoveRow(delta) => {
                let rows = self.view().rows.len();
                if rows > 0 {
                    let current = self.selected_row as isize;
                    self.selected_row = current.saturating_add(delta).clamp(0, rows as isize - 1) as usize;
                }
            }
            Msg::MoveColumn(delta) => {
                let columns = self.config.columns.len();
                if columns > 0 {
                    let current = self.selected_column as isize;
                    self.selected_column =
                        current.saturating_add(delta).clamp(0, columns as isize - 1) as usize;
                }
            }
            Msg::SortSelected => {
                if let Some(column) = self.config.columns.get(self.selected_column) {
                    let key = column.key.clone();
                    self.grid.sort_clicked(&self.config, &key);
                }
            }
            Msg::NextPage => self.grid.next_page(),
            Msg::PrevPage => self.grid.prev_page(),
            Msg::FirstPage => self.grid.first_page(),
            Msg::ActionPressed(position) => self.press_action(position),
            Msg::ConfirmToggle => {
                self.confirm_choice = match self.confirm_choice {
                    ConfirmChoice::Confirm => ConfirmChoice::Cancel,
                    ConfirmChoice::Cancel => ConfirmChoice::Confirm,
                };
            }
            Msg::ConfirmResolve => self.resolve_confirmation(),
            Msg::ModalClose => {
                // Any dismissal path is a cancel; cancel is idempotent.
                self.grid.cancel_pending();
                self.modal = Modal::None;
            }
        }
        effects
    }

    fn press_action(&mut self, position: usize) {
        let view = self.view();
        let Some(row) = view.rows.get(self.selected_row) else {
            return;
        };
        if !row.actions.contains(&position) {
            return;
        }
        let index = row.index;
        let record = self.records[index].clone();
        match self.grid.action_clicked(&self.config, position, &record, index) {
            DispatchOutcome::ConfirmationRequested => {
                self.modal = Modal::Confirm;
                self.confirm_choice = ConfirmChoice::default();
            }
            DispatchOutcome::Invoked => self.drain_commands(),
            DispatchOutcome::Ignored => {}
        }
    }

    fn resolve_confirmation(&mut self) {
        match self.confirm_choice {
            ConfirmChoice::Confirm => {
                if self.grid.confirm_pending(&self.records, &self.config) {
                    self.drain_commands();
                }
            }
            ConfirmChoice::Cancel => self.grid.cancel_pending(),
        }
        self.modal = Modal::None;
    }

    /// Apply commands the action handlers queued during dispatch.
    fn drain_commands(&mut self) {
        let drained: Vec<GridCommand> = std::mem::take(&mut *self.commands.lock().unwrap());
        for command in drained {
            match command {
                GridCommand::Remove(target) => {
                    // One handler run removes one record; value-equal
                    // duplicates past the first stay put.
                    if let Some(position) =
                        self.records.iter().position(|record| *record == target)
                    {
                        self.records.remove(position);
                        self.status = Some("Record deleted".to_string());
                    }
                }
                GridCommand::Inspect(record) => {
                    self.modal = Modal::Detail(record);
                }
            }
        }
    }
}
