//! # Gridkit engine
//!
//! The generic data-grid pipeline: given an in-memory ordered collection of
//! records and a declarative table configuration, produce the visible row
//! set for one render cycle.
//!
//! Data flows one direction per cycle:
//!
//! ```text
//! records -> filter -> sort -> paginate -> GridView
//! ```
//!
//! User intents (query edits, header clicks, page clicks, action clicks)
//! mutate the [`GridState`] orchestrator, which recomputes the pipeline as a
//! pure function of its current inputs on the next [`GridState::snapshot`].
//! The engine owns no I/O and never mutates the record collection; callers
//! express mutations by handing in a new collection on the next cycle.

mod dispatch;
mod filter;
mod grid;
mod page;
mod sort;

pub use dispatch::{DispatchOutcome, PendingAction, cancel, confirm, dispatch, pending_confirmation};
pub use filter::apply_filter;
pub use grid::{EmptyKind, GridState, GridView, RowView};
pub use page::{PageInfo, paginate};
pub use sort::apply_sort;
