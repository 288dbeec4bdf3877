//! Shared type definitions for the gridkit data-grid engine.
//!
//! This crate holds the declarative data model the engine operates on:
//! cell values and the [`Record`] field-access trait, column descriptors,
//! row actions with their confirmation metadata, and the per-table
//! configuration records (filter, pagination, sort). Everything here is
//! plain data plus small resolution helpers; the pipeline itself lives in
//! `gridkit-engine`.

mod action;
mod cell;
mod column;
mod config;
mod sort;

pub use action::{ActionHandler, ConfirmationConfig, RowAction, Severity, ShowFn};
pub use cell::{CellValue, Record};
pub use column::{Align, Column, RenderFn};
pub use config::{ConfigError, FilterConfig, PaginationConfig, TableConfig, DEFAULT_PAGE_SIZE};
pub use sort::{SortDirection, SortSpec};
