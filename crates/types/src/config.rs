//! Per-table configuration records and validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::RowAction;
use crate::column::{Align, Column};

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration mistakes a caller can make when wiring a table.
///
/// The engine itself degrades gracefully at render time; validation exists
/// so callers can surface these early instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duplicate column key `{0}`")]
    DuplicateColumnKey(String),
    #[error("action `{0}` requires confirmation but has no confirmation config")]
    MissingConfirmation(String),
}

/// Everything describing one table instance: columns plus the action strip.
#[derive(Debug, Clone)]
pub struct TableConfig<T> {
    pub columns: Vec<Column<T>>,
    pub show_actions: bool,
    pub actions: Vec<RowAction<T>>,
    pub actions_label: String,
    pub actions_align: Align,
}

impl<T> TableConfig<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            show_actions: false,
            actions: Vec::new(),
            actions_label: "Actions".to_string(),
            actions_align: Align::Center,
        }
    }

    pub fn actions(mut self, actions: Vec<RowAction<T>>) -> Self {
        self.show_actions = !actions.is_empty();
        self.actions = actions;
        self
    }

    pub fn actions_label(mut self, label: impl Into<String>) -> Self {
        self.actions_label = label.into();
        self
    }

    /// Look up a column by its key.
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|column| column.key == key)
    }

    /// Check the structural invariants: column keys unique within the
    /// instance, and every confirmation-gated action carries its config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.key.as_str()) {
                return Err(ConfigError::DuplicateColumnKey(column.key.clone()));
            }
        }
        for action in &self.actions {
            if action.requires_confirmation && action.confirmation.is_none() {
                return Err(ConfigError::MissingConfirmation(action.label.clone()));
            }
        }
        Ok(())
    }
}

/// Free-text search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub enabled: bool,
    /// Field names the query is matched against (logical OR). An empty list
    /// makes filtering a no-op, not an error.
    #[serde(default)]
    pub search_keys: Vec<String>,
}

impl FilterConfig {
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            search_keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

/// Fixed-size paging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub enabled: bool,
    pub page_size: usize,
}

impl PaginationConfig {
    pub fn page_size(page_size: usize) -> Self {
        Self {
            enabled: true,
            page_size,
        }
    }

    /// Page size with the documented floor of 1, so a zero or otherwise
    /// nonsensical configuration can never divide by zero.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ConfirmationConfig, Severity};
    use serde_json::Value;

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name").sortable(true),
            Column::new("price", "Price").sortable(true),
        ]
    }

    #[test]
    fn validate_accepts_well_formed_config() {
        let config = TableConfig::new(columns()).actions(vec![
            RowAction::new("Delete", |_, _| {}).with_confirmation(ConfirmationConfig::new(
                "Delete",
                "Sure?",
                Severity::Danger,
            )),
        ]);
        assert_eq!(config.validate(), Ok(()));
        assert!(config.show_actions);
    }

    #[test]
    fn validate_rejects_duplicate_keys() {
        let mut cols = columns();
        cols.push(Column::new("name", "Name again"));
        let config: TableConfig<Value> = TableConfig::new(cols);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateColumnKey("name".into()))
        );
    }

    #[test]
    fn validate_rejects_bare_confirmation_gate() {
        let mut action: RowAction<Value> = RowAction::new("Delete", |_, _| {});
        action.requires_confirmation = true;
        let config = TableConfig::new(columns()).actions(vec![action]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingConfirmation("Delete".into()))
        );
    }

    #[test]
    fn page_size_floor_is_one() {
        let config = PaginationConfig {
            enabled: true,
            page_size: 0,
        };
        assert_eq!(config.effective_page_size(), 1);
        assert_eq!(PaginationConfig::page_size(8).effective_page_size(), 8);
    }
}
