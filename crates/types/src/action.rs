//! Row actions and confirmation metadata.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Visual weight of a confirmation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    /// Destructive operations (delete and friends).
    Danger,
}

/// Text and styling for the confirmation surface of a gated action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
}

impl ConfirmationConfig {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }
}

/// Side-effect handler for an action, invoked with the record and its index
/// within the caller's collection.
pub type ActionHandler<T> = Arc<dyn Fn(&T, usize) + Send + Sync>;

/// Per-row visibility predicate. Actions returning `false` are omitted from
/// that row entirely, not disabled.
pub type ShowFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// One caller-defined operation triggerable per row.
///
/// A single structural record rather than an action-kind hierarchy: the
/// optional confirmation sub-record is the only thing distinguishing a
/// destructive action from a direct one.
pub struct RowAction<T> {
    pub label: String,
    /// Short glyph shown in the actions cell (e.g. `✎`).
    pub icon: Option<String>,
    handler: ActionHandler<T>,
    pub requires_confirmation: bool,
    pub confirmation: Option<ConfirmationConfig>,
    pub show: Option<ShowFn<T>>,
}

impl<T> RowAction<T> {
    pub fn new(label: impl Into<String>, handler: impl Fn(&T, usize) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            handler: Arc::new(handler),
            requires_confirmation: false,
            confirmation: None,
            show: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Gate the action behind a confirmation surface. The handler will not
    /// run until the user affirmatively confirms.
    pub fn with_confirmation(mut self, config: ConfirmationConfig) -> Self {
        self.requires_confirmation = true;
        self.confirmation = Some(config);
        self
    }

    pub fn show_if(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.show = Some(Arc::new(predicate));
        self
    }

    /// Whether this action appears on the given row's menu.
    pub fn is_visible(&self, record: &T) -> bool {
        match &self.show {
            Some(predicate) => predicate(record),
            None => true,
        }
    }

    /// Run the handler. Callers are responsible for the confirmation
    /// protocol; this is the direct invocation.
    pub fn invoke(&self, record: &T, index: usize) {
        (self.handler)(record, index);
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            handler: self.handler.clone(),
            requires_confirmation: self.requires_confirmation,
            confirmation: self.confirmation.clone(),
            show: self.show.clone(),
        }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("requires_confirmation", &self.requires_confirmation)
            .field("confirmation", &self.confirmation)
            .field("show", &self.show.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
