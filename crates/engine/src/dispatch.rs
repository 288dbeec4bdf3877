//! Row-action dispatch and the confirmation state machine.
//!
//! Destructive actions run through a two-state protocol:
//!
//! ```text
//! Idle -> (click, requires_confirmation) -> Pending -> (confirm) -> Idle
//!                                           Pending -> (cancel)  -> Idle
//! Idle -> (click, direct)                -> Idle      (handler runs now)
//! ```
//!
//! At most one confirmation is pending at a time; a second gated click while
//! pending replaces the pending target. Every dismissal path (escape,
//! backdrop, explicit cancel) is a cancel.

use gridkit_types::{ConfirmationConfig, RowAction};

/// Transient confirmation state owned by the orchestrator. An explicit
/// variant rather than nullable fields so an armed confirmation always
/// carries its target.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction<T> {
    Idle,
    Pending {
        /// Snapshot of the record the action was clicked on. Identity is
        /// re-checked against the live collection at confirm time, so a
        /// concurrent mutation cannot redirect the effect to another row.
        record: T,
        /// Index at click time, passed to the handler as a hint.
        index: usize,
        /// Position of the clicked action within `TableConfig::actions`.
        action: usize,
    },
}

impl<T> Default for PendingAction<T> {
    fn default() -> Self {
        PendingAction::Idle
    }
}

impl<T> PendingAction<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, PendingAction::Pending { .. })
    }
}

/// What a single action click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Direct action: the handler already ran, exactly once.
    Invoked,
    /// Gated action: the confirmation surface should open.
    ConfirmationRequested,
    /// The action is hidden for this row (or the index named no action);
    /// nothing happened.
    Ignored,
}

/// Resolve one action click against one row.
pub fn dispatch<T: Clone>(
    actions: &[RowAction<T>],
    action_index: usize,
    record: &T,
    index: usize,
    pending: &mut PendingAction<T>,
) -> DispatchOutcome {
    let Some(action) = actions.get(action_index) else {
        tracing::warn!(action_index, "action click named no configured action");
        return DispatchOutcome::Ignored;
    };
    if !action.is_visible(record) {
        return DispatchOutcome::Ignored;
    }
    if !action.requires_confirmation {
        tracing::debug!(label = %action.label, index, "direct action invoked");
        action.invoke(record, index);
        return DispatchOutcome::Invoked;
    }
    tracing::debug!(label = %action.label, index, "confirmation armed");
    *pending = PendingAction::Pending {
        record: record.clone(),
        index,
        action: action_index,
    };
    DispatchOutcome::ConfirmationRequested
}

/// Affirmative resolution: run the pending handler, then return to idle.
///
/// The record is located in the current collection by value identity before
/// the handler runs; if it is no longer present (a race with an external
/// delete) the confirm is a no-op. Returns whether the handler ran.
pub fn confirm<T: Clone + PartialEq>(
    records: &[T],
    actions: &[RowAction<T>],
    pending: &mut PendingAction<T>,
) -> bool {
    let PendingAction::Pending { record, index, action } = std::mem::take(pending) else {
        return false;
    };
    let position = match records.get(index) {
        Some(candidate) if *candidate == record => Some(index),
        _ => records.iter().position(|candidate| *candidate == record),
    };
    let Some(position) = position else {
        tracing::warn!(index, "confirmed row no longer present; dropping action");
        return false;
    };
    let Some(action) = actions.get(action) else {
        tracing::warn!("pending action no longer configured; dropping");
        return false;
    };
    action.invoke(&record, position);
    true
}

/// Negative resolution: drop the pending target without invoking anything.
/// Safe to call when already idle.
pub fn cancel<T>(pending: &mut PendingAction<T>) {
    *pending = PendingAction::Idle;
}

/// Confirmation text for the currently pending action, if any.
pub fn pending_confirmation<'a, T>(
    actions: &'a [RowAction<T>],
    pending: &PendingAction<T>,
) -> Option<&'a ConfirmationConfig> {
    let PendingAction::Pending { action, .. } = pending else {
        return None;
    };
    actions.get(*action)?.confirmation.as_ref()
}
