//! Sort specification and the header-click cycle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// The single active sort of a table instance. `key = None` leaves the
/// collection in its original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    /// Apply one header click. The cycle is tri-state: a fresh column sorts
    /// ascending, a second click flips to descending, a third clears the
    /// sort and restores original order.
    pub fn cycle(&mut self, key: &str) {
        match (&self.key, self.direction) {
            (Some(active), SortDirection::Ascending) if active == key => {
                self.direction = SortDirection::Descending;
            }
            (Some(active), SortDirection::Descending) if active == key => {
                *self = SortSpec::default();
            }
            _ => {
                self.key = Some(key.to_string());
                self.direction = SortDirection::Ascending;
            }
        }
    }
}
