use serde::Serialize;

use crate::models::{SortDirection, SortMode};

/// Emitted by a header cell when its sort affordance is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortEvent {
    /// key of the triggered column
    pub column: String,
    pub prev_value: SortDirection,
    pub new_value: SortDirection,
    /// mode the transition is applied with, after column overrides
    pub mode: SortMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HeaderAction {
    Sort(SortEvent),
    /// requested "all rows selected" state
    Select(bool),
}
