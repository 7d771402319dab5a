use tracing::{debug, info};

use crate::action::{HeaderAction, SortEvent};
use crate::engine::{apply_sort, current_direction, next_direction};
use crate::models::{Column, SortCycle, SortList, SortMode};

/// Grid-side owner of the active sorts.
///
/// Triggers are applied one at a time through `&mut self`; the engine itself keeps no state.
#[derive(Debug, Clone, Default)]
pub struct GridSortState {
    sorts: SortList,
    mode: SortMode,
    cycle: SortCycle,
}

impl GridSortState {
    pub fn new(mode: SortMode, cycle: SortCycle) -> Self {
        Self { sorts: SortList::new(), mode, cycle }
    }

    pub fn with_sorts(mut self, sorts: SortList) -> Self {
        self.set_sorts(sorts);
        self
    }

    pub fn sorts(&self) -> &SortList {
        &self.sorts
    }

    /// Replaces the active sorts, collapsing duplicate keys.
    pub fn set_sorts(&mut self, sorts: SortList) {
        let sorts = sorts.normalized();
        debug!("sorts replaced: [{sorts}]");
        self.sorts = sorts;
    }

    pub fn clear(&mut self) {
        self.sorts = SortList::new();
    }

    /// Runs one sort trigger on `column` and returns the transition that was applied.
    pub fn trigger(&mut self, column: &Column) -> Option<SortEvent> {
        if !column.sortable {
            debug!("ignore sort trigger on non-sortable column `{}`", column.prop);
            return None;
        }
        let prev_value = current_direction(&self.sorts, &column.prop);
        let cycle = SortCycle::resolve(column.sort_cycle, self.cycle);
        let event = SortEvent {
            column: column.prop.clone(),
            prev_value,
            new_value: next_direction(cycle, prev_value),
            mode: column.sort_mode.unwrap_or(self.mode),
        };
        self.apply(&event);
        Some(event)
    }

    /// Applies an action coming from a header cell.
    pub fn handle(&mut self, action: &HeaderAction) {
        match action {
            HeaderAction::Sort(event) => self.apply(event),
            HeaderAction::Select(_) => (),
        }
    }

    fn apply(&mut self, event: &SortEvent) {
        self.sorts = apply_sort(&self.sorts, event.mode, &event.column, event.new_value);
        info!(
            "sort `{}`: {} -> {} ({}), sorts=[{}]",
            event.column, event.prev_value, event.new_value, event.mode, self.sorts
        );
    }
}
