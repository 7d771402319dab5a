use crate::action::{HeaderAction, SortEvent};
use crate::engine::{current_direction, display_class, next_direction};
use crate::models::{Column, SelectionType, SortCycle, SortDirection, SortList, SortMode};

const HEADER_CELL_CLASS: &str = "datatable-header-cell";
const SORT_BTN_CLASS: &str = "sort-btn";
const SORT_ACTIVE_CLASS: &str = "sort-active";

pub const DEFAULT_ASC_ICON: &str = "datatable-icon-up";
pub const DEFAULT_DESC_ICON: &str = "datatable-icon-down";

/// Grid-wide inputs shared by every header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSettings {
    pub sort_type: SortMode,
    pub sort_cycle: SortCycle,
    pub sort_ascending_icon: String,
    pub sort_descending_icon: String,
    pub selection_type: Option<SelectionType>,
    pub all_rows_selected: bool,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            sort_type: SortMode::default(),
            sort_cycle: SortCycle::default(),
            sort_ascending_icon: DEFAULT_ASC_ICON.to_owned(),
            sort_descending_icon: DEFAULT_DESC_ICON.to_owned(),
            selection_type: None,
            all_rows_selected: false,
        }
    }
}

/// Presentation state of one header cell.
///
/// Nothing is cached: each accessor derives its value from the borrowed sort list, so a cell
/// built once keeps reflecting the list it was given.
#[derive(Debug, Clone, Copy)]
pub struct HeaderCell<'a> {
    column: &'a Column,
    sorts: &'a SortList,
    settings: &'a HeaderSettings,
}

impl<'a> HeaderCell<'a> {
    pub fn new(column: &'a Column, sorts: &'a SortList, settings: &'a HeaderSettings) -> Self {
        Self { column, sorts, settings }
    }

    #[inline]
    pub fn sort_dir(&self) -> SortDirection {
        current_direction(self.sorts, &self.column.prop)
    }

    /// Mode used when this column is triggered.
    pub fn sort_mode(&self) -> SortMode {
        self.column.sort_mode.unwrap_or(self.settings.sort_type)
    }

    /// Cycle used when this column is triggered.
    pub fn sort_cycle(&self) -> SortCycle {
        SortCycle::resolve(self.column.sort_cycle, self.settings.sort_cycle)
    }

    /// Classes of the sort indicator button, e.g. `sort-btn sort-asc datatable-icon-up`.
    pub fn sort_class(&self) -> String {
        let dir = self.sort_dir();
        let icon = match dir {
            SortDirection::Ascending => self.settings.sort_ascending_icon.as_str(),
            SortDirection::Descending => self.settings.sort_descending_icon.as_str(),
            SortDirection::None => return SORT_BTN_CLASS.to_owned(),
        };
        join_classes([SORT_BTN_CLASS, display_class(dir), icon])
    }

    /// Classes of the cell itself.
    pub fn css_classes(&self) -> String {
        let mut classes = vec![HEADER_CELL_CLASS];
        if self.column.sortable {
            classes.push("sortable");
        }
        if self.column.resizeable {
            classes.push("resizeable");
        }
        if let Some(header_class) = &self.column.header_class {
            classes.extend(header_class.tokens());
        }
        let dir = self.sort_dir();
        if !dir.is_none() {
            classes.push(SORT_ACTIVE_CLASS);
            classes.push(display_class(dir));
        }
        join_classes(classes)
    }

    /// The label, unless the column draws its header through a template.
    pub fn title(&self) -> Option<&'a str> {
        if self.column.has_header_template { None } else { Some(self.column.name()) }
    }

    pub fn is_checkboxable(&self) -> bool {
        self.column.checkboxable
            && self.column.header_checkboxable
            && self.settings.selection_type == Some(SelectionType::Checkbox)
    }

    /// Sort trigger. Non-sortable columns emit nothing.
    pub fn on_sort(&self) -> Option<HeaderAction> {
        if !self.column.sortable {
            return None;
        }
        let prev_value = self.sort_dir();
        let new_value = next_direction(self.sort_cycle(), prev_value);
        Some(HeaderAction::Sort(SortEvent {
            column: self.column.prop.clone(),
            prev_value,
            new_value,
            mode: self.sort_mode(),
        }))
    }

    pub fn on_select(&self) -> HeaderAction {
        HeaderAction::Select(!self.settings.all_rows_selected)
    }
}

fn join_classes<'s, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'s str>,
{
    classes.into_iter().filter(|c| !c.is_empty()).collect::<Vec<_>>().join(" ")
}
