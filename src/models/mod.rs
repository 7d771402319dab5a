mod column;
pub mod sort;

pub use column::{Column, HeaderClass, SelectionType};
pub use sort::{SortCycle, SortDirection, SortEntry, SortList, SortMode};
