pub mod header_cell;
pub mod sort_state;

pub use header_cell::{HeaderCell, HeaderSettings};
pub use sort_state::GridSortState;
