use crate::models::SortDirection;

pub mod triangle {
    pub const UP: &str = "▲";
    pub const DOWN: &str = "▼";
}

/// Indicator appended to a header label in text output.
pub fn sort_indicator(dir: SortDirection) -> &'static str {
    match dir {
        SortDirection::Ascending => triangle::UP,
        SortDirection::Descending => triangle::DOWN,
        SortDirection::None => "",
    }
}
