use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::models::sort::{SortCycle, SortMode};

/// Column descriptor as seen by a header cell. Owned by the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Column {
    /// key matched against [SortEntry::prop](crate::models::SortEntry)
    pub prop: String,
    /// header label, defaults to `prop`
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// overrides the grid-wide sort mode for triggers on this column
    #[serde(default)]
    pub sort_mode: Option<SortMode>,
    /// overrides the grid-wide sort cycle for triggers on this column
    #[serde(default)]
    pub sort_cycle: Option<SortCycle>,
    #[serde(default)]
    pub resizeable: bool,
    #[serde(default)]
    pub checkboxable: bool,
    #[serde(default)]
    pub header_checkboxable: bool,
    #[serde(default)]
    pub header_class: Option<HeaderClass>,
    /// the label is drawn by a caller-supplied template, so no title is exposed
    #[serde(default)]
    pub has_header_template: bool,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// A sortable column with every other option left at its default.
    pub fn new(prop: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            name: None,
            sortable: true,
            sort_mode: None,
            sort_cycle: None,
            resizeable: false,
            checkboxable: false,
            header_checkboxable: false,
            header_class: None,
            has_header_template: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.prop)
    }
}

/// Extra classes for a header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderClass {
    Static(String),
    /// class name -> enabled, emitted in insertion order
    Flags(IndexMap<String, bool>),
}

impl HeaderClass {
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            HeaderClass::Static(s) => s.split_whitespace().collect(),
            HeaderClass::Flags(flags) => {
                flags.iter().filter(|(_, on)| **on).map(|(k, _)| k.as_str()).collect()
            }
        }
    }
}

/// How rows are selected in the grid. Only [SelectionType::Checkbox] shows a header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SelectionType {
    Single,
    Multi,
    MultiClick,
    Cell,
    Checkbox,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_column_defaults() {
        let col: Column = serde_yaml_ng::from_str("prop: age").unwrap();
        assert_eq!(col, Column::new("age"));
        assert_eq!(col.name(), "age");
        assert!(col.sortable);
    }

    #[test]
    fn test_column_full() {
        let yaml = r#"
prop: name
name: Full Name
sortable: false
sort-mode: single
sort-cycle: two-phase
resizeable: true
header-class: "bold  wide"
"#;
        let col: Column = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(col.name(), "Full Name");
        assert!(!col.sortable);
        assert_eq!(col.sort_mode, Some(SortMode::Single));
        assert_eq!(col.sort_cycle, Some(SortCycle::TwoPhase));
        assert_eq!(col.header_class.unwrap().tokens(), vec!["bold", "wide"]);
    }

    #[test]
    fn test_header_class_flags() {
        let yaml = r#"
prop: name
header-class:
  highlighted: true
  muted: false
  pinned: true
"#;
        let col: Column = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(col.header_class.unwrap().tokens(), vec!["highlighted", "pinned"]);
    }
}
