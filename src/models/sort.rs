use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use delegate::delegate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Direction a column is currently sorted in.
///
/// [SortDirection::None] is a resting state only; it never appears inside a [SortList].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[derive(Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[strum(to_string = "none")]
    #[serde(rename = "none")]
    None,
    #[strum(to_string = "asc", serialize = "ascending")]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[strum(to_string = "desc", serialize = "descending")]
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    #[inline]
    pub fn is_none(self) -> bool {
        self == SortDirection::None
    }
}

/// Whether one or many columns may carry an active sort at once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Triggering a column clears every other sort.
    Single,
    /// Triggering a column leaves the other sorts untouched.
    #[default]
    Multi,
}

/// The sequence of directions a column walks through on repeated triggers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SortCycle {
    /// none -> asc -> desc -> none
    #[default]
    ThreePhase,
    /// none -> asc -> none
    TwoPhase,
    /// none -> asc -> desc -> asc, never rests once sorted
    Toggle,
}

impl SortCycle {
    /// Picks the column override when present, otherwise the configured default.
    #[inline]
    pub fn resolve(column: Option<SortCycle>, default: SortCycle) -> SortCycle {
        column.unwrap_or(default)
    }
}

/// One active sort: a column key and its (never `none`) direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortEntry {
    pub prop: String,
    pub dir: SortDirection,
}

impl SortEntry {
    pub fn new(prop: impl Into<String>, dir: SortDirection) -> Self {
        Self { prop: prop.into(), dir }
    }
}

impl fmt::Display for SortEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prop, self.dir)
    }
}

/// Parses `prop:asc` / `prop:desc`.
impl FromStr for SortEntry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prop, dir) = s
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("expected `PROP:DIR`, got `{s}`"))?;
        let prop = prop.trim();
        if prop.is_empty() {
            return Err(anyhow!("empty column key in `{s}`"));
        }
        let dir = SortDirection::from_str(dir.trim().to_ascii_lowercase().as_str())
            .with_context(|| format!("invalid sort direction in `{s}`"))?;
        if dir.is_none() {
            return Err(anyhow!("`none` is not a valid direction for an active sort: `{s}`"));
        }
        Ok(Self::new(prop, dir))
    }
}

/// Ordered record of active sorts. Earlier entries take priority.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortList(Vec<SortEntry>);

impl SortList {
    pub fn new() -> Self {
        Self::default()
    }

    delegate! {
        to self.0 {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, SortEntry>;
        }
    }

    /// Looks up the first entry with the given key.
    pub fn get(&self, prop: &str) -> Option<&SortEntry> {
        self.0.iter().find(|s| s.prop == prop)
    }

    /// Collapses duplicate keys (first occurrence wins) and drops `none` entries.
    pub fn normalized(self) -> Self {
        let mut out: Vec<SortEntry> = Vec::with_capacity(self.0.len());
        for entry in self.0 {
            if entry.dir.is_none() || out.iter().any(|e| e.prop == entry.prop) {
                continue;
            }
            out.push(entry);
        }
        Self(out)
    }
}

impl From<Vec<SortEntry>> for SortList {
    fn from(value: Vec<SortEntry>) -> Self {
        Self(value)
    }
}

impl FromIterator<SortEntry> for SortList {
    fn from_iter<I: IntoIterator<Item = SortEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SortList {
    type Item = &'a SortEntry;
    type IntoIter = std::slice::Iter<'a, SortEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SortList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
