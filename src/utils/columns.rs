use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::Value;
use tracing::debug;

use crate::models::{SortDirection, SortList};

pub struct ColDef<T> {
    /// column key, matched against sort entries
    pub id: &'static str,
    pub sortable: bool,
    /// value accessor, compared as text when there is no sort key
    pub accessor: for<'a> fn(&'a T) -> Cow<'a, str>,
    /// sort key, optional. If None, use the string from accessor for sorting
    pub sort_key: Option<fn(&T) -> SortKey>,
}

impl<T> ColDef<T> {
    /// Compare two items based on this column definition
    #[inline]
    pub fn cmp(&self, a: &T, b: &T) -> Ordering {
        if let Some(f) = self.sort_key {
            f(a).cmp(&f(b))
        } else {
            let sa = (self.accessor)(a);
            let sb = (self.accessor)(b);
            sa.as_ref().cmp(sb.as_ref()) // use as_ref to avoid allocating
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        use SortKey::*;
        match self {
            Null => 0,
            Bool(_) => 1,
            I64(_) | U64(_) | F64(_) => 2,
            Str(_) => 3,
        }
    }

    /// Total order: nulls first, then bools, numbers, strings.
    pub fn cmp(&self, other: &Self) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (I64(a), I64(b)) => a.cmp(b),
            (U64(a), U64(b)) => a.cmp(b),
            (I64(a), U64(b)) => i128::from(*a).cmp(&i128::from(*b)),
            (U64(a), I64(b)) => i128::from(*a).cmp(&i128::from(*b)),
            (F64(a), F64(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
            (I64(a), F64(b)) => cmp_int_float(i128::from(*a), *b),
            (U64(a), F64(b)) => cmp_int_float(i128::from(*a), *b),
            (F64(a), I64(b)) => cmp_int_float(i128::from(*b), *a).reverse(),
            (F64(a), U64(b)) => cmp_int_float(i128::from(*b), *a).reverse(),
            (Str(a), Str(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// Exact comparison of an integer (within the `i64`/`u64` range) with a float.
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    // 2^64 and -2^63 bound every integer key
    const UPPER: f64 = 18_446_744_073_709_551_616.0;
    const LOWER: f64 = -9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() { Ordering::Greater } else { Ordering::Less };
    }
    let t = f.trunc();
    if t >= UPPER {
        return Ordering::Less;
    }
    if t < LOWER {
        return Ordering::Greater;
    }
    // `t` is integral and in range, so the cast is exact
    match i.cmp(&(t as i128)) {
        Ordering::Equal => 0f64.partial_cmp(&(f - t)).unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

impl From<&Value> for SortKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SortKey::Null,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    SortKey::U64(v)
                } else if let Some(v) = n.as_i64() {
                    SortKey::I64(v)
                } else {
                    SortKey::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => SortKey::Str(s.clone()),
            other => SortKey::Str(other.to_string()),
        }
    }
}

/// Compares rows on a single column key.
pub trait SortsRow<T> {
    /// `None` when the key is unknown or the column is not sortable.
    fn compare(&self, prop: &str, a: &T, b: &T) -> Option<Ordering>;
}

impl<T> SortsRow<T> for [ColDef<T>] {
    fn compare(&self, prop: &str, a: &T, b: &T) -> Option<Ordering> {
        self.iter().find(|c| c.id == prop && c.sortable).map(|c| c.cmp(a, b))
    }
}

/// Columns of JSON object rows, looked up by field name. Missing fields compare as null.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonColumns;

impl SortsRow<Value> for JsonColumns {
    fn compare(&self, prop: &str, a: &Value, b: &Value) -> Option<Ordering> {
        let ka = a.get(prop).map(SortKey::from).unwrap_or(SortKey::Null);
        let kb = b.get(prop).map(SortKey::from).unwrap_or(SortKey::Null);
        Some(ka.cmp(&kb))
    }
}

/// Stable multi-key sort. Earlier entries decide first, later entries break ties.
pub fn sort_rows<T, C>(rows: &mut [T], columns: &C, sorts: &SortList)
where
    C: SortsRow<T> + ?Sized,
{
    if sorts.is_empty() {
        return;
    }
    let Some(sample) = rows.first() else { return };
    let active: Vec<_> = sorts
        .iter()
        .filter(|s| !s.dir.is_none())
        .filter(|s| {
            let known = columns.compare(&s.prop, sample, sample).is_some();
            if !known {
                debug!("skip sort on unknown or non-sortable column `{}`", s.prop);
            }
            known
        })
        .collect();
    if active.is_empty() {
        return;
    }

    rows.sort_by(|a, b| {
        for s in &active {
            let ord = columns.compare(&s.prop, a, b).unwrap_or(Ordering::Equal);
            let ord = if s.dir == SortDirection::Descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}
