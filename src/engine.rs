//! Sort-state engine for a header cell.
//!
//! Every function here is pure: the caller owns the [SortList] and replaces it with whatever
//! [apply_sort] returns.

use std::collections::HashSet;

use const_format::concatcp;

use crate::models::{SortCycle, SortDirection, SortEntry, SortList, SortMode};

const SORT_CLASS_PREFIX: &str = "sort-";
pub const SORT_ASC_CLASS: &str = concatcp!(SORT_CLASS_PREFIX, "asc");
pub const SORT_DESC_CLASS: &str = concatcp!(SORT_CLASS_PREFIX, "desc");
pub const SORT_NONE_CLASS: &str = "";

/// Direction of the first entry keyed by `prop`, [SortDirection::None] when there is none.
pub fn current_direction(sorts: &SortList, prop: &str) -> SortDirection {
    sorts.get(prop).map(|s| s.dir).unwrap_or_default()
}

/// Successor of `current` within `cycle`. Total over every state.
pub fn next_direction(cycle: SortCycle, current: SortDirection) -> SortDirection {
    use SortDirection::*;
    match (cycle, current) {
        (_, None) => Ascending,
        (SortCycle::ThreePhase | SortCycle::Toggle, Ascending) => Descending,
        (SortCycle::ThreePhase, Descending) => None,
        (SortCycle::Toggle, Descending) => Ascending,
        // descending is not part of the two-phase cycle, fall back to rest
        (SortCycle::TwoPhase, Ascending | Descending) => None,
    }
}

/// Builds the list that results from moving `prop` to `next`.
///
/// In [SortMode::Single] every other entry is dropped. In [SortMode::Multi] the other entries
/// keep their order, `prop` is updated in place, appended when new, or removed when `next` is
/// [SortDirection::None]. The output never holds the same key twice.
pub fn apply_sort(sorts: &SortList, mode: SortMode, prop: &str, next: SortDirection) -> SortList {
    match mode {
        SortMode::Single => {
            if next.is_none() {
                SortList::new()
            } else {
                SortList::from(vec![SortEntry::new(prop, next)])
            }
        }
        SortMode::Multi => {
            let mut out: Vec<SortEntry> = Vec::with_capacity(sorts.len() + 1);
            let mut seen: HashSet<&str> = HashSet::with_capacity(sorts.len());
            let mut placed = false;
            for entry in sorts {
                // first occurrence of a key wins
                if !seen.insert(entry.prop.as_str()) {
                    continue;
                }
                if entry.prop == prop {
                    if !next.is_none() {
                        out.push(SortEntry::new(prop, next));
                    }
                    placed = true;
                } else {
                    out.push(entry.clone());
                }
            }
            if !placed && !next.is_none() {
                out.push(SortEntry::new(prop, next));
            }
            SortList::from(out)
        }
    }
}

/// Class token for the sort indicator.
pub const fn display_class(dir: SortDirection) -> &'static str {
    match dir {
        SortDirection::Ascending => SORT_ASC_CLASS,
        SortDirection::Descending => SORT_DESC_CLASS,
        SortDirection::None => SORT_NONE_CLASS,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    fn list(entries: &[(&str, SortDirection)]) -> SortList {
        entries.iter().map(|(p, d)| SortEntry::new(*p, *d)).collect()
    }

    #[test]
    fn test_current_direction() {
        let sorts = list(&[("age", SortDirection::Ascending), ("name", SortDirection::Descending)]);
        assert_eq!(current_direction(&sorts, "name"), SortDirection::Descending);
        assert_eq!(current_direction(&sorts, "name"), SortDirection::Descending);
        assert_eq!(current_direction(&sorts, "missing"), SortDirection::None);
        assert_eq!(current_direction(&SortList::new(), "age"), SortDirection::None);
    }

    #[test]
    fn test_current_direction_first_match() {
        let sorts = list(&[("age", SortDirection::Descending), ("age", SortDirection::Ascending)]);
        assert_eq!(current_direction(&sorts, "age"), SortDirection::Descending);
    }

    #[test]
    fn test_three_phase_closure() {
        for d in SortDirection::iter() {
            let cycle = SortCycle::ThreePhase;
            let back = next_direction(cycle, next_direction(cycle, next_direction(cycle, d)));
            assert_eq!(back, d, "three-phase cycle does not close from {d}");
        }
    }

    #[test]
    fn test_cycles() {
        use SortDirection::*;
        let walk = |cycle: SortCycle| {
            let mut d = None;
            let mut seen = vec![];
            for _ in 0..4 {
                d = next_direction(cycle, d);
                seen.push(d);
            }
            seen
        };
        assert_eq!(walk(SortCycle::ThreePhase), vec![Ascending, Descending, None, Ascending]);
        assert_eq!(walk(SortCycle::TwoPhase), vec![Ascending, None, Ascending, None]);
        assert_eq!(walk(SortCycle::Toggle), vec![Ascending, Descending, Ascending, Descending]);
        assert_eq!(next_direction(SortCycle::TwoPhase, Descending), None);
    }

    #[test]
    fn test_single_mode() {
        let sorts = list(&[("name", SortDirection::Ascending)]);
        let next = next_direction(SortCycle::ThreePhase, current_direction(&sorts, "name"));
        assert_eq!(next, SortDirection::Descending);
        assert_eq!(
            apply_sort(&sorts, SortMode::Single, "name", next),
            list(&[("name", SortDirection::Descending)])
        );

        let sorts = list(&[("name", SortDirection::Descending)]);
        let next = next_direction(SortCycle::ThreePhase, current_direction(&sorts, "name"));
        assert_eq!(next, SortDirection::None);
        assert_eq!(apply_sort(&sorts, SortMode::Single, "name", next), SortList::new());
    }

    #[test]
    fn test_single_mode_discards_others() {
        let sorts = list(&[
            ("age", SortDirection::Ascending),
            ("name", SortDirection::Ascending),
            ("city", SortDirection::Descending),
        ]);
        for d in SortDirection::iter() {
            let out = apply_sort(&sorts, SortMode::Single, "name", d);
            assert!(out.len() <= 1);
        }
        assert_eq!(
            apply_sort(&sorts, SortMode::Single, "zip", SortDirection::Ascending),
            list(&[("zip", SortDirection::Ascending)])
        );
    }

    #[test]
    fn test_multi_mode_append() {
        let sorts = list(&[("age", SortDirection::Ascending)]);
        let next = next_direction(SortCycle::ThreePhase, current_direction(&sorts, "name"));
        assert_eq!(next, SortDirection::Ascending);
        assert_eq!(
            apply_sort(&sorts, SortMode::Multi, "name", next),
            list(&[("age", SortDirection::Ascending), ("name", SortDirection::Ascending)])
        );
    }

    #[test]
    fn test_multi_mode_update_in_place_and_remove() {
        let sorts = list(&[
            ("age", SortDirection::Ascending),
            ("name", SortDirection::Ascending),
            ("city", SortDirection::Descending),
        ]);
        assert_eq!(
            apply_sort(&sorts, SortMode::Multi, "name", SortDirection::Descending),
            list(&[
                ("age", SortDirection::Ascending),
                ("name", SortDirection::Descending),
                ("city", SortDirection::Descending),
            ])
        );
        assert_eq!(
            apply_sort(&sorts, SortMode::Multi, "name", SortDirection::None),
            list(&[("age", SortDirection::Ascending), ("city", SortDirection::Descending)])
        );
        // removing an absent key is a no-op
        assert_eq!(apply_sort(&sorts, SortMode::Multi, "zip", SortDirection::None), sorts);
    }

    #[test]
    fn test_multi_mode_collapses_duplicates() {
        let sorts = list(&[
            ("name", SortDirection::Ascending),
            ("age", SortDirection::Ascending),
            ("name", SortDirection::Descending),
        ]);
        assert_eq!(
            apply_sort(&sorts, SortMode::Multi, "name", SortDirection::Descending),
            list(&[("name", SortDirection::Descending), ("age", SortDirection::Ascending)])
        );
        assert_eq!(
            apply_sort(&sorts, SortMode::Multi, "name", SortDirection::None),
            list(&[("age", SortDirection::Ascending)])
        );
    }

    #[test]
    fn test_multi_mode_collapses_untouched_duplicates() {
        let sorts = list(&[
            ("age", SortDirection::Ascending),
            ("city", SortDirection::Descending),
            ("age", SortDirection::Descending),
        ]);
        let out = apply_sort(&sorts, SortMode::Multi, "name", SortDirection::Ascending);
        assert_eq!(
            out,
            list(&[
                ("age", SortDirection::Ascending),
                ("city", SortDirection::Descending),
                ("name", SortDirection::Ascending),
            ])
        );
        assert_eq!(out.iter().filter(|s| s.prop == "age").count(), 1);

        let out = apply_sort(&sorts, SortMode::Multi, "city", SortDirection::None);
        assert_eq!(out, list(&[("age", SortDirection::Ascending)]));
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let sorts = list(&[("age", SortDirection::Ascending)]);
        let before = sorts.clone();
        let _ = apply_sort(&sorts, SortMode::Multi, "age", SortDirection::None);
        let _ = apply_sort(&sorts, SortMode::Single, "name", SortDirection::Ascending);
        assert_eq!(sorts, before);
    }

    #[test]
    fn test_display_class() {
        assert_eq!(display_class(SortDirection::Ascending), "sort-asc");
        assert_eq!(display_class(SortDirection::Descending), "sort-desc");

        let sorts = list(&[("age", SortDirection::Ascending)]);
        for prop in ["name", "city"] {
            assert_eq!(display_class(current_direction(&sorts, prop)), SORT_NONE_CLASS);
        }
    }
}
