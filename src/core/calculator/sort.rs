use crate::core::calculator::collation::locale_compare;
use crate::core::calculator::duration::compute_duration;
use crate::core::calculator::filter::start_instant;
use crate::models::{SortDirection, SortKey, SortSpec, WorkRecord};
use crate::utils::date::parse_optional_instant;
use std::cmp::Ordering;

/// Sort shifts in place according to `spec`.
///
/// Records whose timestamps cannot be parsed compare equal to everything,
/// so the comparator is not a total order. `slice::sort_by` may panic on
/// such comparators; a stable insertion sort never moves an item past one
/// it compares equal to.
pub fn sort_records(records: &mut [WorkRecord], spec: &SortSpec) {
    insertion_sort_by(records, |a, b| compare(a, b, spec));
}

fn compare(a: &WorkRecord, b: &WorkRecord, spec: &SortSpec) -> Ordering {
    let ord = match spec.key {
        // chronological, direction ignored
        SortKey::None => return compare_instants(start_instant(a), start_instant(b)),
        SortKey::State => locale_compare(&a.stage, &b.stage),
        SortKey::StartDate => compare_instants(
            parse_optional_instant(Some(&a.start_date), a.start_hour.as_deref()),
            parse_optional_instant(Some(&b.start_date), b.start_hour.as_deref()),
        ),
        // end date is paired with the start hour
        SortKey::EndDate => compare_instants(
            parse_optional_instant(a.end_date.as_deref(), a.start_hour.as_deref()),
            parse_optional_instant(b.end_date.as_deref(), b.start_hour.as_deref()),
        ),
        SortKey::Duration => compute_duration(a)
            .sort_key()
            .cmp(&compute_duration(b).sort_key()),
    };

    match spec.direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

fn compare_instants<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

fn insertion_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
