use crate::types::{CoverageType, EntryType};

use super::description::missed_run_description;
use super::ChronologyItem;

fn is_missed_week(item: &ChronologyItem) -> bool {
    item.entry_type == EntryType::NoPayment && item.coverage_type == CoverageType::Miss
}

/// merge each run of two or more consecutive missed weeks into one row
///
/// The merged row keeps the first week's index, date and opening values and
/// the last week's closing values. Every other row passes through untouched.
pub fn collapse_misses(items: Vec<ChronologyItem>) -> Vec<ChronologyItem> {
    let mut collapsed: Vec<ChronologyItem> = Vec::with_capacity(items.len());
    let mut run: Vec<ChronologyItem> = Vec::new();

    for item in items {
        if is_missed_week(&item) {
            run.push(item);
            continue;
        }
        flush_run(&mut run, &mut collapsed);
        collapsed.push(item);
    }
    flush_run(&mut run, &mut collapsed);

    collapsed
}

fn flush_run(run: &mut Vec<ChronologyItem>, out: &mut Vec<ChronologyItem>) {
    if run.len() < 2 {
        out.append(run);
        return;
    }

    let rows = std::mem::take(run);
    let week_count = rows.len() as u32;
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return;
    };

    let mut merged = first.clone();
    merged.id = format!("weeks-{}-{}", first.week_index, last.week_index);
    merged.weekly_paid = rows.iter().map(|r| r.weekly_paid).sum();
    merged.surplus_after = last.surplus_after;
    merged.deficit_after = last.deficit_after;
    merged.balance_after = last.balance_after;
    merged.description =
        missed_run_description(first.week_index, last.week_index, last.deficit_after);
    merged.week_count = Some(week_count);

    out.push(merged);
}
