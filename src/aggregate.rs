use crate::types::{CategorySummary, SpeciesCounts};
use std::collections::hash_map::Entry;

/// Merge one polygon's species counts into the running per-category summary.
///
/// A new category takes `polygon_counts` as-is (the caller is done with it,
/// so it is moved rather than copied). An existing category gets a
/// per-species additive merge, creating entries for species not seen in that
/// category before.
///
/// The merge is associative and commutative per category key, so partial
/// summaries built in parallel can be folded together in any order.
pub fn merge_into(summary: &mut CategorySummary, category: &str, polygon_counts: SpeciesCounts) {
    match summary.entry(category.to_owned()) {
        Entry::Vacant(slot) => {
            slot.insert(polygon_counts);
        }
        Entry::Occupied(mut slot) => {
            let existing = slot.get_mut();
            for (species, count) in polygon_counts {
                *existing.entry(species).or_insert(0) += count;
            }
        }
    }
}
