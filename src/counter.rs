use crate::host::{Observation, Region};
use crate::types::SpeciesCounts;
use tracing::warn;

/// Count observations of each species strictly inside one polygon.
///
/// `candidates` is expected to be prefiltered to the polygon's bounding box
/// by the host's spatial index, but full containment is re-checked here for
/// every point, so a wider candidate set only costs time, never correctness.
///
/// The species label is extracted from each contained observation via
/// `attribute(species_field)` and counted exactly as returned (no
/// normalization). Observations missing the field are skipped with a
/// warning. Returns an empty map when no candidate is contained.
pub fn summarize_polygon<'a, R, O, I>(
    region: &R,
    candidates: I,
    species_field: &str,
) -> SpeciesCounts
where
    R: Region,
    O: Observation<Point = R::Point> + 'a,
    I: IntoIterator<Item = &'a O>,
{
    let mut counts = SpeciesCounts::new();

    for obs in candidates {
        // Bounding-box overlap is not containment; check the real geometry.
        if !region.contains(obs.geometry()) {
            continue;
        }

        match obs.attribute(species_field) {
            Some(species) => *counts.entry(species.to_owned()).or_insert(0) += 1,
            None => warn!("observation has no '{}' attribute, skipping", species_field),
        }
    }

    counts
}
