use crate::aggregate::merge_into;
use crate::counter::summarize_polygon;
use crate::host::{Observation, PointSource, Region};
use crate::types::{CategorySummary, SpeciesCounts};
use rayon::prelude::*;
use tracing::{debug, info};

/// Count observations for every region and fold the results by category.
///
/// Each region is counted independently on the rayon pool against the
/// candidates its bounding box pulls from `source`; the per-polygon maps are
/// then merged sequentially into one [`CategorySummary`]. Merging is
/// associative and commutative per category key, so the parallel split
/// cannot change the result.
///
/// Regions sharing a category label accumulate into the same entry.
pub fn summarize_regions<R, S>(
    regions: &[(String, R)],
    source: &S,
    species_field: &str,
) -> CategorySummary
where
    R: Region + Sync,
    S: PointSource<BoundingBox = R::BoundingBox> + Sync,
    S::Obs: Observation<Point = R::Point>,
{
    info!("summarizing {} regions", regions.len());

    let per_region: Vec<(&str, SpeciesCounts)> = regions
        .par_iter()
        .map(|(category, region)| {
            let candidates = source.points_near(&region.bounding_box());
            let counts = summarize_polygon(region, candidates, species_field);
            debug!(
                category = category.as_str(),
                species = counts.len(),
                "region summarized"
            );
            (category.as_str(), counts)
        })
        .collect();

    let mut summary = CategorySummary::new();
    for (category, counts) in per_region {
        merge_into(&mut summary, category, counts);
    }
    summary
}
