//! Species diversity summaries for polygon regions.
//!
//! Given point observations of species occurrences and a set of polygon
//! regions grouped into categories (habitat types, survey zones, ...), this
//! crate counts the observations inside each polygon, accumulates the counts
//! per category, and computes four diversity statistics per category:
//! richness, Shannon index, Simpson index, and evenness.
//!
//! Geometry is supplied by the host through the traits in [`host`]: the
//! crate never inspects coordinates itself, it only asks "is this point
//! inside this polygon" and "which points are near this bounding box". A
//! ready-made adapter backed by `geo` and `rstar` lives in [`index`].
//!
//! Typical flow:
//!
//! ```text
//! observations → ObservationIndex → summarize_regions → format_report
//! ```
//!
//! The core is single-threaded; [`processing::summarize_regions`] runs the
//! per-polygon counting on the rayon pool and merges the partial results
//! sequentially, which is safe because the merge is associative and
//! commutative per category key.

pub mod aggregate;
pub mod counter;
pub mod error;
pub mod host;
pub mod index;
pub mod metrics;
pub mod processing;
pub mod report;
pub mod types;

pub use aggregate::merge_into;
pub use counter::summarize_polygon;
pub use error::{MetricError, ReportError};
pub use host::{Observation, PointSource, Region};
pub use index::{GeoObservation, GeoRegion, ObservationIndex};
pub use metrics::{evenness, richness, shannons, simpsons};
pub use processing::summarize_regions;
pub use report::format_report;
pub use types::{CategorySummary, SpeciesCounts};
