//! Capabilities supplied by the host geospatial layer.
//!
//! The crate treats geometry as a black box: polygons, points, and the
//! spatial prefilter are whatever the host provides through these traits.
//! The [`crate::index`] module implements them on top of `geo` and `rstar`
//! for hosts that don't bring their own geometry stack.

/// A polygon region, read-only to this crate.
pub trait Region {
    /// The host's point geometry type.
    type Point;
    /// The host's bounding-box type, fed back into [`PointSource::points_near`].
    type BoundingBox;

    /// Bounding box of the polygon, used only to prefilter candidate points.
    fn bounding_box(&self) -> Self::BoundingBox;

    /// Exact geometric containment, not a bounding-box test.
    ///
    /// Boundary semantics (whether a point exactly on the edge counts as
    /// inside) are whatever the host's geometry library defines; the crate
    /// makes no independent boundary decision.
    fn contains(&self, point: &Self::Point) -> bool;
}

/// A single recorded occurrence of a species.
pub trait Observation {
    /// The host's point geometry type.
    type Point;

    /// Where the observation was recorded.
    fn geometry(&self) -> &Self::Point;

    /// Attribute lookup by field name.
    ///
    /// Returns the raw attribute value, or `None` when the record has no
    /// such field. Species labels are used exactly as returned here.
    fn attribute(&self, field: &str) -> Option<&str>;
}

/// Bounding-box prefilter over the host's point layer.
pub trait PointSource {
    /// The observation type this source yields.
    type Obs: Observation;
    /// The bounding-box type accepted by the query.
    type BoundingBox;

    /// All observations whose position intersects `bbox`.
    ///
    /// May over-approximate (a point inside the bbox can still be outside
    /// the polygon); containment is always re-checked when counting, so this
    /// is an optimization, not a correctness requirement.
    fn points_near(&self, bbox: &Self::BoundingBox) -> Vec<&Self::Obs>;
}
