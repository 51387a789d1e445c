//! Host adapter backed by `geo` and `rstar`.
//!
//! For hosts without their own geometry stack: observations carry a
//! `geo::Point` plus an attribute record, regions wrap a `geo::MultiPolygon`,
//! and [`ObservationIndex`] answers bounding-box queries from an R-tree.
//! Containment and bounding-box math are delegated entirely to `geo`.

use crate::host::{Observation, PointSource, Region};
use geo::algorithm::bounding_rect::BoundingRect;
use geo::algorithm::contains::Contains;
use geo::{MultiPolygon, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;
use tracing::debug;

/// A point observation with its attribute record.
#[derive(Debug, Clone)]
pub struct GeoObservation {
    point: Point<f64>,
    attributes: HashMap<String, String>,
}

impl GeoObservation {
    pub fn new(point: Point<f64>, attributes: HashMap<String, String>) -> Self {
        GeoObservation { point, attributes }
    }
}

impl Observation for GeoObservation {
    type Point = Point<f64>;

    fn geometry(&self) -> &Point<f64> {
        &self.point
    }

    fn attribute(&self, field: &str) -> Option<&str> {
        self.attributes.get(field).map(String::as_str)
    }
}

/// A polygon region with its bounding box computed up front.
#[derive(Debug, Clone)]
pub struct GeoRegion {
    geometry: MultiPolygon<f64>,
    bbox: Rect<f64>,
}

impl GeoRegion {
    pub fn new(geometry: MultiPolygon<f64>) -> Self {
        // Empty geometry has no bounding rect; a degenerate rect matches
        // nothing in the point index, which is the right answer for it.
        let bbox = geometry.bounding_rect().unwrap_or(Rect::new(
            geo::Coord { x: 0.0, y: 0.0 },
            geo::Coord { x: 0.0, y: 0.0 },
        ));
        GeoRegion { geometry, bbox }
    }
}

impl Region for GeoRegion {
    type Point = Point<f64>;
    type BoundingBox = Rect<f64>;

    fn bounding_box(&self) -> Rect<f64> {
        self.bbox
    }

    fn contains(&self, point: &Point<f64>) -> bool {
        self.geometry.contains(point)
    }
}

// Wrapper for RTree indexing
struct ObsEntry {
    index: usize,
    aabb: AABB<[f64; 2]>,
}

impl RTreeObject for ObsEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

/// Spatial index over observations, answering bounding-box queries.
pub struct ObservationIndex {
    observations: Vec<GeoObservation>,
    tree: RTree<ObsEntry>,
}

impl ObservationIndex {
    pub fn new(observations: Vec<GeoObservation>) -> Self {
        debug!("building spatial index for {} observations", observations.len());
        let entries: Vec<ObsEntry> = observations
            .iter()
            .enumerate()
            .map(|(i, obs)| ObsEntry {
                index: i,
                aabb: AABB::from_point([obs.point.x(), obs.point.y()]),
            })
            .collect();
        let tree = RTree::bulk_load(entries);
        ObservationIndex { observations, tree }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl PointSource for ObservationIndex {
    type Obs = GeoObservation;
    type BoundingBox = Rect<f64>;

    fn points_near(&self, bbox: &Rect<f64>) -> Vec<&GeoObservation> {
        let envelope = AABB::from_corners(
            [bbox.min().x, bbox.min().y],
            [bbox.max().x, bbox.max().y],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| &self.observations[entry.index])
            .collect()
    }
}
