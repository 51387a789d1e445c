//! End-to-end: observations → spatial index → per-region counting →
//! category aggregation → formatted report.

use geo::{polygon, MultiPolygon, Point};
use species_diversity::{
    format_report, summarize_regions, GeoObservation, GeoRegion, MetricError, ObservationIndex,
};
use std::collections::HashMap;

fn observation(x: f64, y: f64, species: &str) -> GeoObservation {
    let mut attributes = HashMap::new();
    attributes.insert("species".to_owned(), species.to_owned());
    GeoObservation::new(Point::new(x, y), attributes)
}

fn square(x0: f64, y0: f64, side: f64) -> GeoRegion {
    let poly = polygon![
        (x: x0, y: y0),
        (x: x0 + side, y: y0),
        (x: x0 + side, y: y0 + side),
        (x: x0, y: y0 + side),
        (x: x0, y: y0),
    ];
    GeoRegion::new(MultiPolygon::new(vec![poly]))
}

/// Right triangle with legs on the axes; its bounding box is the full
/// square, so bbox candidates above the hypotenuse must be rejected by the
/// containment recheck.
fn triangle() -> GeoRegion {
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 0.0, y: 10.0),
        (x: 0.0, y: 0.0),
    ];
    GeoRegion::new(MultiPolygon::new(vec![poly]))
}

fn survey_index() -> ObservationIndex {
    ObservationIndex::new(vec![
        // Coastal triangle: 4 Heron, 4 Egret inside.
        observation(1.0, 1.0, "Heron"),
        observation(2.0, 1.0, "Heron"),
        observation(1.0, 2.0, "Heron"),
        observation(2.0, 2.0, "Heron"),
        observation(1.0, 3.0, "Egret"),
        observation(3.0, 1.0, "Egret"),
        observation(2.0, 3.0, "Egret"),
        observation(3.0, 2.0, "Egret"),
        // Inside the triangle's bbox but outside the triangle itself.
        observation(8.0, 8.0, "Heron"),
        // Second coastal region.
        observation(25.0, 25.0, "Heron"),
        // Inland region.
        observation(41.0, 41.0, "Gull"),
        observation(42.0, 42.0, "Gull"),
        observation(43.0, 43.0, "Tern"),
        observation(44.0, 44.0, "Tern"),
        // Nowhere near any region.
        observation(-100.0, -100.0, "Albatross"),
    ])
}

fn survey_regions() -> Vec<(String, GeoRegion)> {
    vec![
        ("coastal".to_owned(), triangle()),
        ("coastal".to_owned(), square(20.0, 20.0, 10.0)),
        ("inland".to_owned(), square(40.0, 40.0, 10.0)),
    ]
}

#[test]
fn aggregates_counts_across_regions_by_category() {
    let index = survey_index();
    let summary = summarize_regions(&survey_regions(), &index, "species");

    assert_eq!(summary.len(), 2);
    // Second coastal region adds one more Heron; the bbox decoy at (8, 8)
    // and the far-away Albatross never appear.
    assert_eq!(summary["coastal"]["Heron"], 5);
    assert_eq!(summary["coastal"]["Egret"], 4);
    assert_eq!(summary["coastal"].len(), 2);
    assert_eq!(summary["inland"]["Gull"], 2);
    assert_eq!(summary["inland"]["Tern"], 2);
}

#[test]
fn formats_the_survey_report() {
    let index = survey_index();
    let summary = summarize_regions(&survey_regions(), &index, "species");

    let report = format_report(&summary).unwrap();
    assert_eq!(
        report,
        "coastal: 2  0.687  0.506  0.991\ninland: 2  0.693  0.500  1.000\n"
    );
}

#[test]
fn singleton_category_aborts_the_report() {
    let index = survey_index();
    let mut regions = survey_regions();
    // Only the lone Heron at (25, 25) falls in this one.
    regions.push(("estuary".to_owned(), square(24.0, 24.0, 2.0)));

    let summary = summarize_regions(&regions, &index, "species");
    assert_eq!(summary["estuary"].len(), 1);

    let err = format_report(&summary).unwrap_err();
    assert_eq!(err.category, "estuary");
    assert!(matches!(err.source, MetricError::DivisionByZero(_)));
}
