use std::collections::HashMap;

/// Observation counts per species label.
///
/// Labels are compared exactly as extracted from the point layer, no
/// normalization (case- and whitespace-sensitive). An entry is only created
/// when a species is observed, so every stored count is at least 1; absence
/// means zero.
pub type SpeciesCounts = HashMap<String, u32>;

/// Per-category species counts, accumulated across polygons.
// Map<Category, Map<Species, Count>>
pub type CategorySummary = HashMap<String, SpeciesCounts>;
