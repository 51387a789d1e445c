use crate::error::{MetricError, ReportError};
use crate::metrics::{evenness, richness, shannons, simpsons};
use crate::types::{CategorySummary, SpeciesCounts};

/// Render a per-category diversity summary as plain text.
///
/// One line per category, in ascending category order so output is
/// deterministic regardless of hash-map iteration:
///
/// ```text
/// <category>: <richness> <shannons> <simpsons> <evenness>
/// ```
///
/// Floats are fixed-point with 3 decimals and at least 2 characters before
/// the decimal point, space padded. An empty summary renders as an empty
/// string.
///
/// The first category whose metrics fail (empty or single-species counts)
/// aborts the whole report; the returned [`ReportError`] names it. No
/// NaN or infinity ever reaches the output.
pub fn format_report(summary: &CategorySummary) -> Result<String, ReportError> {
    let mut categories: Vec<&String> = summary.keys().collect();
    categories.sort();

    let mut result = String::new();
    for category in categories {
        let line = category_line(category, &summary[category]).map_err(|source| ReportError {
            category: category.clone(),
            source,
        })?;
        result.push_str(&line);
    }

    Ok(result)
}

fn category_line(category: &str, counts: &SpeciesCounts) -> Result<String, MetricError> {
    Ok(format!(
        "{}: {} {:6.3} {:6.3} {:6.3}\n",
        category,
        richness(counts),
        shannons(counts)?,
        simpsons(counts)?,
        evenness(counts)?,
    ))
}
