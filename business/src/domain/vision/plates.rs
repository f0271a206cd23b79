use std::sync::LazyLock;

use regex::Regex;

use super::model::{AnalysisDocument, PlateMatch};

/// Two letters, an optional space or hyphen, five digits.
static PLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2}[- ]?[0-9]{5}$").expect("plate pattern is a valid regex")
});

/// Strips whitespace, hyphens and colons from a recognized line.
pub fn normalize_candidate(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != ':')
        .collect()
}

pub fn is_plate(candidate: &str) -> bool {
    PLATE_PATTERN.is_match(candidate)
}

/// Collects every line of a succeeded document that reads as a license plate.
///
/// Pages and lines are visited in the order the service returned them. A line
/// that does not match is skipped; it is not an error.
pub fn extract_plates(document: &AnalysisDocument) -> Vec<PlateMatch> {
    if !document.status.is_succeeded() {
        return Vec::new();
    }
    let Some(pages) = document.read_results.as_ref() else {
        return Vec::new();
    };

    pages
        .iter()
        .flat_map(|page| page.lines.iter())
        .filter_map(|line| {
            let candidate = normalize_candidate(&line.text);
            is_plate(&candidate).then(|| PlateMatch {
                text: candidate,
                bounding_box: line.bounding_box.clone(),
            })
        })
        .collect()
}
