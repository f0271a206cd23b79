use serde::Serialize;

use super::value_objects::{AnalysisStatus, BoundingBox, OperationHandle};

/// A recognized line of text before plate validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub bounding_box: BoundingBox,
}

/// Lines recognized on one page, in reading order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadPage {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: i32,
    pub height: i32,
}

/// Terminal (or in-flight) payload returned by the vision service.
///
/// Only a `Succeeded` document carries a usable result tree. `read_results`
/// is filled by text reads, `metadata` by image analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisDocument {
    pub status: AnalysisStatus,
    pub read_results: Option<Vec<ReadPage>>,
    pub metadata: Option<ImageMetadata>,
}

impl AnalysisDocument {
    pub fn with_status(status: AnalysisStatus) -> Self {
        Self {
            status,
            read_results: None,
            metadata: None,
        }
    }
}

/// Immediate response to a submitted image.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service finished synchronously; the body is the terminal document.
    Completed(AnalysisDocument),
    /// The service accepted the job; poll the handle for the result.
    Pending(OperationHandle),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateMatch {
    pub text: String,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub id: u32,
    pub label: String,
    pub bounding_box: BoundingBox,
}

/// Typed result of one analysis, depending on the configured mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutput {
    Plates(Vec<PlateMatch>),
    Spots(Vec<ParkingSpot>),
}

impl AnalysisOutput {
    pub fn len(&self) -> usize {
        match self {
            AnalysisOutput::Plates(plates) => plates.len(),
            AnalysisOutput::Spots(spots) => spots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
