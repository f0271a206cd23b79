//! Wire shapes of Azure Computer Vision v3.2 responses.
//!
//! Every field is optional and unknown fields are ignored, so the service can
//! add properties without breaking decoding. Missing pieces surface as empty
//! results, not as errors.

use serde::Deserialize;

use business::domain::vision::model::{AnalysisDocument, ImageMetadata, ReadPage, TextLine};
use business::domain::vision::value_objects::{AnalysisStatus, BoundingBox};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponseDto {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub analyze_result: Option<AnalyzeResultDto>,
    #[serde(default)]
    pub metadata: Option<MetadataDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResultDto {
    #[serde(default)]
    pub read_results: Option<Vec<ReadResultDto>>,
}

#[derive(Debug, Deserialize)]
pub struct ReadResultDto {
    #[serde(default)]
    pub lines: Option<Vec<LineDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    #[serde(default)]
    pub text: Option<String>,
    /// Older API versions report fractional pixels; they are truncated.
    #[serde(default)]
    pub bounding_box: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct MetadataDto {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

impl AnalysisResponseDto {
    /// Converts the wire document into the domain document.
    ///
    /// A synchronous analysis body has no `status`; it is complete by
    /// definition. A polled body must carry one.
    pub fn into_document(self, completed_inline: bool) -> Result<AnalysisDocument, String> {
        let status = match self.status {
            Some(raw) => raw.parse::<AnalysisStatus>()?,
            None if completed_inline => AnalysisStatus::Succeeded,
            None => return Err("polled document has no status".to_string()),
        };

        let read_results = self
            .analyze_result
            .and_then(|result| result.read_results)
            .map(|pages| pages.into_iter().map(ReadResultDto::into_page).collect());

        let metadata = self.metadata.and_then(|metadata| {
            Some(ImageMetadata {
                width: metadata.width?,
                height: metadata.height?,
            })
        });

        Ok(AnalysisDocument {
            status,
            read_results,
            metadata,
        })
    }
}

impl ReadResultDto {
    fn into_page(self) -> ReadPage {
        let lines = self
            .lines
            .unwrap_or_default()
            .into_iter()
            .filter_map(|line| {
                let text = line.text?;
                let coordinates = line
                    .bounding_box?
                    .into_iter()
                    .map(|value| value as i32)
                    .collect();
                Some(TextLine {
                    text,
                    bounding_box: BoundingBox::new(coordinates),
                })
            })
            .collect();
        ReadPage { lines }
    }
}
