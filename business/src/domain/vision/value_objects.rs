use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::{AnalysisError, AnalysisPhase};

/// Lifecycle status reported by the vision service.
///
/// Parsing ignores case. Anything that is not a known status is kept verbatim
/// as `Other` and treated as terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    Other(String),
}

impl AnalysisStatus {
    /// `notStarted` and `running` keep the poller going; every other status ends it.
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisStatus::NotStarted | AnalysisStatus::Running)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, AnalysisStatus::Succeeded)
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStatus::NotStarted => write!(f, "notStarted"),
            AnalysisStatus::Running => write!(f, "running"),
            AnalysisStatus::Succeeded => write!(f, "succeeded"),
            AnalysisStatus::Failed => write!(f, "failed"),
            AnalysisStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

impl std::str::FromStr for AnalysisStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty analysis status".to_string());
        }
        let status = match trimmed.to_ascii_lowercase().as_str() {
            "notstarted" => AnalysisStatus::NotStarted,
            "running" => AnalysisStatus::Running,
            "succeeded" => AnalysisStatus::Succeeded,
            "failed" => AnalysisStatus::Failed,
            _ => AnalysisStatus::Other(trimmed.to_string()),
        };
        Ok(status)
    }
}

/// Bounding box exactly as the service reported it (or as computed for a grid cell).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox(Vec<i32>);

impl BoundingBox {
    pub fn new(coordinates: Vec<i32>) -> Self {
        Self(coordinates)
    }

    /// Box in `[x, y, width, height]` form.
    pub fn from_rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self(vec![x, y, width, height])
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

/// Reference to a pending remote analysis. Only meaningful inside one analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationHandle(Url);

impl OperationHandle {
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::protocol(
                AnalysisPhase::Submit,
                "accepted response carried an empty operation location",
            ));
        }
        let url = Url::parse(trimmed).map_err(|e| {
            AnalysisError::protocol(
                AnalysisPhase::Submit,
                format!("operation location '{}' is not a valid URL: {}", trimmed, e),
            )
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(AnalysisError::protocol(
                AnalysisPhase::Submit,
                format!("operation location uses unsupported scheme '{}'", other),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rows and columns of the fixed parking layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: i32,
    pub columns: i32,
}

impl GridLayout {
    pub fn new(rows: i32, columns: i32) -> Result<Self, AnalysisError> {
        if rows <= 0 || columns <= 0 {
            return Err(AnalysisError::validation(
                AnalysisPhase::Submit,
                format!("grid layout must be positive, got {}x{}", rows, columns),
            ));
        }
        Ok(Self { rows, columns })
    }
}

impl Default for GridLayout {
    /// Two rows of seven spots.
    fn default() -> Self {
        Self {
            rows: 2,
            columns: 7,
        }
    }
}

/// What to extract from the analyzed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Plates,
    Grid(GridLayout),
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisMode::Plates => write!(f, "plates"),
            AnalysisMode::Grid(layout) => write!(f, "grid({}x{})", layout.rows, layout.columns),
        }
    }
}
