/// Stage of the analysis pipeline where a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Submit,
    Poll,
    Extract,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisPhase::Submit => write!(f, "submit"),
            AnalysisPhase::Poll => write!(f, "poll"),
            AnalysisPhase::Extract => write!(f, "extract"),
        }
    }
}

/// Errors raised while analyzing an image.
/// Display strings are code-style identifiers; details live in the fields.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The service answered with a status this client does not accept.
    #[error("analysis.transport ({phase}): HTTP {status}")]
    Transport {
        phase: AnalysisPhase,
        status: u16,
        body: String,
    },
    /// The request never produced an HTTP response (connect error, timeout, broken body).
    #[error("analysis.network ({phase}): {message}")]
    Network {
        phase: AnalysisPhase,
        message: String,
    },
    /// The service broke the submit-then-poll contract.
    #[error("analysis.protocol ({phase}): {reason}")]
    Protocol {
        phase: AnalysisPhase,
        reason: String,
        /// Response body that could not be understood, when there was one.
        body: Option<String>,
    },
    #[error("analysis.poll_exhausted: still pending after {attempts} attempts")]
    PollExhausted { attempts: u32 },
    #[error("analysis.validation ({phase}): {reason}")]
    Validation {
        phase: AnalysisPhase,
        reason: String,
    },
    #[error("analysis.cancelled ({phase})")]
    Cancelled { phase: AnalysisPhase },
}

impl AnalysisError {
    pub fn transport(phase: AnalysisPhase, status: u16, body: impl Into<String>) -> Self {
        AnalysisError::Transport {
            phase,
            status,
            body: body.into(),
        }
    }

    pub fn network(phase: AnalysisPhase, message: impl Into<String>) -> Self {
        AnalysisError::Network {
            phase,
            message: message.into(),
        }
    }

    pub fn protocol(phase: AnalysisPhase, reason: impl Into<String>) -> Self {
        AnalysisError::Protocol {
            phase,
            reason: reason.into(),
            body: None,
        }
    }

    pub fn protocol_with_body(
        phase: AnalysisPhase,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        AnalysisError::Protocol {
            phase,
            reason: reason.into(),
            body: Some(body.into()),
        }
    }

    pub fn validation(phase: AnalysisPhase, reason: impl Into<String>) -> Self {
        AnalysisError::Validation {
            phase,
            reason: reason.into(),
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        match self {
            AnalysisError::Transport { phase, .. }
            | AnalysisError::Network { phase, .. }
            | AnalysisError::Protocol { phase, .. }
            | AnalysisError::Validation { phase, .. }
            | AnalysisError::Cancelled { phase } => *phase,
            AnalysisError::PollExhausted { .. } => AnalysisPhase::Poll,
        }
    }

    /// Text captured from the remote service, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            AnalysisError::Transport { body, .. } => Some(body.as_str()),
            AnalysisError::Protocol { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
