use radar_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using RadarError
pub type Result<T> = std::result::Result<T, RadarError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the HTTP boundary returns to
/// clients and that tests assert against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation (boundary-owned)
    InvalidInput,
    UnknownProtocol,
    NegativeCount,

    // Selection (engine-owned)
    NoValidTargets,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownProtocol => "ERR_UNKNOWN_PROTOCOL",
            ExErrorKind::NegativeCount => "ERR_NEGATIVE_COUNT",
            ExErrorKind::NoValidTargets => "ERR_NO_VALID_TARGETS",
        }
    }

    /// True for kinds that reject a request before it reaches the engine
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::UnknownProtocol | ExErrorKind::NegativeCount
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the context the boundary needs to build
/// a client-facing response.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending input field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " op={}", op)?;
        }
        if let Some(field) = &self.field {
            write!(f, " field={}", field)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " request_id={}", request_id)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for radar operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RadarError {
    // ===== Validation Errors =====
    /// Protocol token outside the closed enumeration
    #[error("Unknown protocol: {token}")]
    UnknownProtocol { token: String },

    /// A count that must be non-negative was negative
    #[error("Negative count for {field}: {value}")]
    NegativeCount { field: String, value: i64 },

    /// Malformed request shape
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // ===== Selection Errors =====
    /// Every candidate was pruned by the filter chain
    #[error("No valid targets found among {candidates} candidates")]
    NoValidTargets { candidates: usize },
}

impl From<RadarError> for ExError {
    fn from(err: RadarError) -> Self {
        let message = err.to_string();
        match err {
            RadarError::UnknownProtocol { .. } => ExError::new(ExErrorKind::UnknownProtocol)
                .with_field("protocols")
                .with_message(message),

            RadarError::NegativeCount { field, .. } => ExError::new(ExErrorKind::NegativeCount)
                .with_field(field)
                .with_message(message),

            RadarError::InvalidInput { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            RadarError::NoValidTargets { .. } => ExError::new(ExErrorKind::NoValidTargets)
                .with_op("find_next_target")
                .with_message(message),
        }
    }
}
