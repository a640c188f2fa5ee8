use thiserror::Error;

/// Error types raised while adapting backend report payloads into a
/// [`MonthlyReport`](crate::MonthlyReport).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A field the report cannot be built without is absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but its value is out of range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// The same category appears twice in one report
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// More days elapsed than the month has
    #[error("Days elapsed ({elapsed}) exceeds total days ({total})")]
    DaysOutOfRange { elapsed: u32, total: u32 },
}

impl ReportError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ReportError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Type alias for Result with ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
