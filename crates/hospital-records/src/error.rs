//! Record Errors
//!
//! Every way a submission, navigation or configuration load can be rejected.

use crate::entity::EntityKind;

/// Common result type for recorder operations
pub type RecordResult<T> = Result<T, RecordError>;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("unknown section: {0:?}")]
    UnknownSection(String),
    #[error("{entity} form has no field {field:?}")]
    UnknownField { entity: EntityKind, field: String },
    #[error("{entity} submission is missing field {field:?}")]
    MissingField { entity: EntityKind, field: &'static str },
    #[error("{entity} field {field:?} cannot be empty")]
    EmptyField { entity: EntityKind, field: &'static str },
    #[error("invalid age {0:?}: enter a whole number between 0 and 150")]
    InvalidAge(String),
    #[error("invalid date {0:?}: use YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid amount {0:?}: enter a non-negative number")]
    InvalidAmount(String),
    #[error("invalid desk configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl RecordError {
    /// Whether the error came from user input rather than page wiring
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RecordError::EmptyField { .. }
                | RecordError::InvalidAge(_)
                | RecordError::InvalidDate(_)
                | RecordError::InvalidAmount(_)
        )
    }
}
