use thiserror::Error;

/// Errors raised while handling the lookup form.
///
/// Only `InvalidCrn` is ever shown to the user. The others are logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("CRN must be exactly 6 digits")]
    InvalidCrn,

    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("failed to schedule submission: {0}")]
    Schedule(String),
}
