use thiserror::Error;

/// Errors raised by the strict numeric parsing API.
///
/// The editing path never produces these; they exist for callers that want to
/// validate widget configuration up front.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum NumericError {
    #[error("`{text}` is not a valid {field}")]
    InvalidNumber { field: &'static str, text: String },

    #[error("step must be greater than zero, got `{0}`")]
    InvalidStep(String),

    #[error("min `{min}` is greater than max `{max}`")]
    InvertedBounds { min: String, max: String },
}
