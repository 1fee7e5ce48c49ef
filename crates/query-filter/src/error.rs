use thiserror::Error;

/// Errors raised while building filters and statements.
///
/// Rendering itself never fails; everything fallible happens when a filter
/// tree is constructed.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A column, parameter or literal name was empty or blank.
    #[error("missing required name: {0} must not be null or empty")]
    MissingName(&'static str),

    /// A pattern filter got a present value that has no text form.
    #[error("value of type {0} has no text form for a pattern filter")]
    NotText(&'static str),

    /// Statement clauses could not be read from their JSON form.
    #[error("invalid statement clauses: {0}")]
    Clauses(#[from] serde_json::Error),
}
