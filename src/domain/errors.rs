use thiserror::Error;

/// Form-level validation failures surfaced before any store operation runs.
///
/// The store itself never rejects input; these cover the only user-visible
/// failure path, a required field left empty.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("all question texts must be filled")]
    BlankQuestion,
    #[error("all options must be filled for each question")]
    BlankOption,
    #[error("your cart is empty, add items before checking out")]
    EmptyCart,
}

pub type ValidationResult<T> = Result<T, ValidationError>;
