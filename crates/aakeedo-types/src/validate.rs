/// A decoded payload that does not satisfy its record's invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field `{field}`: {reason}")]
pub struct ShapeError {
    pub field: &'static str,
    pub reason: String,
}

impl ShapeError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Field-level checks that serde's type mapping cannot express
pub trait Validate {
    fn validate(&self) -> Result<(), ShapeError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ShapeError> {
        self.iter().try_for_each(Validate::validate)
    }
}

pub(crate) fn non_empty_str(field: &'static str, value: &str) -> Result<(), ShapeError> {
    if value.is_empty() {
        return Err(ShapeError::new(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn non_empty_list<T>(field: &'static str, value: &[T]) -> Result<(), ShapeError> {
    if value.is_empty() {
        return Err(ShapeError::new(field, "must contain at least one element"));
    }
    Ok(())
}
