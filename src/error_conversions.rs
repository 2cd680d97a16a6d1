//! Error conversion glue between the value objects, the pagination core and
//! the rendering layer.
//!
//! The domain layer must not depend on pagination or service error types, so
//! the `From` impls that bridge them live here.

use crate::domain::types::TypeConstraintError;
use crate::errors::PaginationError;

impl From<TypeConstraintError> for PaginationError {
    fn from(val: TypeConstraintError) -> Self {
        PaginationError::InvalidInput(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<tera::Error> for PaginationError {
    fn from(val: tera::Error) -> Self {
        PaginationError::Template(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<TypeConstraintError> for crate::services::ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        crate::services::ServiceError::InvalidInput(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<PaginationError> for crate::services::ServiceError {
    fn from(val: PaginationError) -> Self {
        use crate::services::ServiceError;

        match val {
            PaginationError::InvalidInput(message) => ServiceError::InvalidInput(message),
            PaginationError::Template(message) => ServiceError::Internal(message),
        }
    }
}
