use crate::domain::upload::ValidationErrorCode;

#[derive(Debug)]
pub enum ApplicationError {
    NotFound,
    InternalError(String),
    DatabaseError(String),
    BadRequest(String),
    Unauthorized,
    Forbidden,
    PayloadTooLarge,
    /// Upload rejected by the image validator; carries the machine-readable code.
    Validation(ValidationErrorCode),
}
