//! Crate-level error type

use thiserror::Error;

use crate::crud::CrudError;

/// Errors raised outside of individual CRUD calls
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// A CRUD operation failed in the store
    #[error(transparent)]
    Crud(#[from] CrudError),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

/// Result type alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::CrudOperation;

    #[test]
    fn test_config_error_display() {
        let error = Error::from(figment::Error::from("missing field `name`".to_string()));
        assert!(error.to_string().starts_with("Configuration error: "));
        assert!(error.to_string().contains("missing field"));
    }

    #[test]
    fn test_crud_error_is_transparent() {
        let error: Error = CrudError::new(CrudOperation::List, sqlx::Error::RowNotFound).into();
        assert!(error.to_string().starts_with("list error: "));
        assert!(matches!(error, Error::Crud(ref e) if e.is_not_found()));
    }
}
