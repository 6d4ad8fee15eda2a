//! CRUD error types
//!
//! Every failure coming back from the store is wrapped in a [`CrudError`]
//! that names the operation which failed. The store error itself is kept
//! untouched and exposed through [`std::error::Error::source`].
//!
//! # Example
//!
//! ```rust
//! use crudkit::crud::{CrudError, CrudOperation};
//!
//! let error = CrudError::new(CrudOperation::Insert, sqlx::Error::RowNotFound);
//! assert_eq!(error.operation(), CrudOperation::Insert);
//! assert!(error.to_string().starts_with("insert error: "));
//! ```

use std::fmt;

use thiserror::Error;

/// Operation being performed when the store failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudOperation {
    /// Inserting a new record
    Insert,
    /// Updating a record by primary key
    Update,
    /// Deleting a record by primary key
    Delete,
    /// Listing records matching a filter
    List,
    /// Fetching one record matching a filter
    Get,
    /// Fetching one record by a single column
    GetBy,
}

impl fmt::Display for CrudOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "insert"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::GetBy => write!(f, "getBy"),
        }
    }
}

/// A store failure tagged with the operation that hit it
#[derive(Debug, Error)]
#[error("{operation} error: {source}")]
pub struct CrudError {
    operation: CrudOperation,
    #[source]
    source: sqlx::Error,
}

impl CrudError {
    /// Wrap a store error
    pub fn new(operation: CrudOperation, source: sqlx::Error) -> Self {
        Self { operation, source }
    }

    /// The operation that failed
    pub fn operation(&self) -> CrudOperation {
        self.operation
    }

    /// The store error as returned by the driver
    pub fn store_error(&self) -> &sqlx::Error {
        &self.source
    }

    /// Unwrap into the store error
    pub fn into_store_error(self) -> sqlx::Error {
        self.source
    }

    /// Whether the query ran but matched no row
    ///
    /// # Example
    ///
    /// ```rust
    /// use crudkit::crud::{CrudError, CrudOperation};
    ///
    /// let error = CrudError::new(CrudOperation::Get, sqlx::Error::RowNotFound);
    /// assert!(error.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(self.source, sqlx::Error::RowNotFound)
    }
}

/// Result type for CRUD operations
pub type CrudResult<T> = std::result::Result<T, CrudError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_operation_display() {
        assert_eq!(format!("{}", CrudOperation::Insert), "insert");
        assert_eq!(format!("{}", CrudOperation::Update), "update");
        assert_eq!(format!("{}", CrudOperation::Delete), "delete");
        assert_eq!(format!("{}", CrudOperation::List), "list");
        assert_eq!(format!("{}", CrudOperation::Get), "get");
        assert_eq!(format!("{}", CrudOperation::GetBy), "getBy");
    }

    #[test]
    fn test_display_prefixes_operation() {
        let error = CrudError::new(CrudOperation::List, sqlx::Error::PoolTimedOut);
        let display = error.to_string();
        assert!(display.starts_with("list error: "));
        assert!(display.contains(&sqlx::Error::PoolTimedOut.to_string()));
    }

    #[test]
    fn test_source_is_store_error() {
        let error = CrudError::new(CrudOperation::Delete, sqlx::Error::PoolClosed);
        let source = error.source().map(ToString::to_string);
        assert_eq!(source, Some(sqlx::Error::PoolClosed.to_string()));
        assert!(matches!(error.store_error(), sqlx::Error::PoolClosed));
    }

    #[test]
    fn test_is_not_found() {
        assert!(CrudError::new(CrudOperation::GetBy, sqlx::Error::RowNotFound).is_not_found());
        assert!(!CrudError::new(CrudOperation::GetBy, sqlx::Error::PoolClosed).is_not_found());
    }

    #[test]
    fn test_into_store_error() {
        let error = CrudError::new(CrudOperation::Update, sqlx::Error::RowNotFound);
        assert_eq!(error.operation(), CrudOperation::Update);
        assert!(matches!(error.into_store_error(), sqlx::Error::RowNotFound));
    }
}
