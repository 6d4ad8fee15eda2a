//! Declarative filters for CRUD queries
//!
//! A [`Filter`] is a bag of equality conditions grouped by how they combine
//! (AND, OR, WHERE) and by value type, plus optional pagination. It is built
//! per request, handed to [`apply_filter`](super::apply_filter) once and then
//! dropped.
//!
//! # Example
//!
//! ```rust
//! use crudkit::crud::Filter;
//!
//! let filter = Filter::new()
//!     .and_string("status", "published")
//!     .and_int64("author_id", 7)
//!     .limit(20);
//!
//! assert_eq!(filter.and_string.len(), 1);
//! assert_eq!(filter.limit, 20);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction for ordering list results
///
/// # Example
///
/// ```rust
/// use crudkit::crud::OrderDirection;
///
/// assert_eq!(OrderDirection::Descending.as_sql(), "DESC");
/// assert_eq!(format!("{}", OrderDirection::Ascending), "asc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Sort in ascending order (A-Z, 0-9)
    #[serde(alias = "asc")]
    Ascending,
    /// Sort in descending order (Z-A, 9-0)
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

impl OrderDirection {
    /// SQL keyword for an `ORDER BY` clause
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// A single `key = value` condition
///
/// The key is inserted verbatim into the predicate template. It is not
/// checked against the table's columns; a bad key fails when the query runs.
///
/// # Example
///
/// ```rust
/// use crudkit::crud::Field;
///
/// let field = Field::new("slug", "hello-world".to_string());
/// assert_eq!(field.key, "slug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field<V> {
    /// Column name
    pub key: String,
    /// Value the column must equal
    pub value: V,
}

impl<V> Field<V> {
    /// Create a new condition
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Equality conditions and pagination for a single query
///
/// Conditions live in three groups with one list per value type:
///
/// - `and_*`: every condition must hold
/// - `or_*`: appended as OR predicates
/// - `where_*`: every condition must hold; behaves exactly like `and_*`
///
/// The AND and WHERE groups are kept as separate fields so payloads written
/// against either name keep working. They compile to the same predicates.
///
/// `limit` and `offset` are ignored unless positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// OR conditions on 32-bit integer columns
    pub or_int: Vec<Field<i32>>,
    /// OR conditions on 64-bit integer columns
    pub or_int64: Vec<Field<i64>>,
    /// OR conditions on text columns
    pub or_string: Vec<Field<String>>,
    /// AND conditions on 32-bit integer columns
    pub and_int: Vec<Field<i32>>,
    /// AND conditions on 64-bit integer columns
    pub and_int64: Vec<Field<i64>>,
    /// AND conditions on text columns
    pub and_string: Vec<Field<String>>,
    /// WHERE conditions on 32-bit integer columns
    pub where_int: Vec<Field<i32>>,
    /// WHERE conditions on 64-bit integer columns
    pub where_int64: Vec<Field<i64>>,
    /// WHERE conditions on text columns
    pub where_string: Vec<Field<String>>,
    /// Maximum number of rows, ignored unless positive
    pub limit: i64,
    /// Number of rows to skip, ignored unless positive
    pub offset: i64,
}

impl Filter {
    /// Create an empty filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on `email = ?`
    ///
    /// # Example
    ///
    /// ```rust
    /// use crudkit::crud::Filter;
    ///
    /// let filter = Filter::where_email("ada@example.com");
    /// assert_eq!(filter.where_string[0].key, "email");
    /// ```
    pub fn where_email(email: impl Into<String>) -> Self {
        Self::new().where_string("email", email)
    }

    /// Filter on `id = ?`
    #[must_use]
    pub fn where_id(id: i64) -> Self {
        Self::new().where_int64("id", id)
    }

    /// Filter on `slug = ?`
    pub fn where_slug(slug: impl Into<String>) -> Self {
        Self::new().where_string("slug", slug)
    }

    /// Filter on both `slug = ?` and `id = ?`
    ///
    /// Despite the name both conditions are conjunctive, so a row must match
    /// the slug and the id.
    pub fn where_slug_or_id(slug: impl Into<String>, id: i64) -> Self {
        Self::new().where_string("slug", slug).where_int64("id", id)
    }

    /// Add an AND condition on an `i32` column
    #[must_use]
    pub fn and_int(mut self, key: impl Into<String>, value: i32) -> Self {
        self.and_int.push(Field::new(key, value));
        self
    }

    /// Add an AND condition on an `i64` column
    #[must_use]
    pub fn and_int64(mut self, key: impl Into<String>, value: i64) -> Self {
        self.and_int64.push(Field::new(key, value));
        self
    }

    /// Add an AND condition on a text column
    #[must_use]
    pub fn and_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.and_string.push(Field::new(key, value.into()));
        self
    }

    /// Add an OR condition on an `i32` column
    #[must_use]
    pub fn or_int(mut self, key: impl Into<String>, value: i32) -> Self {
        self.or_int.push(Field::new(key, value));
        self
    }

    /// Add an OR condition on an `i64` column
    #[must_use]
    pub fn or_int64(mut self, key: impl Into<String>, value: i64) -> Self {
        self.or_int64.push(Field::new(key, value));
        self
    }

    /// Add an OR condition on a text column
    #[must_use]
    pub fn or_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.or_string.push(Field::new(key, value.into()));
        self
    }

    /// Add a WHERE condition on an `i32` column
    #[must_use]
    pub fn where_int(mut self, key: impl Into<String>, value: i32) -> Self {
        self.where_int.push(Field::new(key, value));
        self
    }

    /// Add a WHERE condition on an `i64` column
    #[must_use]
    pub fn where_int64(mut self, key: impl Into<String>, value: i64) -> Self {
        self.where_int64.push(Field::new(key, value));
        self
    }

    /// Add a WHERE condition on a text column
    #[must_use]
    pub fn where_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.where_string.push(Field::new(key, value.into()));
        self
    }

    /// Set the maximum number of rows
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the number of rows to skip
    #[must_use]
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Paginate by page number (1-indexed) and page size
    ///
    /// # Example
    ///
    /// ```rust
    /// use crudkit::crud::Filter;
    ///
    /// let filter = Filter::new().page(3, 20);
    /// assert_eq!(filter.limit, 20);
    /// assert_eq!(filter.offset, 40);
    /// ```
    #[must_use]
    pub fn page(mut self, page_number: i64, page_size: i64) -> Self {
        self.offset = page_number.saturating_sub(1).max(0).saturating_mul(page_size);
        self.limit = page_size;
        self
    }

    /// Number of equality conditions across all groups
    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.conjunction_count() + self.disjunction_count()
    }

    /// Number of conditions compiled to AND predicates (AND and WHERE groups)
    #[must_use]
    pub fn conjunction_count(&self) -> usize {
        self.and_int.len()
            + self.and_int64.len()
            + self.and_string.len()
            + self.where_int.len()
            + self.where_int64.len()
            + self.where_string.len()
    }

    /// Number of conditions compiled to OR predicates
    #[must_use]
    pub fn disjunction_count(&self) -> usize {
        self.or_int.len() + self.or_int64.len() + self.or_string.len()
    }

    /// True when the filter has no conditions and no effective pagination
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.condition_count() == 0 && self.limit <= 0 && self.offset <= 0
    }
}
