//! Record types the CRUD helper can persist

use sqlx::{postgres::PgRow, FromRow};

use super::value::Value;

/// A row type stored in a single table with an `i64` primary key
///
/// Reads go through `FromRow`; writes use [`values`](Entity::values), which
/// lists every column except the primary key in the order they should be
/// written.
///
/// # Example
///
/// ```rust
/// use crudkit::crud::{Entity, Value};
///
/// #[derive(sqlx::FromRow)]
/// struct Post {
///     id: i64,
///     slug: String,
///     title: String,
///     views: i32,
/// }
///
/// impl Entity for Post {
///     const TABLE: &'static str = "posts";
///
///     fn id(&self) -> i64 {
///         self.id
///     }
///
///     fn values(&self) -> Vec<(&'static str, Value)> {
///         vec![
///             ("slug", self.slug.as_str().into()),
///             ("title", self.title.as_str().into()),
///             ("views", self.views.into()),
///         ]
///     }
/// }
/// ```
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin {
    /// Table name
    const TABLE: &'static str;

    /// Primary key column
    const ID_COLUMN: &'static str = "id";

    /// Primary key of this record
    fn id(&self) -> i64;

    /// Non-key columns and their values
    fn values(&self) -> Vec<(&'static str, Value)>;
}
