//! PostgreSQL statement building
//!
//! [`SelectQuery`] is the mutable handle a [`Filter`](super::Filter) is
//! compiled into. It only records what was asked of it; SQL is produced by
//! [`SelectQuery::build`], which returns a `sqlx::QueryBuilder` with every
//! value bound as a parameter.
//!
//! Predicates render flat in the order they were added, each wrapped in
//! parentheses and joined by its own conjunction. The first predicate's
//! conjunction is dropped:
//!
//! ```text
//! SELECT * FROM posts WHERE (a = $1) AND (b = $2) OR (c = $3) ORDER BY id DESC LIMIT 10
//! ```

use sqlx::{Postgres, QueryBuilder};

use super::compiler::PredicateSink;
use super::filter::OrderDirection;
use super::value::Value;

/// How a predicate joins the predicates before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl Conjunction {
    const fn as_sql(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// A recorded `key = value` predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// How this predicate joins the previous ones
    pub conjunction: Conjunction,
    /// Column name, inserted verbatim
    pub key: String,
    /// Bound value; `Null` renders as `IS NULL`
    pub value: Value,
}

/// A `SELECT` against a single table
///
/// # Example
///
/// ```rust
/// use crudkit::crud::{OrderDirection, PredicateSink, SelectQuery};
///
/// let mut query = SelectQuery::new("posts").order_by("id", OrderDirection::Descending);
/// query.and_eq("status", "draft".into());
/// query.or_eq("author_id", 3_i64.into());
/// query.limit(10);
///
/// assert_eq!(
///     query.to_sql(),
///     "SELECT * FROM posts WHERE (status = $1) OR (author_id = $2) ORDER BY id DESC LIMIT 10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    table: String,
    columns: Vec<String>,
    predicates: Vec<Predicate>,
    order_by: Option<(String, OrderDirection)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectQuery {
    /// Select every column of `table`
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            predicates: Vec::new(),
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    /// Restrict the selected columns
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Order the result by a column
    #[must_use]
    pub fn order_by(mut self, column: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some((column.into(), direction));
        self
    }

    /// Table the query reads from
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Predicates in the order they were added
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Row limit, if one was set
    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    /// Row offset, if one was set
    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    /// Render the statement with all values bound
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        if self.columns.is_empty() {
            builder.push("*");
        } else {
            builder.push(self.columns.join(", "));
        }
        builder.push(" FROM ").push(&self.table);

        push_predicates(&mut builder, &self.predicates);

        if let Some((column, direction)) = &self.order_by {
            builder
                .push(" ORDER BY ")
                .push(column)
                .push(" ")
                .push(direction.as_sql());
        }
        if let Some(limit) = self.limit {
            builder.push(" LIMIT ").push(limit);
        }
        if let Some(offset) = self.offset {
            builder.push(" OFFSET ").push(offset);
        }

        builder
    }

    /// The SQL text of [`build`](Self::build), placeholders included
    pub fn to_sql(&self) -> String {
        self.build().sql().to_string()
    }

    fn push_predicate(&mut self, conjunction: Conjunction, key: &str, value: Value) {
        self.predicates.push(Predicate {
            conjunction,
            key: key.to_string(),
            value,
        });
    }
}

impl PredicateSink for SelectQuery {
    fn and_eq(&mut self, key: &str, value: Value) {
        self.push_predicate(Conjunction::And, key, value);
    }

    fn or_eq(&mut self, key: &str, value: Value) {
        self.push_predicate(Conjunction::Or, key, value);
    }

    fn limit(&mut self, limit: u64) {
        self.limit = Some(limit);
    }

    fn offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }
}

/// `INSERT INTO table (..) VALUES (..) RETURNING *`
///
/// With no columns the row is inserted with `DEFAULT VALUES`.
pub fn insert_statement(table: &str, values: &[(&str, Value)]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("INSERT INTO ");
    builder.push(table);

    if values.is_empty() {
        builder.push(" DEFAULT VALUES");
    } else {
        let names: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
        builder.push(" (").push(names.join(", ")).push(") VALUES (");
        for (index, (_, value)) in values.iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            push_value(&mut builder, value);
        }
        builder.push(")");
    }

    builder.push(" RETURNING *");
    builder
}

/// `UPDATE table SET .. WHERE id_column = $n RETURNING *`
///
/// With no columns the id column is assigned to itself, so the statement
/// still returns the current row.
pub fn update_statement(
    table: &str,
    id_column: &str,
    id: i64,
    values: &[(&str, Value)],
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE ");
    builder.push(table).push(" SET ");

    if values.is_empty() {
        builder.push(id_column).push(" = ").push(id_column);
    } else {
        for (index, (column, value)) in values.iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            builder.push(column).push(" = ");
            push_value(&mut builder, value);
        }
    }

    builder
        .push(" WHERE ")
        .push(id_column)
        .push(" = ")
        .push_bind(id)
        .push(" RETURNING *");
    builder
}

/// `DELETE FROM table WHERE id_column = $1`
pub fn delete_statement(table: &str, id_column: &str, id: i64) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("DELETE FROM ");
    builder
        .push(table)
        .push(" WHERE ")
        .push(id_column)
        .push(" = ")
        .push_bind(id);
    builder
}

fn push_predicates(builder: &mut QueryBuilder<'static, Postgres>, predicates: &[Predicate]) {
    for (index, predicate) in predicates.iter().enumerate() {
        if index == 0 {
            builder.push(" WHERE ");
        } else {
            builder.push(predicate.conjunction.as_sql());
        }

        builder.push("(").push(&predicate.key);
        if predicate.value.is_null() {
            builder.push(" IS NULL");
        } else {
            builder.push(" = ");
            push_value(builder, &predicate.value);
        }
        builder.push(")");
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &Value) {
    match value {
        Value::Int(n) => builder.push_bind(*n),
        Value::BigInt(n) => builder.push_bind(*n),
        Value::Text(s) => builder.push_bind(s.clone()),
        Value::Bool(b) => builder.push_bind(*b),
        Value::Double(n) => builder.push_bind(*n),
        Value::Null => builder.push("NULL"),
    };
}
