//! Filter compilation
//!
//! [`apply_filter`] walks a [`Filter`] in a fixed order and pushes each
//! condition into anything implementing [`PredicateSink`]. The order is:
//!
//! 1. limit, if positive
//! 2. offset, if positive
//! 3. AND group: `i32`, then `i64`, then text
//! 4. OR group: same type order
//! 5. WHERE group: same type order
//!
//! Within a list, conditions keep their insertion order.
//!
//! How OR predicates bracket against the AND predicates already present is
//! decided by the sink, not here. [`SelectQuery`](super::SelectQuery) renders
//! them flat, so `a AND b` followed by `c OR` reads as `a AND b OR c`, which
//! SQL precedence groups as `(a AND b) OR c`.

use super::filter::{Field, Filter};
use super::value::Value;

/// The operations a query handle must offer to receive a compiled filter
pub trait PredicateSink {
    /// Append `key = value`, combined with AND
    fn and_eq(&mut self, key: &str, value: Value);

    /// Append `key = value`, combined with OR
    fn or_eq(&mut self, key: &str, value: Value);

    /// Cap the number of returned rows
    fn limit(&mut self, limit: u64);

    /// Skip a number of rows
    fn offset(&mut self, offset: u64);
}

impl<S: PredicateSink + ?Sized> PredicateSink for &mut S {
    fn and_eq(&mut self, key: &str, value: Value) {
        (**self).and_eq(key, value);
    }

    fn or_eq(&mut self, key: &str, value: Value) {
        (**self).or_eq(key, value);
    }

    fn limit(&mut self, limit: u64) {
        (**self).limit(limit);
    }

    fn offset(&mut self, offset: u64) {
        (**self).offset(offset);
    }
}

/// Apply every condition of `filter` to `query` and hand the query back
///
/// Never fails. Unknown columns or mismatched types only show up when the
/// query is executed.
///
/// # Example
///
/// ```rust
/// use crudkit::crud::{apply_filter, Filter, SelectQuery};
///
/// let filter = Filter::new().and_string("status", "open").limit(5);
/// let query = apply_filter(SelectQuery::new("tickets"), &filter);
///
/// assert_eq!(
///     query.to_sql(),
///     "SELECT * FROM tickets WHERE (status = $1) LIMIT 5"
/// );
/// ```
pub fn apply_filter<Q: PredicateSink>(mut query: Q, filter: &Filter) -> Q {
    tracing::trace!(
        conjunctions = filter.conjunction_count(),
        disjunctions = filter.disjunction_count(),
        limit = filter.limit,
        offset = filter.offset,
        "Applying filter"
    );

    if filter.limit > 0 {
        query.limit(filter.limit.unsigned_abs());
    }
    if filter.offset > 0 {
        query.offset(filter.offset.unsigned_abs());
    }

    push_all(&mut query, &filter.and_int, Combine::And);
    push_all(&mut query, &filter.and_int64, Combine::And);
    push_all(&mut query, &filter.and_string, Combine::And);

    push_all(&mut query, &filter.or_int, Combine::Or);
    push_all(&mut query, &filter.or_int64, Combine::Or);
    push_all(&mut query, &filter.or_string, Combine::Or);

    push_all(&mut query, &filter.where_int, Combine::And);
    push_all(&mut query, &filter.where_int64, Combine::And);
    push_all(&mut query, &filter.where_string, Combine::And);

    query
}

#[derive(Clone, Copy)]
enum Combine {
    And,
    Or,
}

fn push_all<Q, V>(query: &mut Q, fields: &[Field<V>], combine: Combine)
where
    Q: PredicateSink,
    V: Clone + Into<Value>,
{
    for field in fields {
        let value = field.value.clone().into();
        match combine {
            Combine::And => query.and_eq(&field.key, value),
            Combine::Or => query.or_eq(&field.key, value),
        }
    }
}
