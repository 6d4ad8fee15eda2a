//! Generic CRUD over PostgreSQL with declarative filters
//!
//! This module provides a single generic helper, [`Crud`], that inserts,
//! updates, deletes and reads records of any [`Entity`] type, and a
//! [`Filter`] type that describes which rows a read should match.
//!
//! # Features
//!
//! - **Generic CRUD**: [`Crudable`] trait implemented by [`Crud`]
//! - **Filtering**: [`Filter`] groups equality conditions into AND, OR and
//!   WHERE lists, with optional limit and offset
//! - **Compilation**: [`apply_filter`] turns a [`Filter`] into predicates on
//!   any [`PredicateSink`], such as [`SelectQuery`]
//! - **Errors**: every store failure comes back as a [`CrudError`] naming the
//!   operation that failed
//!
//! # Example
//!
//! ```rust,ignore
//! use crudkit::crud::{Crud, Crudable, Entity, Filter, Value};
//!
//! #[derive(sqlx::FromRow)]
//! struct User {
//!     id: i64,
//!     email: String,
//!     name: String,
//! }
//!
//! impl Entity for User {
//!     const TABLE: &'static str = "users";
//!
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//!
//!     fn values(&self) -> Vec<(&'static str, Value)> {
//!         vec![("email", self.email.as_str().into()), ("name", self.name.as_str().into())]
//!     }
//! }
//!
//! let users: Crud<User> = Crud::new(pool);
//! let ada = users.get(&Filter::where_email("ada@example.com")).await?;
//! let page = users.list(&Filter::new().page(2, 25)).await?;
//! ```

mod compiler;
mod entity;
mod error;
mod filter;
mod query;
mod store;
mod traits;
mod value;

pub use compiler::{apply_filter, PredicateSink};
pub use entity::Entity;
pub use error::{CrudError, CrudOperation, CrudResult};
pub use filter::{Field, Filter, OrderDirection};
pub use query::{
    delete_statement, insert_statement, update_statement, Conjunction, Predicate, SelectQuery,
};
pub use store::Crud;
pub use traits::Crudable;
pub use value::Value;
