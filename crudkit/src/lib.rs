//! # crudkit
//!
//! Generic create/read/update/delete over PostgreSQL, driven by declarative
//! equality filters.
//!
//! ## Features
//!
//! - **Generic CRUD**: one [`Crud<T>`](crud::Crud) per record type, no
//!   per-table boilerplate beyond an [`Entity`](crud::Entity) impl
//! - **Filters**: AND/OR/WHERE equality groups with limit and offset
//! - **Parameter binding**: every filter value is bound, never interpolated
//! - **Configuration**: Figment-based loading from TOML files and
//!   `CRUDKIT_` environment variables
//! - **Tracing**: structured logs for every store call
//!
//! Connection pooling, migrations and transactions stay with the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use crudkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config);
//!
//!     let pool = PgPool::connect("postgres://localhost/blog").await?;
//!     let posts: Crud<Post> = Crud::with_config(pool, config.crud);
//!
//!     let drafts = posts.list(&Filter::new().and_string("status", "draft").limit(10)).await?;
//!     println!("{} drafts", drafts.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crud;
pub mod error;
pub mod observability;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, CrudConfig, ServiceConfig};
    pub use crate::crud::{
        apply_filter, Crud, CrudError, CrudOperation, CrudResult, Crudable, Entity, Field, Filter,
        OrderDirection, PredicateSink, SelectQuery, Value,
    };
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;

    pub use sqlx::{FromRow, PgPool};
}
