//! # Repository Module
//!
//! Database repository implementations for Jobly.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Repository Call                                  │
//! │                                                                         │
//! │  Route handler                                                         │
//! │       │  db.companies().filter(&CompanyFilter { .. })                   │
//! │       ▼                                                                 │
//! │  CompanyRepository                                                     │
//! │  ├── validate payload              (jobly_core::validation)            │
//! │  ├── build fragments + values      (jobly_core::sql)                   │
//! │  ├── bind values in order          (bind_values)                       │
//! │  └── run one statement, map rows   (sqlx)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CompanyRepository`](company::CompanyRepository) - Company CRUD and search
//! - [`JobRepository`](job::JobRepository) - Job CRUD and search

use jobly_core::SqlValue;
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};

pub mod company;
pub mod job;

#[cfg(test)]
pub(crate) mod testutil;

/// Binds `values` to `query` in order, so `values[i]` fills `$i+1`.
pub(crate) fn bind_values<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::Real(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
        };
    }
    query
}
