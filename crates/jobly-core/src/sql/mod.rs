//! # SQL Fragment Construction
//!
//! Builds the dynamic parts of company and job queries: the `SET` list of a
//! partial update and the `WHERE` list of a filtered search.
//!
//! ## How Fragments Become a Query
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Fragment Assembly                                    │
//! │                                                                         │
//! │  CompanyUpdate { numEmployees: 50, logoUrl: "http://x" }               │
//! │       │                                                                 │
//! │       ▼  partial_update(fields, &COMPANY_COLUMNS)                       │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ fragments: "num_employees"=$1           │                           │
//! │  │            "logo_url"=$2                │                           │
//! │  │ values:    [50, "http://x"]             │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼  repository appends its key at next_placeholder() = $3         │
//! │  UPDATE companies SET "num_employees"=$1, "logo_url"=$2                │
//! │   WHERE handle = $3                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Placeholders are only ever produced by [`SqlFragments`], so the index of
//! `$n` always matches the position of its value.

pub mod columns;
pub mod filter;
pub mod update;

pub use columns::{ColumnMap, COMPANY_COLUMNS, JOB_COLUMNS};
pub use filter::{company_filter, job_filter};
pub use update::partial_update;

// =============================================================================
// Values
// =============================================================================

/// A positional parameter value.
///
/// `Null` is what an absent nullable field binds as.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Quotes a column name as a SQL identifier.
///
/// Embedded double quotes are doubled, so the result is always a single
/// identifier.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

// =============================================================================
// Fragment Builder
// =============================================================================

/// An ordered list of SQL fragments with their positional values.
///
/// Every fragment that takes a parameter is pushed together with its value,
/// so placeholder `$i` always refers to `values()[i - 1]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragments {
    fragments: Vec<String>,
    values: Vec<SqlValue>,
}

impl SqlFragments {
    /// Creates an empty fragment list.
    pub fn new() -> Self {
        SqlFragments::default()
    }

    /// Returns the placeholder the next bound value will receive.
    ///
    /// Repositories use this to number the parameters they append after
    /// the dynamic ones (e.g. the key in `WHERE handle = $n`).
    pub fn next_placeholder(&self) -> String {
        format!("${}", self.values.len() + 1)
    }

    /// Pushes a fragment that references one new parameter.
    ///
    /// `render` receives the placeholder (`$1`, `$2`, ...) assigned to `value`.
    pub fn push_bound<F>(&mut self, value: impl Into<SqlValue>, render: F)
    where
        F: FnOnce(&str) -> String,
    {
        let placeholder = self.next_placeholder();
        self.values.push(value.into());
        self.fragments.push(render(&placeholder));
    }

    /// Pushes a fragment that takes no parameter.
    pub fn push_literal(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Joins the fragments with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.fragments.join(separator)
    }

    /// Renders a ` WHERE a AND b` clause, or an empty string when there are
    /// no predicates (match everything).
    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.join(" AND "))
        }
    }

    /// Consumes the builder, returning the values for binding.
    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
