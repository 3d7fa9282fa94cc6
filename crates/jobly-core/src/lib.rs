//! # jobly-core: Pure Data-Access Logic for Jobly
//!
//! This crate holds everything about companies and jobs that can be decided
//! without touching the database: the record types, the payloads the HTTP
//! layer hands in, payload validation, and the builders that turn partial
//! updates and search filters into SQL fragments with positional parameters.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Jobly Data Flow                                 │
//! │                                                                         │
//! │  Route handler (outside this workspace)                                │
//! │       │  already-parsed CompanyFilter / CompanyUpdate / NewJob ...      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ jobly-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ sql::cols │  │sql::update│  │sql::filter│  │   │
//! │  │   │  Company  │  │ ColumnMap │  │ SET list  │  │ WHERE list│  │   │
//! │  │   │    Job    │  │           │  │  $1..$n   │  │  $1..$n   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  jobly-db repositories: bind values, run SQL, map rows                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records (Company, Job) and request payloads
//! - [`sql`] - Column registry, partial-update and filter builders
//! - [`validation`] - Payload validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use jobly_core::sql::company_filter;
//! use jobly_core::CompanyFilter;
//!
//! let filter = CompanyFilter {
//!     name_like: Some("net".to_string()),
//!     ..Default::default()
//! };
//! let predicates = company_filter(&filter).unwrap();
//!
//! assert_eq!(predicates.fragments(), ["lower(\"name\") LIKE lower($1)"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod sql;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use sql::{SqlFragments, SqlValue};
pub use types::*;
