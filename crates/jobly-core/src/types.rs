//! # Domain Types
//!
//! Records stored in the database and the payloads the HTTP layer passes in.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                 ┌─────────────────┐               │
//! │  │    Company      │ 1           n   │      Job        │               │
//! │  │  ─────────────  │◄────────────────│  ─────────────  │               │
//! │  │  handle (PK)    │  company_handle │  id (generated) │               │
//! │  │  name           │                 │  title          │               │
//! │  │  description    │                 │  salary         │               │
//! │  │  num_employees  │                 │  equity [0,1]   │               │
//! │  │  logo_url       │                 │                 │               │
//! │  └─────────────────┘                 └─────────────────┘               │
//! │                                                                         │
//! │  Payloads: NewCompany, CompanyUpdate, CompanyFilter                    │
//! │            NewJob,     JobUpdate,     JobFilter                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absent vs. Null
//! Update payloads use `Option<Option<T>>` for nullable columns:
//! - `None` - field not supplied, column left untouched
//! - `Some(None)` - field supplied as `null`, column cleared
//! - `Some(Some(v))` - field supplied, column set to `v`

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::sql::SqlValue;

/// Deserializes a present field (including `null`) as `Some(..)`.
///
/// Combined with `#[serde(default)]`, a missing field stays `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Company
// =============================================================================

/// A company as stored in the `companies` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Company {
    /// Natural key. Immutable after creation.
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i64>,
    pub logo_url: Option<String>,
}

/// A company together with the jobs it posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,

    /// Jobs whose `company_handle` is this company, ordered by id.
    pub jobs: Vec<Job>,
}

/// Payload for creating a company.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i64>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Partial update for a company. `handle` cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub num_employees: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo_url: Option<Option<String>>,
}

impl CompanyUpdate {
    /// Returns the supplied fields as `(externalName, value)` pairs,
    /// in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::new();
        if let Some(name) = &self.name {
            fields.push(("name", SqlValue::from(name.as_str())));
        }
        if let Some(description) = &self.description {
            fields.push(("description", SqlValue::from(description.as_str())));
        }
        if let Some(num_employees) = self.num_employees {
            fields.push(("numEmployees", SqlValue::from(num_employees)));
        }
        if let Some(logo_url) = &self.logo_url {
            fields.push(("logoUrl", SqlValue::from(logo_url.clone())));
        }
        fields
    }
}

/// Search criteria for companies. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    /// Case-insensitive substring of the company name.
    pub name_like: Option<String>,
    /// Inclusive lower bound on `num_employees`.
    pub min_employees: Option<i64>,
    /// Inclusive upper bound on `num_employees`.
    pub max_employees: Option<i64>,
}

// =============================================================================
// Job
// =============================================================================

/// A job posting as stored in the `jobs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Job {
    /// Generated on insert.
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    /// Fraction of the company offered, in `[0, 1]`.
    pub equity: Option<f64>,
    pub company_handle: String,
}

/// Payload for creating a job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<f64>,
    pub company_handle: String,
}

/// Partial update for a job. `id` and `companyHandle` cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub salary: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub equity: Option<Option<f64>>,
}

impl JobUpdate {
    /// Returns the supplied fields as `(externalName, value)` pairs,
    /// in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::new();
        if let Some(title) = &self.title {
            fields.push(("title", SqlValue::from(title.as_str())));
        }
        if let Some(salary) = self.salary {
            fields.push(("salary", SqlValue::from(salary)));
        }
        if let Some(equity) = self.equity {
            fields.push(("equity", SqlValue::from(equity)));
        }
        fields
    }
}

/// Search criteria for jobs. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    /// Case-insensitive substring of the job title.
    pub title: Option<String>,
    /// Inclusive lower bound on `salary`.
    pub min_salary: Option<i64>,
    /// `Some(true)` keeps only jobs with non-zero equity; anything else
    /// leaves equity unfiltered.
    pub has_equity: Option<bool>,
}

// =============================================================================
// Unit Tests
// =============================================================================
