//! # Validation Module
//!
//! Payload validation for companies and jobs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP route                                                   │
//! │  └── JSON shape (serde, deny_unknown_fields)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository (Rust)                                            │
//! │  └── THIS MODULE: field rules before SQL is built                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK constraints (salary >= 0, equity <= 1)                      │
//! │  ├── UNIQUE constraints (handle, name)                                 │
//! │  └── Foreign key (jobs.company_handle)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{CompanyFilter, CompanyUpdate, JobFilter, JobUpdate, NewCompany, NewJob};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a company handle.
pub const MAX_HANDLE_LEN: usize = 25;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a company handle.
///
/// ## Rules
/// - Must not be empty
/// - At most 25 characters
/// - Lowercase ASCII letters, digits, and hyphens only
///
/// ## Example
/// ```rust
/// use jobly_core::validation::validate_handle;
///
/// assert!(validate_handle("anderson-llc").is_ok());
/// assert!(validate_handle("Anderson").is_err());
/// assert!(validate_handle("").is_err());
/// ```
pub fn validate_handle(handle: &str) -> ValidationResult<()> {
    if handle.is_empty() {
        return Err(ValidationError::Required {
            field: "handle".to_string(),
        });
    }

    if handle.len() > MAX_HANDLE_LEN {
        return Err(ValidationError::TooLong {
            field: "handle".to_string(),
            max: MAX_HANDLE_LEN,
        });
    }

    if !handle
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "handle".to_string(),
            reason: "must contain only lowercase letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates that a text field is not blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates that an integer is zero or greater.
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: i64::MAX.to_string(),
        });
    }
    Ok(())
}

/// Validates an equity fraction.
///
/// ## Example
/// ```rust
/// use jobly_core::validation::validate_equity;
///
/// assert!(validate_equity(0.0).is_ok());
/// assert!(validate_equity(1.0).is_ok());
/// assert!(validate_equity(1.5).is_err());
/// ```
pub fn validate_equity(equity: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&equity) {
        return Err(ValidationError::OutOfRange {
            field: "equity".to_string(),
            min: "0".to_string(),
            max: "1".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Payload Validators
// =============================================================================

pub fn validate_new_company(company: &NewCompany) -> ValidationResult<()> {
    validate_handle(&company.handle)?;
    validate_required("name", &company.name)?;
    if let Some(num_employees) = company.num_employees {
        validate_non_negative("numEmployees", num_employees)?;
    }
    Ok(())
}

pub fn validate_company_update(update: &CompanyUpdate) -> ValidationResult<()> {
    if let Some(name) = &update.name {
        validate_required("name", name)?;
    }
    if let Some(Some(num_employees)) = update.num_employees {
        validate_non_negative("numEmployees", num_employees)?;
    }
    Ok(())
}

pub fn validate_company_filter(filter: &CompanyFilter) -> ValidationResult<()> {
    if let Some(min) = filter.min_employees {
        validate_non_negative("minEmployees", min)?;
    }
    if let Some(max) = filter.max_employees {
        validate_non_negative("maxEmployees", max)?;
    }
    Ok(())
}

pub fn validate_new_job(job: &NewJob) -> ValidationResult<()> {
    validate_required("title", &job.title)?;
    validate_handle(&job.company_handle).map_err(|_| ValidationError::InvalidFormat {
        field: "companyHandle".to_string(),
        reason: "must be a valid company handle".to_string(),
    })?;
    if let Some(salary) = job.salary {
        validate_non_negative("salary", salary)?;
    }
    if let Some(equity) = job.equity {
        validate_equity(equity)?;
    }
    Ok(())
}

pub fn validate_job_update(update: &JobUpdate) -> ValidationResult<()> {
    if let Some(title) = &update.title {
        validate_required("title", title)?;
    }
    if let Some(Some(salary)) = update.salary {
        validate_non_negative("salary", salary)?;
    }
    if let Some(Some(equity)) = update.equity {
        validate_equity(equity)?;
    }
    Ok(())
}

pub fn validate_job_filter(filter: &JobFilter) -> ValidationResult<()> {
    if let Some(min) = filter.min_salary {
        validate_non_negative("minSalary", min)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
