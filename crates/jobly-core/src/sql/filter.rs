//! Search filter `WHERE` list construction.
//!
//! ## Predicate Order
//! ```text
//! Company: name → minEmployees → maxEmployees
//! Job:     title → minSalary → hasEquity
//! ```
//! Parameters are numbered in that order, skipping criteria that were not
//! supplied. An empty result means "no WHERE clause".

use crate::error::{CoreError, CoreResult};
use crate::sql::{quote_ident, SqlFragments};
use crate::types::{CompanyFilter, JobFilter};

/// Case-insensitive substring match on `column`.
fn push_contains(predicates: &mut SqlFragments, column: &str, needle: &str) {
    let column = quote_ident(column);
    predicates.push_bound(format!("%{needle}%"), |p| {
        format!("lower({column}) LIKE lower({p})")
    });
}

/// Builds the predicates for a company search.
///
/// ## Rules
/// - `minEmployees > maxEmployees` fails before anything is built
/// - `nameLike` (even `""`) matches names containing it, ignoring case
/// - `0` is a real bound, not "absent"
pub fn company_filter(filter: &CompanyFilter) -> CoreResult<SqlFragments> {
    if let (Some(min), Some(max)) = (filter.min_employees, filter.max_employees) {
        if min > max {
            return Err(CoreError::invalid_argument(
                "maxEmployees must be greater than minEmployees",
            ));
        }
    }

    let mut predicates = SqlFragments::new();

    if let Some(name) = &filter.name_like {
        push_contains(&mut predicates, "name", name);
    }
    if let Some(min) = filter.min_employees {
        predicates.push_bound(min, |p| format!("\"num_employees\" >= {p}"));
    }
    if let Some(max) = filter.max_employees {
        predicates.push_bound(max, |p| format!("\"num_employees\" <= {p}"));
    }

    Ok(predicates)
}

/// Builds the predicates for a job search.
///
/// `hasEquity: true` adds `"equity" > 0` without a parameter;
/// `false` or absent leaves equity unfiltered.
pub fn job_filter(filter: &JobFilter) -> CoreResult<SqlFragments> {
    let mut predicates = SqlFragments::new();

    if let Some(title) = &filter.title {
        push_contains(&mut predicates, "title", title);
    }
    if let Some(min) = filter.min_salary {
        predicates.push_bound(min, |p| format!("\"salary\" >= {p}"));
    }
    if filter.has_equity == Some(true) {
        predicates.push_literal("\"equity\" > 0");
    }

    Ok(predicates)
}
