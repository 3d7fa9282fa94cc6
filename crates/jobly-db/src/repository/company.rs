//! # Company Repository
//!
//! Database operations for companies.
//!
//! ## Key Operations
//! - Create (single statement, conflict-checked)
//! - List / filtered search, ordered by name
//! - Get with the company's jobs
//! - Partial update and delete by handle

use jobly_core::sql::{company_filter, partial_update, COMPANY_COLUMNS};
use jobly_core::validation::{
    validate_company_filter, validate_company_update, validate_new_company,
};
use jobly_core::{Company, CompanyDetail, CompanyFilter, CompanyUpdate, NewCompany, SqlValue};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::bind_values;
use crate::repository::job::JobRepository;

/// Columns selected for every `Company` row.
const SELECT_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// Repository for company database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CompanyRepository::new(pool);
///
/// let matches = repo.filter(&CompanyFilter { name_like: Some("net".into()), ..Default::default() }).await?;
/// let detail = repo.get("anderson").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: SqlitePool,
}

impl CompanyRepository {
    /// Creates a new CompanyRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CompanyRepository { pool }
    }

    /// Inserts a new company.
    ///
    /// The duplicate check and the insert are one statement
    /// (`ON CONFLICT (handle) DO NOTHING`), so two concurrent creates with
    /// the same handle cannot both succeed.
    ///
    /// ## Returns
    /// * `Ok(Company)` - The stored row
    /// * `Err(DbError::AlreadyExists)` - Handle (or name) already taken
    pub async fn create(&self, company: &NewCompany) -> DbResult<Company> {
        validate_new_company(company)?;

        debug!(handle = %company.handle, "Creating company");

        let sql = format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (handle) DO NOTHING \
             RETURNING {SELECT_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Company>(&sql)
            .bind(company.handle.as_str())
            .bind(company.name.as_str())
            .bind(company.description.as_str())
            .bind(company.num_employees)
            .bind(company.logo_url.as_deref())
            .fetch_optional(&self.pool)
            .await?;

        created.ok_or_else(|| DbError::already_exists("company", &company.handle))
    }

    /// Lists every company, ordered by name.
    pub async fn find_all(&self) -> DbResult<Vec<Company>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM companies ORDER BY name");

        let companies = sqlx::query_as::<_, Company>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(companies)
    }

    /// Lists companies matching `filter`, ordered by name.
    ///
    /// An empty filter returns every company.
    ///
    /// ## Errors
    /// * `DbError::InvalidArgument` - negative bound, or `minEmployees > maxEmployees`
    pub async fn filter(&self, filter: &CompanyFilter) -> DbResult<Vec<Company>> {
        validate_company_filter(filter)?;
        let predicates = company_filter(filter)?;

        debug!(predicates = predicates.fragments().len(), "Filtering companies");

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM companies{} ORDER BY name",
            predicates.where_clause()
        );

        let companies = bind_values(sqlx::query_as::<_, Company>(&sql), predicates.into_values())
            .fetch_all(&self.pool)
            .await?;

        debug!(count = companies.len(), "Filter returned companies");
        Ok(companies)
    }

    /// Gets a company and its jobs.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - No company with this handle
    pub async fn get(&self, handle: &str) -> DbResult<CompanyDetail> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM companies WHERE handle = $1");

        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(handle)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("company", handle))?;

        let jobs = JobRepository::new(self.pool.clone())
            .find_by_company(handle)
            .await?;

        Ok(CompanyDetail { company, jobs })
    }

    /// Applies a partial update. Only supplied fields change.
    ///
    /// ## Errors
    /// * `DbError::InvalidArgument` - Nothing to update, or invalid field
    /// * `DbError::NotFound` - No company with this handle
    pub async fn update(&self, handle: &str, update: &CompanyUpdate) -> DbResult<Company> {
        validate_company_update(update)?;
        let set = partial_update(update.fields(), &COMPANY_COLUMNS)?;

        debug!(handle = %handle, fields = set.fragments().len(), "Updating company");

        let sql = format!(
            "UPDATE companies SET {} WHERE handle = {} RETURNING {SELECT_COLUMNS}",
            set.join(", "),
            set.next_placeholder()
        );

        let mut values = set.into_values();
        values.push(SqlValue::from(handle));

        bind_values(sqlx::query_as::<_, Company>(&sql), values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("company", handle))
    }

    /// Deletes a company (and, by cascade, its jobs).
    ///
    /// ## Errors
    /// * `DbError::NotFound` - No company with this handle
    pub async fn remove(&self, handle: &str) -> DbResult<()> {
        debug!(handle = %handle, "Deleting company");

        let result = sqlx::query("DELETE FROM companies WHERE handle = $1")
            .bind(handle)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("company", handle));
        }

        Ok(())
    }

    /// Counts companies (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testutil::seeded_db;
    use jobly_core::CoreError;

    fn new_company() -> NewCompany {
        NewCompany {
            handle: "new".to_string(),
            name: "New".to_string(),
            description: "New Description".to_string(),
            num_employees: Some(1),
            logo_url: Some("http://new.img".to_string()),
        }
    }

    fn handles(companies: &[Company]) -> Vec<&str> {
        companies.iter().map(|c| c.handle.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let db = seeded_db().await;
        let repo = db.companies();

        let created = repo.create(&new_company()).await.unwrap();
        assert_eq!(created.handle, "new");
        assert_eq!(created.num_employees, Some(1));

        let detail = repo.get("new").await.unwrap();
        assert_eq!(detail.company, created);
        assert!(detail.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_handle() {
        let db = seeded_db().await;
        let repo = db.companies();

        repo.create(&new_company()).await.unwrap();
        let err = repo.create(&new_company()).await.unwrap_err();

        assert!(matches!(err, DbError::AlreadyExists { .. }));
        assert_eq!(err.to_string(), "Duplicate company: new");
    }

    #[tokio::test]
    async fn test_create_duplicate_name_caught_by_store() {
        let db = seeded_db().await;

        let company = NewCompany {
            name: "C1".to_string(),
            ..new_company()
        };
        let err = db.companies().create(&company).await.unwrap_err();

        assert!(matches!(err, DbError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_handle() {
        let db = seeded_db().await;

        let company = NewCompany {
            handle: "Not Valid".to_string(),
            ..new_company()
        };
        let err = db.companies().create(&company).await.unwrap_err();

        assert!(matches!(err, DbError::InvalidArgument(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_name() {
        let db = seeded_db().await;

        let companies = db.companies().find_all().await.unwrap();

        assert_eq!(handles(&companies), vec!["c1", "c2", "c3"]);
        assert_eq!(companies[0].description, "Desc1");
        assert_eq!(companies[0].logo_url.as_deref(), Some("http://c1.img"));
    }

    #[tokio::test]
    async fn test_filter_by_name_is_case_insensitive() {
        let db = seeded_db().await;

        let filter = CompanyFilter {
            name_like: Some("c2".to_string()),
            ..Default::default()
        };
        let companies = db.companies().filter(&filter).await.unwrap();

        assert_eq!(handles(&companies), vec!["c2"]);
    }

    #[tokio::test]
    async fn test_filter_by_employee_range() {
        let db = seeded_db().await;

        let filter = CompanyFilter {
            min_employees: Some(2),
            max_employees: Some(3),
            ..Default::default()
        };
        let companies = db.companies().filter(&filter).await.unwrap();

        assert_eq!(handles(&companies), vec!["c2", "c3"]);
    }

    #[tokio::test]
    async fn test_filter_zero_max_employees_matches_none() {
        let db = seeded_db().await;

        let filter = CompanyFilter {
            max_employees: Some(0),
            ..Default::default()
        };
        let companies = db.companies().filter(&filter).await.unwrap();

        assert!(companies.is_empty());
    }

    #[tokio::test]
    async fn test_filter_all_criteria() {
        let db = seeded_db().await;

        let filter = CompanyFilter {
            name_like: Some("C".to_string()),
            min_employees: Some(1),
            max_employees: Some(2),
        };
        let companies = db.companies().filter(&filter).await.unwrap();

        assert_eq!(handles(&companies), vec!["c1", "c2"]);
    }

    #[tokio::test]
    async fn test_empty_filter_matches_everything() {
        let db = seeded_db().await;

        let companies = db.companies().filter(&CompanyFilter::default()).await.unwrap();

        assert_eq!(companies, db.companies().find_all().await.unwrap());
    }

    #[tokio::test]
    async fn test_filter_min_greater_than_max() {
        let db = seeded_db().await;

        let filter = CompanyFilter {
            min_employees: Some(10),
            max_employees: Some(5),
            ..Default::default()
        };
        let err = db.companies().filter(&filter).await.unwrap_err();

        assert_eq!(err.to_string(), "maxEmployees must be greater than minEmployees");
    }

    #[tokio::test]
    async fn test_get_includes_jobs() {
        let db = seeded_db().await;

        let detail = db.companies().get("c1").await.unwrap();

        assert_eq!(detail.company.name, "C1");
        let titles: Vec<&str> = detail.jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["J1", "J2", "J3"]);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let db = seeded_db().await;

        let err = db.companies().get("nope").await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_partial() {
        let db = seeded_db().await;

        let update = CompanyUpdate {
            num_employees: Some(Some(50)),
            logo_url: Some(Some("http://x".to_string())),
            ..Default::default()
        };
        let company = db.companies().update("c1", &update).await.unwrap();

        assert_eq!(
            company,
            Company {
                handle: "c1".to_string(),
                name: "C1".to_string(),
                description: "Desc1".to_string(),
                num_employees: Some(50),
                logo_url: Some("http://x".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_update_null_fields() {
        let db = seeded_db().await;

        let update = CompanyUpdate {
            name: Some("New".to_string()),
            num_employees: Some(None),
            logo_url: Some(None),
            ..Default::default()
        };
        let company = db.companies().update("c1", &update).await.unwrap();

        assert_eq!(company.name, "New");
        assert_eq!(company.num_employees, None);
        assert_eq!(company.logo_url, None);
        assert_eq!(company.description, "Desc1");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let db = seeded_db().await;

        let update = CompanyUpdate {
            name: Some("New".to_string()),
            ..Default::default()
        };
        let err = db.companies().update("nope", &update).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_with_no_data() {
        let db = seeded_db().await;

        let err = db
            .companies()
            .update("c1", &CompanyUpdate::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "no data");
    }

    #[tokio::test]
    async fn test_remove_cascades_to_jobs() {
        let db = seeded_db().await;

        db.companies().remove("c1").await.unwrap();

        assert!(matches!(
            db.companies().get("c1").await,
            Err(DbError::NotFound { .. })
        ));
        assert_eq!(db.jobs().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_not_found() {
        let db = seeded_db().await;

        let err = db.companies().remove("nope").await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
