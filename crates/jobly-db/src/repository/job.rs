//! # Job Repository
//!
//! Database operations for job postings.
//!
//! Job titles repeat across companies, so `create` performs no
//! natural-key check; the only constraint is that `company_handle`
//! references an existing company, which the database enforces.

use jobly_core::sql::{job_filter, partial_update, JOB_COLUMNS};
use jobly_core::validation::{validate_job_filter, validate_job_update, validate_new_job};
use jobly_core::{Job, JobFilter, JobUpdate, NewJob, SqlValue};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::bind_values;

/// Columns selected for every `Job` row.
const SELECT_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Repository for job database operations.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: SqlitePool,
}

impl JobRepository {
    /// Creates a new JobRepository.
    pub fn new(pool: SqlitePool) -> Self {
        JobRepository { pool }
    }

    /// Inserts a new job and returns it with its generated id.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - `company_handle` does not exist
    pub async fn create(&self, job: &NewJob) -> DbResult<Job> {
        validate_new_job(job)?;

        debug!(title = %job.title, company = %job.company_handle, "Creating job");

        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SELECT_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Job>(&sql)
            .bind(job.title.as_str())
            .bind(job.salary)
            .bind(job.equity)
            .bind(job.company_handle.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Lists every job, ordered by title then company.
    pub async fn find_all(&self) -> DbResult<Vec<Job>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM jobs ORDER BY title, company_handle");

        let jobs = sqlx::query_as::<_, Job>(&sql).fetch_all(&self.pool).await?;

        Ok(jobs)
    }

    /// Lists jobs matching `filter`, ordered like [`find_all`](Self::find_all).
    pub async fn filter(&self, filter: &JobFilter) -> DbResult<Vec<Job>> {
        validate_job_filter(filter)?;
        let predicates = job_filter(filter)?;

        debug!(predicates = predicates.fragments().len(), "Filtering jobs");

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM jobs{} ORDER BY title, company_handle",
            predicates.where_clause()
        );

        let jobs = bind_values(sqlx::query_as::<_, Job>(&sql), predicates.into_values())
            .fetch_all(&self.pool)
            .await?;

        debug!(count = jobs.len(), "Filter returned jobs");
        Ok(jobs)
    }

    /// Lists the jobs posted by one company, ordered by id.
    pub async fn find_by_company(&self, company_handle: &str) -> DbResult<Vec<Job>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM jobs WHERE company_handle = $1 ORDER BY id");

        let jobs = sqlx::query_as::<_, Job>(&sql)
            .bind(company_handle)
            .fetch_all(&self.pool)
            .await?;

        Ok(jobs)
    }

    /// Gets a job by id.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - No job with this id
    pub async fn get(&self, id: i64) -> DbResult<Job> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM jobs WHERE id = $1");

        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("job", id))
    }

    /// Applies a partial update. Only supplied fields change.
    ///
    /// ## Errors
    /// * `DbError::InvalidArgument` - Nothing to update, or invalid field
    /// * `DbError::NotFound` - No job with this id
    pub async fn update(&self, id: i64, update: &JobUpdate) -> DbResult<Job> {
        validate_job_update(update)?;
        let set = partial_update(update.fields(), &JOB_COLUMNS)?;

        debug!(id = id, fields = set.fragments().len(), "Updating job");

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = {} RETURNING {SELECT_COLUMNS}",
            set.join(", "),
            set.next_placeholder()
        );

        let mut values = set.into_values();
        values.push(SqlValue::from(id));

        bind_values(sqlx::query_as::<_, Job>(&sql), values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("job", id))
    }

    /// Deletes a job.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - No job with this id
    pub async fn remove(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting job");

        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("job", id));
        }

        Ok(())
    }

    /// Counts jobs (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
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

    fn titles(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let db = seeded_db().await;

        let new_job = NewJob {
            title: "Engineer".to_string(),
            salary: Some(100_000),
            equity: Some(0.05),
            company_handle: "c2".to_string(),
        };
        let created = db.jobs().create(&new_job).await.unwrap();

        assert_eq!(created.title, "Engineer");
        assert_eq!(created.company_handle, "c2");

        let fetched = db.jobs().get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_repeated_title_allowed() {
        let db = seeded_db().await;

        let new_job = NewJob {
            title: "J1".to_string(),
            salary: None,
            equity: None,
            company_handle: "c2".to_string(),
        };
        db.jobs().create(&new_job).await.unwrap();

        assert_eq!(db.jobs().count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_create_unknown_company() {
        let db = seeded_db().await;

        let new_job = NewJob {
            title: "Ghost".to_string(),
            salary: None,
            equity: None,
            company_handle: "nope".to_string(),
        };
        let err = db.jobs().create(&new_job).await.unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_find_all() {
        let db = seeded_db().await;

        let jobs = db.jobs().find_all().await.unwrap();

        assert_eq!(titles(&jobs), vec!["J1", "J2", "J3"]);
        assert_eq!(jobs[0].salary, Some(1));
        assert_eq!(jobs[0].equity, Some(0.1));
        assert_eq!(jobs[2].equity, None);
    }

    #[tokio::test]
    async fn test_filter_by_title() {
        let db = seeded_db().await;

        let filter = JobFilter {
            title: Some("j2".to_string()),
            ..Default::default()
        };
        let jobs = db.jobs().filter(&filter).await.unwrap();

        assert_eq!(titles(&jobs), vec!["J2"]);
    }

    #[tokio::test]
    async fn test_filter_min_salary_and_equity() {
        let db = seeded_db().await;

        let filter = JobFilter {
            min_salary: Some(2),
            has_equity: Some(true),
            ..Default::default()
        };
        let jobs = db.jobs().filter(&filter).await.unwrap();

        assert_eq!(titles(&jobs), vec!["J2"]);
    }

    #[tokio::test]
    async fn test_filter_has_equity_false_is_unfiltered() {
        let db = seeded_db().await;

        let filter = JobFilter {
            has_equity: Some(false),
            ..Default::default()
        };
        let jobs = db.jobs().filter(&filter).await.unwrap();

        assert_eq!(jobs.len(), 3);
    }

    #[tokio::test]
    async fn test_filter_min_salary_zero() {
        let db = seeded_db().await;

        let filter = JobFilter {
            min_salary: Some(0),
            ..Default::default()
        };
        let jobs = db.jobs().filter(&filter).await.unwrap();

        assert_eq!(jobs.len(), 3);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let db = seeded_db().await;

        let err = db.jobs().get(0).await.unwrap_err();

        assert_eq!(err.to_string(), "No job: 0");
    }

    #[tokio::test]
    async fn test_update_partial() {
        let db = seeded_db().await;
        let job = db.jobs().find_all().await.unwrap().remove(0);

        let update = JobUpdate {
            title: Some("Senior J1".to_string()),
            equity: Some(None),
            ..Default::default()
        };
        let updated = db.jobs().update(job.id, &update).await.unwrap();

        assert_eq!(updated.id, job.id);
        assert_eq!(updated.title, "Senior J1");
        assert_eq!(updated.salary, job.salary);
        assert_eq!(updated.equity, None);
        assert_eq!(updated.company_handle, "c1");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let db = seeded_db().await;

        let update = JobUpdate {
            salary: Some(Some(10)),
            ..Default::default()
        };
        let err = db.jobs().update(0, &update).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_rejects_bad_equity() {
        let db = seeded_db().await;

        let update = JobUpdate {
            equity: Some(Some(2.0)),
            ..Default::default()
        };
        let err = db.jobs().update(1, &update).await.unwrap_err();

        assert!(matches!(err, DbError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_remove() {
        let db = seeded_db().await;
        let job = db.jobs().find_all().await.unwrap().remove(0);

        db.jobs().remove(job.id).await.unwrap();

        assert!(matches!(
            db.jobs().get(job.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_remove_not_found() {
        let db = seeded_db().await;

        let err = db.jobs().remove(0).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
