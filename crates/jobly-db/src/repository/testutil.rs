//! Shared fixtures for repository tests.

use jobly_core::{NewCompany, NewJob};

use crate::pool::{Database, DbConfig};

/// An in-memory database with three companies and three jobs:
///
/// ```text
/// c1 (1 employee)  ── J1 (salary 1, equity 0.1), J2 (salary 2, equity 0.2), J3 (salary 3, no equity)
/// c2 (2 employees)
/// c3 (3 employees)
/// ```
pub(crate) async fn seeded_db() -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    for n in 1..=3_i64 {
        db.companies()
            .create(&NewCompany {
                handle: format!("c{n}"),
                name: format!("C{n}"),
                description: format!("Desc{n}"),
                num_employees: Some(n),
                logo_url: Some(format!("http://c{n}.img")),
            })
            .await
            .unwrap();
    }

    let jobs = [
        ("J1", Some(1), Some(0.1)),
        ("J2", Some(2), Some(0.2)),
        ("J3", Some(3), None),
    ];
    for (title, salary, equity) in jobs {
        db.jobs()
            .create(&NewJob {
                title: title.to_string(),
                salary,
                equity,
                company_handle: "c1".to_string(),
            })
            .await
            .unwrap();
    }

    db
}
