//! Partial-update `SET` list construction.

use crate::error::{CoreError, CoreResult};
use crate::sql::{quote_ident, ColumnMap, SqlFragments, SqlValue};

/// Turns `(field, value)` pairs into `"column"=$n` assignments.
///
/// ## Rules
/// - `fields` must not be empty (`InvalidArgument("no data")`)
/// - Columns come from `columns`, falling back to the field name
/// - Placeholders are `$1..$n` in the iteration order of `fields`
/// - Values are passed through unchecked; `SqlValue::Null` clears a column
///
/// ## Example
/// ```rust
/// use jobly_core::sql::{partial_update, COMPANY_COLUMNS};
/// use jobly_core::SqlValue;
///
/// let set = partial_update(
///     [("numEmployees", SqlValue::from(50_i64)), ("logoUrl", SqlValue::from("http://x"))],
///     &COMPANY_COLUMNS,
/// )
/// .unwrap();
///
/// assert_eq!(set.join(", "), "\"num_employees\"=$1, \"logo_url\"=$2");
/// ```
pub fn partial_update<'a, I>(fields: I, columns: &ColumnMap) -> CoreResult<SqlFragments>
where
    I: IntoIterator<Item = (&'a str, SqlValue)>,
{
    let mut set = SqlFragments::new();

    for (field, value) in fields {
        let column = quote_ident(columns.resolve(field));
        set.push_bound(value, |placeholder| format!("{column}={placeholder}"));
    }

    if set.is_empty() {
        return Err(CoreError::invalid_argument("no data"));
    }

    Ok(set)
}
