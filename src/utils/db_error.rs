//! Classification of raw database errors.

/// Returns true if the error is a unique-constraint violation.
///
/// The only unique column the store writes is `alias`, so a violation on
/// insert always means the alias is taken.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
