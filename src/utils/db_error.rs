/// True when the error is a unique violation on the short-code index, i.e.
/// another writer won the race for this code.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("short_urls_short_code_key"))
}
