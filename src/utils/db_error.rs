//! Classification of SQLx errors into registry errors.

use crate::domain::error::RegistryError;

/// Maps a [`sqlx::Error`] onto the registry taxonomy.
///
/// Connectivity problems (pool exhaustion, closed pool, I/O, TLS, protocol)
/// become [`RegistryError::StoreUnavailable`] so that the HTTP layer answers
/// 503 instead of pretending the code does not exist. A unique violation on
/// the primary key becomes [`RegistryError::Conflict`] for `code`.
pub fn classify_sqlx_error(e: sqlx::Error, code: &str) -> RegistryError {
    if let Some(db_err) = e.as_database_error()
        && db_err.is_unique_violation()
    {
        return RegistryError::Conflict(code.to_string());
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_) => {
            tracing::error!(error = %e, "Database unreachable");
            RegistryError::StoreUnavailable(e.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            RegistryError::Internal(other.to_string())
        }
    }
}
