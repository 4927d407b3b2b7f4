//! Translation of sqlx errors into store outcomes.

use crate::ports::StoreError;

/// Maps a driver error onto the store's tagged outcomes.
pub fn map_sqlx_error(error: sqlx::Error) -> StoreError {
    match error {
        sqlx::Error::RowNotFound => StoreError::NoDocuments,
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => StoreError::Unavailable(error.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => StoreError::Decode(error.to_string()),
        sqlx::Error::Database(db) => StoreError::MalformedQuery(db.to_string()),
        other => StoreError::Unavailable(other.to_string()),
    }
}
