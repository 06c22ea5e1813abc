/// Errors returned by the capability store.
///
/// `NotFound` is only produced by permission-agnostic reads. Edit paths
/// (update, delete) report an unknown token and a view-only token alike as
/// [`StoreError::Forbidden`]; both are simply zero matching rows.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No link found for token {token}")]
    NotFound { token: String },

    #[error("Token does not grant edit permission")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
