use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Fee market params not initialized, was the genesis stored?")]
    MissingParams,
    #[error("Store lock poisoned")]
    LockError,
    #[error("{0}")]
    Custom(String),
}
