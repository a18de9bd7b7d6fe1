use thiserror::Error;

/// Failure of a catalog use case.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
