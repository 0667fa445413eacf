use thiserror::Error;
use tt_core::CoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error at record {record}: {message}")]
    Parse { record: u64, message: String },

    #[error("catalog record {record}: {source}")]
    Invalid {
        record: u64,
        #[source]
        source: CoreError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
