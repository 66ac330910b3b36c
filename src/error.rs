use thiserror::Error;

/// Top-level error for a scan.
///
/// Every variant is fatal: the binary prints it and exits with -1.
/// Per-parameter retrieval failures never surface here, they are
/// collected into the report instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("please insert a value with --value")]
    MissingValue,

    #[error("error reading parameters: {0}")]
    Enumerate(#[source] StoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a parameter store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("describe parameters failed: {0}")]
    Describe(String),

    #[error("get parameter [{name}] failed: {reason}")]
    Get { name: String, reason: String },

    #[error("get parameters by path [{path}] failed: {reason}")]
    GetByPath { path: String, reason: String },

    #[error("parameter [{0}] has no value")]
    NoValue(String),

    #[error("invalid snapshot {path}: {reason}")]
    Snapshot { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
