use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown permission token: {0}")]
    UnknownPermission(String),
}
