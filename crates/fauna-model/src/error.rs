use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FaunaError {
    #[error("unknown diet: {0}")]
    UnknownDiet(String),
    #[error("unknown column role: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, FaunaError>;
