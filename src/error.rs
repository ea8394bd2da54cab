use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("empty list")]
pub struct EmptyListError;

pub type Result<T, E = EmptyListError> = std::result::Result<T, E>;
