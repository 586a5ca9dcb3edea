use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while constructing tree nodes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid column size {0}: must be an integer between 1 and 12")]
    InvalidColumnSize(u32),

    #[error("Unsupported component type '{0}'")]
    UnsupportedComponentType(String),
}
