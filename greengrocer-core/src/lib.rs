pub mod quote;
pub mod receipt;

pub use quote::Quote;
pub use receipt::Receipt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("vegetable not found: {0}")]
    NotFound(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
